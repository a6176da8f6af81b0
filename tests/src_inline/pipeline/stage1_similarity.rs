use super::*;
use crate::model::education::AxisPair;

fn attr(s: &str) -> Attr {
    Attr::single(s)
}

#[test]
fn test_degree_sim_examples() {
    assert_eq!(degree_sim(&attr("PhD"), &attr("Bachelor's")), 0.5);
    assert_eq!(degree_sim(&attr("Bachelor's"), &Attr::absent()), 1.0);
    assert_eq!(degree_sim(&Attr::absent(), &attr("Master's")), 0.0);
}

#[test]
fn test_degree_sim_tiers() {
    assert_eq!(degree_sim(&attr("Master's"), &attr("Master's")), 1.0);
    assert_eq!(degree_sim(&attr("Master's"), &attr("Bachelor's")), 1.0);
    assert_eq!(degree_sim(&attr("Bachelor's"), &attr("Master's")), 0.0);
    assert_eq!(degree_sim(&attr("High School"), &attr("PhD")), 0.0);
    assert_eq!(degree_sim(&attr("PhD"), &attr("High School")), 0.5);
}

#[test]
fn test_degree_sim_list_first_is_authoritative() {
    let cand = Attr::from_list(["Bachelor's", "PhD"]);
    assert_eq!(degree_sim(&cand, &attr("Master's")), 0.0);
    let req = Attr::from_list(["Associate", "PhD"]);
    assert_eq!(degree_sim(&attr("Bachelor's"), &req), 1.0);
}

#[test]
fn test_degree_sim_total_over_shapes() {
    let shapes = vec![
        Attr::absent(),
        Attr::from_list(Vec::<String>::new()),
        attr("Master's"),
        attr("garbage ???"),
        attr("5"),
        Attr::from_list(["PhD", "MBA"]),
    ];
    for c in &shapes {
        for r in &shapes {
            let v = degree_sim(c, r);
            assert!(v == 0.0 || v == 0.5 || v == 1.0, "{v} for {c:?}/{r:?}");
        }
    }
}

#[test]
fn test_degree_sim_unknown_tokens_rank_zero() {
    // Unknown requirement sits at rank 0, so any unknown candidate meets it.
    assert_eq!(degree_sim(&attr("Diploma"), &attr("Doctoral")), 1.0);
    // Unknown candidate against a known requirement falls short.
    assert_eq!(degree_sim(&attr("Diploma"), &attr("Associate")), 0.0);
}

#[test]
fn test_major_sim() {
    let lookup = MajorGroupLookup::CaseInsensitive;
    assert_eq!(major_sim(&attr("Physics"), &Attr::absent(), lookup), 1.0);
    assert_eq!(major_sim(&Attr::absent(), &attr("Statistics"), lookup), 0.0);
    assert_eq!(major_sim(&attr("computer science"), &attr("Computer Science"), lookup), 1.0);
    assert_eq!(major_sim(&attr("Data Science"), &attr("Computer Science"), lookup), 0.5);
    assert_eq!(major_sim(&attr("Economics"), &attr("statistics"), lookup), 0.5);
    assert_eq!(major_sim(&attr("History"), &attr("Computer Science"), lookup), 0.0);
}

#[test]
fn test_major_sim_legacy_lookup() {
    let lookup = MajorGroupLookup::LegacyExact;
    assert_eq!(major_sim(&attr("Data Science"), &attr("Computer Science"), lookup), 0.0);
    assert_eq!(major_sim(&attr("Computer Science"), &attr("Computer Science"), lookup), 1.0);
}

#[test]
fn test_combined_similarity_range() {
    let profile = EducationProfile {
        level: AxisPair::new(attr("Master's"), attr("Bachelor's")),
        major: AxisPair::new(attr("Data Science"), attr("Computer Science")),
    };
    assert_eq!(
        combined_similarity(&profile, MajorGroupLookup::CaseInsensitive),
        1.5
    );
    assert_eq!(
        combined_similarity(&EducationProfile::default(), MajorGroupLookup::CaseInsensitive),
        2.0
    );
}
