/// Ordinal education scale. `Unknown` sits below every recognised level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DegreeLevel {
    Unknown = 0,
    HighSchool = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    Phd = 5,
}

impl DegreeLevel {
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Maps a raw level token onto the scale. Never fails: anything that does
    /// not normalise to a known token is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match normalize_level_token(raw).as_str() {
            "high school" => DegreeLevel::HighSchool,
            "associate" => DegreeLevel::Associate,
            "bachelor" => DegreeLevel::Bachelor,
            "master" => DegreeLevel::Master,
            "phd" | "ph d" => DegreeLevel::Phd,
            _ => DegreeLevel::Unknown,
        }
    }
}

/// Lower-cases, drops apostrophes and periods, strips one plural `s`.
pub fn normalize_level_token(raw: &str) -> String {
    let mut token: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}' && *c != '.')
        .collect();
    if token.ends_with('s') {
        token.pop();
    }
    token.trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/degree.rs"]
mod tests;
