pub mod degree;
pub mod education;
pub mod majors;
pub mod profile;
pub mod scores;
pub mod tau;
