mod professional;

pub use professional::{NewProfessional, Professional};
