use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EphemError {
    #[error("Invalid date format, expected YYYY-MM-DDTHH:MM:SS: {0}")]
    InvalidDateFormat(String),

    #[error("Unknown planet name: {0}")]
    UnknownPlanet(String),
}
