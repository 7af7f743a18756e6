use thiserror::Error;

pub type EpResult<T> = Result<T, EpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive numeric value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
