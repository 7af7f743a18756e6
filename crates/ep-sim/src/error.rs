//! Error types for simulator construction.

use ep_components::ComponentError;
use ep_core::EpError;
use thiserror::Error;

/// Errors raised while building a simulator.
///
/// Per-frame work never fails; everything here is caught up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid component configuration: {0}")]
    Component(#[from] ComponentError),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<EpError> for SimError {
    fn from(e: EpError) -> Self {
        SimError::Component(ComponentError::Core(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_errors_keep_their_message() {
        let err: SimError = ComponentError::EmptyCount { min: 0, max: 4 }.into();
        let msg = err.to_string();
        assert!(msg.contains("Invalid component configuration"));
        assert!(msg.contains("[0, 4]"));
    }
}
