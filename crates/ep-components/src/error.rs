//! Error types for component operations.

use ep_core::error::EpError;
use thiserror::Error;

/// Errors raised while validating component parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Invalid range for {what}: [{min}, {max}]")]
    InvalidRange {
        what: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Component count range must start at 1 or more (got [{min}, {max}])")]
    EmptyCount { min: usize, max: usize },

    #[error("Invalid component parameter: {0}")]
    Core(#[from] EpError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for EpError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::InvalidRange { what, .. } => EpError::InvalidArg { what },
            ComponentError::EmptyCount { .. } => EpError::InvalidArg {
                what: "component count",
            },
            ComponentError::Core(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::InvalidRange {
            what: "magnitude",
            min: 10.0,
            max: 5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("magnitude"));
        assert!(msg.contains("[10, 5]"));
    }

    #[test]
    fn error_conversion() {
        let comp_err = ComponentError::EmptyCount { min: 0, max: 3 };
        let ep_err: EpError = comp_err.into();
        assert!(matches!(ep_err, EpError::InvalidArg { .. }));
    }
}
