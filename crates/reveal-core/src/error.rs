use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevealError {
    /// Caller integration mistake, e.g. an empty color-stop list.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl RevealError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RevealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RevealError::configuration("empty color stops");
        assert_eq!(err.to_string(), "Configuration error: empty color stops");

        let err = RevealError::invalid_operation("add_curve before move_to");
        assert_eq!(err.to_string(), "Invalid operation: add_curve before move_to");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: RevealError = json_err.into();
        assert!(matches!(err, RevealError::Parse(_)));
    }
}
