use serde::{Deserialize, Serialize};

/// Uniform payload for the container creation endpoint. An empty `error`
/// means success; `error` and `message` are never both non-empty.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub(crate) struct OperationResult {
    pub(crate) error: String,
    pub(crate) message: String,
}

impl OperationResult {
    pub(crate) fn success(message: String) -> Self {
        OperationResult {
            error: String::new(),
            message,
        }
    }

    pub(crate) fn failure(error: String) -> Self {
        OperationResult {
            error,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization() {
        let result = OperationResult::success("Container 4a0b5c6d7e8f started".to_string());

        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"error":"","message":"Container 4a0b5c6d7e8f started"}"#
        );
    }

    #[test]
    fn test_failure_serialization() {
        let result = OperationResult::failure("Image build failed: no such base".to_string());

        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"error":"Image build failed: no such base","message":""}"#
        );
    }
}
