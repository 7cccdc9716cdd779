//! Session parameter types

use thiserror::Error;

/// Validation failure for user-supplied session parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Source or target is empty after trimming
    #[error("Please enter both Source and Target Chat IDs!")]
    MissingChatIds,
}

/// Source and target chat identifiers for a forwarding session
///
/// Both fields are trimmed and guaranteed non-empty. The only way to obtain a
/// value is [`SessionParams::new`], so holding one means validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    source: String,
    target: String,
}

impl SessionParams {
    /// Trims and validates the raw form input
    pub fn new(source: &str, target: &str) -> Result<Self, ValidationError> {
        let source = source.trim();
        let target = target.trim();

        if source.is_empty() || target.is_empty() {
            return Err(ValidationError::MissingChatIds);
        }

        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_input() {
        let params = SessionParams::new("\t-100123 ", "  -100456\n").unwrap();
        assert_eq!(params.source(), "-100123");
        assert_eq!(params.target(), "-100456");
    }

    #[test]
    fn test_rejects_empty_or_whitespace() {
        let cases = [("", "x"), ("x", ""), ("   ", "x"), ("x", "\t\n"), ("", "")];
        for (source, target) in cases {
            assert_eq!(
                SessionParams::new(source, target),
                Err(ValidationError::MissingChatIds),
                "source={source:?} target={target:?}"
            );
        }
    }
}
