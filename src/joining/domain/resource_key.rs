use crate::shared::error::JoinerError;

/// Maximum length for resource keys (security limit)
const MAX_KEY_LENGTH: usize = 4096;

/// NewType wrapper for a resource identifier with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Validates a key; `role` names it in error messages (e.g. "first key")
    pub fn new(key: impl Into<String>, role: &str) -> Result<Self, JoinerError> {
        let key = key.into();

        if key.trim().is_empty() {
            return Err(JoinerError::Validation {
                message: format!("{} must not be empty", role),
            });
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(JoinerError::Validation {
                message: format!(
                    "{} is too long ({} bytes). Maximum allowed: {} bytes",
                    role,
                    key.len(),
                    MAX_KEY_LENGTH
                ),
            });
        }

        if key.contains('\0') {
            return Err(JoinerError::Validation {
                message: format!("{} contains a NUL byte", role),
            });
        }

        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
