use crate::joining::domain::{ResourceKey, Separators};
use crate::shared::error::JoinerError;

/// JoinRequest - request DTO for the join use case
///
/// Keys are validated on construction, so a request that exists is
/// always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    first_key: ResourceKey,
    second_key: ResourceKey,
    output_key: ResourceKey,
    separators: Separators,
}

impl JoinRequest {
    /// Creates a request with the default separators (`" "` and `"!"`)
    pub fn new(
        first_key: impl Into<String>,
        second_key: impl Into<String>,
        output_key: impl Into<String>,
    ) -> Result<Self, JoinerError> {
        Ok(Self {
            first_key: ResourceKey::new(first_key, "first key")?,
            second_key: ResourceKey::new(second_key, "second key")?,
            output_key: ResourceKey::new(output_key, "output key")?,
            separators: Separators::default(),
        })
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn first_key(&self) -> &str {
        self.first_key.as_str()
    }

    pub fn second_key(&self) -> &str {
        self.second_key.as_str()
    }

    pub fn output_key(&self) -> &str {
        self.output_key.as_str()
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }
}
