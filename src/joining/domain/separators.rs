/// Separator inserted between the two contents when none is given
pub const DEFAULT_SEPARATOR: &str = " ";

/// Suffix appended after the second content when none is given
pub const DEFAULT_SUFFIX: &str = "!";

/// Literal strings placed between and after the joined contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    separator: String,
    suffix: String,
}

impl Separators {
    pub fn new(separator: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            suffix: suffix.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR, DEFAULT_SUFFIX)
    }
}
