use crate::joining::domain::{JoinFailure, Separators};

/// TextComposer builds the joined text: `first + separator + second + suffix`
pub struct TextComposer;

impl TextComposer {
    /// Composes the two contents with the given separators.
    ///
    /// The output buffer is reserved once up front. A length overflow or a
    /// refused allocation is reported as a compose-stage failure instead of
    /// aborting the process.
    pub fn compose(
        first: &str,
        second: &str,
        separators: &Separators,
    ) -> Result<String, JoinFailure> {
        let parts = [first, separators.separator(), second, separators.suffix()];

        let total_len = parts
            .iter()
            .try_fold(0usize, |acc, part| acc.checked_add(part.len()))
            .ok_or_else(|| JoinFailure::Compose {
                cause: "Combined length of the inputs overflows the address space".to_string(),
            })?;

        let mut composed = String::new();
        composed
            .try_reserve_exact(total_len)
            .map_err(|e| JoinFailure::Compose {
                cause: format!("Failed to allocate {} bytes: {}", total_len, e),
            })?;

        for part in parts {
            composed.push_str(part);
        }
        Ok(composed)
    }
}
