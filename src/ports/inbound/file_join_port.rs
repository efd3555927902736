use crate::application::dto::{JoinRequest, JoinResponse};
use crate::joining::domain::JoinFailure;

/// Outcome of a join: the composed text, or the stage-tagged failure
pub type JoinResult = std::result::Result<JoinResponse, JoinFailure>;

/// FileJoinPort - Inbound port for the join use case
///
/// This is the single operation the application exposes to its callers.
pub trait FileJoinPort {
    /// Reads both inputs, composes them and writes the output.
    ///
    /// # Errors
    /// Returns a [`JoinFailure`] naming the stage that failed. Steps after the
    /// failing one are not attempted, so a read failure never writes.
    fn join(&self, request: JoinRequest) -> JoinResult;
}
