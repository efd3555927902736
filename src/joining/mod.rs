/// Joining domain - pure business logic for composing two texts
///
/// This layer has no knowledge of where texts come from or go to.
pub mod domain;
pub mod services;
