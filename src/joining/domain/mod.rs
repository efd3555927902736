pub mod join_failure;
pub mod join_stage;
pub mod resource_key;
pub mod separators;

pub use join_failure::JoinFailure;
pub use join_stage::JoinStage;
pub use resource_key::ResourceKey;
pub use separators::{Separators, DEFAULT_SEPARATOR, DEFAULT_SUFFIX};
