/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod file_join_port;

pub use file_join_port::{FileJoinPort, JoinResult};
