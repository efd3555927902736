/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod join_request;
mod join_response;
mod output_format;

pub use join_request::JoinRequest;
pub use join_response::JoinResponse;
pub use output_format::OutputFormat;
