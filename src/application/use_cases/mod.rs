/// Use cases module containing application business logic orchestration
mod join_files;

pub use join_files::JoinFilesUseCase;
