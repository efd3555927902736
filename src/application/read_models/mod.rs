/// Read models - presentation-ready views of use case results
mod join_report;

pub use join_report::{JoinReport, JoinStatus};
