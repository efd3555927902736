use serde::Serialize;
use std::fmt;

/// Pipeline step at which a join failure originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinStage {
    ReadFirst,
    ReadSecond,
    Compose,
    Write,
}

impl JoinStage {
    /// All stages in execution order
    pub const ALL: [JoinStage; 4] = [
        JoinStage::ReadFirst,
        JoinStage::ReadSecond,
        JoinStage::Compose,
        JoinStage::Write,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinStage::ReadFirst => "read-first",
            JoinStage::ReadSecond => "read-second",
            JoinStage::Compose => "compose",
            JoinStage::Write => "write",
        }
    }

    /// 1-based position of the stage in the pipeline
    pub fn step(&self) -> usize {
        match self {
            JoinStage::ReadFirst => 1,
            JoinStage::ReadSecond => 2,
            JoinStage::Compose => 3,
            JoinStage::Write => 4,
        }
    }
}

impl fmt::Display for JoinStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
