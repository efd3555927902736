/// JoinResponse - successful outcome of the join use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinResponse {
    /// Key the composed text was written to
    pub output_key: String,
    /// The composed text
    pub content: String,
}

impl JoinResponse {
    pub fn new(output_key: String, content: String) -> Self {
        Self {
            output_key,
            content,
        }
    }
}
