//! Stack-output store types.

use crate::error::StackOutputsError;
use serde::Deserialize;

/// A deployed stack and its published outputs.
#[derive(Debug, Clone, Deserialize)]
pub struct Stack {
    #[serde(rename = "StackName")]
    pub stack_name: String,
    #[serde(rename = "Outputs", default)]
    pub outputs: Vec<StackOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StackOutput {
    #[serde(rename = "OutputKey")]
    pub output_key: String,
    #[serde(rename = "OutputValue")]
    pub output_value: String,
}

impl Stack {
    /// Look up a published output by key.
    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|o| o.output_key == key)
            .map(|o| o.output_value.as_str())
    }

    /// Look up an output that must be present.
    pub fn require_output(&self, key: &str) -> Result<&str, StackOutputsError> {
        self.output(key)
            .ok_or_else(|| StackOutputsError::MissingOutput(key.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DescribeStacksResponse {
    #[serde(rename = "Stacks", default)]
    pub stacks: Vec<Stack>,
}
