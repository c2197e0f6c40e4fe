//! Serde model of a CWL v1.0 `CommandLineTool` document
//!
//! Field declaration order is the emitted key order; every struct keeps its
//! fields alphabetical to match CWL's conventional sorted-key layout, so the
//! YAML text is byte-reproducible for a given document.

use serde::Serialize;

/// Emitted CWL version.
pub const CWL_VERSION: &str = "v1.0";

/// Emitted document class.
pub const COMMAND_LINE_TOOL: &str = "CommandLineTool";

/// A complete `CommandLineTool` document.
#[derive(Debug, Clone, Serialize)]
pub struct CwlDocument {
    #[serde(rename = "baseCommand")]
    pub base_command: BaseCommand,
    pub class: String,
    #[serde(rename = "cwlVersion")]
    pub cwl_version: String,
    pub id: String,
    pub inputs: Vec<CwlInput>,
    pub label: String,
    pub outputs: Vec<CwlOutput>,
    pub requirements: CwlRequirements,
}

impl CwlDocument {
    /// Serialize to CWL YAML text.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Base command: a scalar for a single token, a sequence otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BaseCommand {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&[String]> for BaseCommand {
    fn from(tokens: &[String]) -> Self {
        match tokens {
            [single] => BaseCommand::Single(single.clone()),
            many => BaseCommand::Multiple(many.to_vec()),
        }
    }
}

/// One entry of the `inputs` sequence.
#[derive(Debug, Clone, Serialize)]
pub struct CwlInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_yaml::Value>,
    pub id: String,
    #[serde(rename = "inputBinding", skip_serializing_if = "Option::is_none")]
    pub input_binding: Option<CommandLineBinding>,
    pub label: String,
    #[serde(rename = "type")]
    pub cwl_type: String,
}

/// `inputBinding` of an input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandLineBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(rename = "valueFrom", skip_serializing_if = "Option::is_none")]
    pub value_from: Option<String>,
}

impl CommandLineBinding {
    /// Bindings with no fields are omitted from the document entirely.
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.prefix.is_none() && self.value_from.is_none()
    }
}

/// One entry of the `outputs` sequence.
#[derive(Debug, Clone, Serialize)]
pub struct CwlOutput {
    pub id: String,
    pub label: String,
    #[serde(rename = "outputBinding", skip_serializing_if = "Option::is_none")]
    pub output_binding: Option<CommandOutputBinding>,
    #[serde(rename = "type")]
    pub cwl_type: String,
}

/// `outputBinding` of an output.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutputBinding {
    pub glob: String,
}

/// `requirements` mapping. The inline-javascript flag is always present
/// because reference and resource expressions rely on it.
#[derive(Debug, Clone, Serialize)]
pub struct CwlRequirements {
    #[serde(rename = "DockerRequirement", skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerRequirement>,
    #[serde(rename = "InlineJavascriptRequirement")]
    pub inline_javascript: InlineJavascriptRequirement,
}

/// Docker-pull requirement.
#[derive(Debug, Clone, Serialize)]
pub struct DockerRequirement {
    #[serde(rename = "dockerPull")]
    pub docker_pull: String,
}

/// Marker requirement; serializes as an empty mapping.
#[derive(Debug, Clone, Serialize)]
pub struct InlineJavascriptRequirement {}
