//! Command tool definition: inputs, outputs, base command, container image

use crate::error::ModelError;
use crate::selector::{InputValue, Selector};
use crate::types::DataType;
use std::collections::HashSet;

/// A declared input of a command tool.
#[derive(Debug, Clone)]
pub struct ToolInput {
    tag: String,
    data_type: DataType,
    position: Option<i32>,
    prefix: Option<String>,
    default: Option<InputValue>,
    doc: Option<String>,
}

impl ToolInput {
    pub fn new(tag: impl Into<String>, data_type: DataType) -> Self {
        Self {
            tag: tag.into(),
            data_type,
            position: None,
            prefix: None,
            default: None,
            doc: None,
        }
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    /// Command-line flag emitted before the value, e.g. `--threads`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<InputValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    pub fn position(&self) -> Option<i32> {
        self.position
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn default(&self) -> Option<&InputValue> {
        self.default.as_ref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// A declared output of a command tool.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    tag: String,
    data_type: DataType,
    glob: Option<Selector>,
}

impl ToolOutput {
    pub fn new(tag: impl Into<String>, data_type: DataType) -> Self {
        Self {
            tag: tag.into(),
            data_type,
            glob: None,
        }
    }

    /// Capture rule: how the engine locates the produced file(s).
    pub fn with_glob(mut self, glob: Selector) -> Self {
        self.glob = Some(glob);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    pub fn glob(&self) -> Option<&Selector> {
        self.glob.as_ref()
    }
}

/// A single command-line tool: the unit a translation target turns into one
/// workflow document.
#[derive(Debug, Clone)]
pub struct CommandTool {
    id: String,
    friendly_name: Option<String>,
    base_command: Vec<String>,
    docker: Option<String>,
    inputs: Vec<ToolInput>,
    outputs: Vec<ToolOutput>,
}

impl CommandTool {
    pub fn new(id: impl Into<String>, base_command: Vec<String>) -> Self {
        Self {
            id: id.into(),
            friendly_name: None,
            base_command,
            docker: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Human-readable display name for catalogues and UIs. The CWL target
    /// derives `label` from the tool id, so this never reaches the document.
    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    /// Container image the tool runs in, e.g. `ubuntu:latest`.
    pub fn with_docker(mut self, image: impl Into<String>) -> Self {
        self.docker = Some(image.into());
        self
    }

    pub fn with_input(mut self, input: ToolInput) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: ToolOutput) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    pub fn base_command(&self) -> &[String] {
        &self.base_command
    }

    pub fn docker(&self) -> Option<&str> {
        self.docker.as_deref()
    }

    pub fn inputs(&self) -> &[ToolInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[ToolOutput] {
        &self.outputs
    }

    /// Semantic checks that individual constructors cannot enforce:
    /// tag uniqueness, reference resolution, capture rules.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.is_empty() {
            return Err(ModelError::EmptyToolId);
        }
        if self.base_command.is_empty() {
            return Err(ModelError::EmptyBaseCommand {
                tool_id: self.id.clone(),
            });
        }

        let mut input_tags = HashSet::new();
        for input in &self.inputs {
            if !input_tags.insert(input.tag()) {
                return Err(ModelError::DuplicateInputTag {
                    tool_id: self.id.clone(),
                    tag: input.tag().to_string(),
                });
            }
        }

        let mut output_tags = HashSet::new();
        for output in &self.outputs {
            if !output_tags.insert(output.tag()) {
                return Err(ModelError::DuplicateOutputTag {
                    tool_id: self.id.clone(),
                    tag: output.tag().to_string(),
                });
            }
        }

        for input in &self.inputs {
            if let Some(InputValue::Selector(Selector::Input(sel))) = input.default() {
                if !input_tags.contains(sel.name()) {
                    return Err(ModelError::UnresolvedInputReference {
                        tool_id: self.id.clone(),
                        tag: input.tag().to_string(),
                        reference: sel.name().to_string(),
                    });
                }
            }
        }

        for output in &self.outputs {
            if let Some(Selector::Input(sel)) = output.glob() {
                if !input_tags.contains(sel.name()) {
                    return Err(ModelError::UnresolvedInputReference {
                        tool_id: self.id.clone(),
                        tag: output.tag().to_string(),
                        reference: sel.name().to_string(),
                    });
                }
            }
            if output.data_type().requires_capture() && output.glob().is_none() {
                return Err(ModelError::MissingOutputCapture {
                    tool_id: self.id.clone(),
                    tag: output.tag().to_string(),
                    data_type: output.data_type().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{InputSelector, WildcardSelector};

    fn echo_tool() -> CommandTool {
        CommandTool::new("echo-tool", vec!["echo".to_string()])
            .with_input(ToolInput::new("message", DataType::Str))
            .with_output(ToolOutput::new("out", DataType::Stdout))
    }

    #[test]
    fn test_valid_tool_passes() {
        echo_tool().validate().unwrap();
    }

    #[test]
    fn test_empty_base_command_rejected() {
        let tool = CommandTool::new("t", vec![]);
        assert!(matches!(
            tool.validate(),
            Err(ModelError::EmptyBaseCommand { .. })
        ));
    }

    #[test]
    fn test_duplicate_input_tag_rejected() {
        let tool = echo_tool().with_input(ToolInput::new("message", DataType::Int));
        assert!(matches!(
            tool.validate(),
            Err(ModelError::DuplicateInputTag { .. })
        ));
    }

    #[test]
    fn test_unresolved_reference_rejected() {
        let sel = InputSelector::new("missing").unwrap();
        let tool = echo_tool()
            .with_input(ToolInput::new("derived", DataType::Str).with_default(sel));
        let err = tool.validate().unwrap_err();
        assert!(matches!(err, ModelError::UnresolvedInputReference { .. }));
    }

    #[test]
    fn test_file_output_requires_capture() {
        let tool = echo_tool().with_output(ToolOutput::new("bam", DataType::File));
        assert!(matches!(
            tool.validate(),
            Err(ModelError::MissingOutputCapture { .. })
        ));
    }

    #[test]
    fn test_file_output_with_glob_passes() {
        let tool = echo_tool().with_output(
            ToolOutput::new("bam", DataType::File)
                .with_glob(Selector::Wildcard(WildcardSelector::new("*.bam"))),
        );
        tool.validate().unwrap();
    }
}
