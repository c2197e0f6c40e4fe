//! Tool → CWL document translation
//!
//! Validates the tool, lowers every attached value through the expression
//! engine, and serializes the resulting document. A lowering failure anywhere
//! aborts the whole translation: a document that cannot be fully lowered is
//! never emitted partially.

use crate::document::*;
use crate::lower::{lower, lower_output_glob, LowerContext, LowerError};
use skein_core::{CommandTool, DataType, InputValue, ModelError, ToolInput, ToolOutput};
use thiserror::Error;

// ============================================================================
// TRANSLATE ERRORS
// ============================================================================

/// Errors raised while translating a tool to CWL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("invalid tool definition: {0}")]
    Model(#[from] ModelError),

    #[error(transparent)]
    Lower(#[from] LowerError),

    #[error("YAML serialization failed: {reason}")]
    Serialize { reason: String },
}

pub type TranslateResult<T> = Result<T, TranslateError>;

// ============================================================================
// TRANSLATION
// ============================================================================

/// CWL type name for a declared data type.
pub fn cwl_type(data_type: &DataType) -> String {
    match data_type {
        DataType::Str => "string".to_string(),
        DataType::Int => "int".to_string(),
        DataType::Float => "float".to_string(),
        DataType::Boolean => "boolean".to_string(),
        DataType::File => "File".to_string(),
        DataType::Directory => "Directory".to_string(),
        DataType::Stdout => "stdout".to_string(),
        DataType::Array(inner) => format!("{}[]", cwl_type(inner)),
    }
}

/// Translate a command tool to its CWL document model.
pub fn translate_tool_document(tool: &CommandTool) -> TranslateResult<CwlDocument> {
    tool.validate()?;

    let id = tool.id().to_lowercase();
    let ctx = LowerContext::expression(Some(tool.id()));

    let inputs = tool
        .inputs()
        .iter()
        .map(|input| translate_input(input, &ctx))
        .collect::<TranslateResult<Vec<_>>>()?;

    let outputs = tool
        .outputs()
        .iter()
        .map(|output| translate_output(output, &ctx))
        .collect::<TranslateResult<Vec<_>>>()?;

    Ok(CwlDocument {
        base_command: BaseCommand::from(tool.base_command()),
        class: COMMAND_LINE_TOOL.to_string(),
        cwl_version: CWL_VERSION.to_string(),
        id: id.clone(),
        inputs,
        label: id,
        outputs,
        requirements: CwlRequirements {
            docker: tool.docker().map(|image| DockerRequirement {
                docker_pull: image.to_string(),
            }),
            inline_javascript: InlineJavascriptRequirement {},
        },
    })
}

/// Translate a command tool straight to CWL YAML text.
pub fn translate_tool(tool: &CommandTool) -> TranslateResult<String> {
    let document = translate_tool_document(tool)?;
    document.to_yaml().map_err(|e| TranslateError::Serialize {
        reason: e.to_string(),
    })
}

fn translate_input(input: &ToolInput, ctx: &LowerContext) -> TranslateResult<CwlInput> {
    // Literal defaults embed structurally; selector and custom defaults
    // become a valueFrom expression lowered in expression position.
    let mut default = None;
    let mut value_from = None;
    match input.default() {
        None | Some(InputValue::Null) => {}
        Some(InputValue::Literal(lit)) => {
            default = Some(serde_yaml::to_value(lit.as_json()).map_err(|e| {
                TranslateError::Serialize {
                    reason: e.to_string(),
                }
            })?);
        }
        Some(value) => {
            value_from = lower(value, ctx)?;
        }
    }

    let binding = CommandLineBinding {
        position: input.position(),
        prefix: input.prefix().map(str::to_string),
        value_from,
    };

    Ok(CwlInput {
        default,
        id: input.tag().to_string(),
        input_binding: (!binding.is_empty()).then_some(binding),
        label: input.tag().to_string(),
        cwl_type: cwl_type(input.data_type()),
    })
}

fn translate_output(output: &ToolOutput, ctx: &LowerContext) -> TranslateResult<CwlOutput> {
    let output_binding = output
        .glob()
        .map(|selector| lower_output_glob(selector, ctx))
        .transpose()?
        .map(|glob| CommandOutputBinding { glob });

    Ok(CwlOutput {
        id: output.tag().to_string(),
        label: output.tag().to_string(),
        output_binding,
        cwl_type: cwl_type(output.data_type()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwl_type_names() {
        assert_eq!(cwl_type(&DataType::Str), "string");
        assert_eq!(cwl_type(&DataType::Stdout), "stdout");
        assert_eq!(cwl_type(&DataType::File), "File");
        assert_eq!(
            cwl_type(&DataType::Array(Box::new(DataType::File))),
            "File[]"
        );
    }

    #[test]
    fn test_invalid_tool_rejected_before_lowering() {
        let tool = CommandTool::new("", vec!["echo".to_string()]);
        assert!(matches!(
            translate_tool(&tool),
            Err(TranslateError::Model(ModelError::EmptyToolId))
        ));
    }
}
