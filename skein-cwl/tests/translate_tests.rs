//! End-to-end translation tests: CommandTool → CWL YAML text
//!
//! These assert the exact emitted bytes, because downstream caching and
//! regression tooling rely on reproducible documents.

use skein_core::{
    CommandTool, DataType, InputSelector, ModelError, Selector, ToolInput, ToolOutput,
    WildcardSelector,
};
use skein_cwl::{translate_tool, LowerError, TranslateError};

fn test_tool() -> CommandTool {
    CommandTool::new("TestTranslation-tool", vec!["echo".to_string()])
        .with_friendly_name("Tool for testing translation")
        .with_docker("ubuntu:latest")
        .with_input(ToolInput::new("testtool", DataType::Str))
        .with_output(ToolOutput::new("std", DataType::Stdout))
}

const TEST_TOOL_CWL: &str = "\
baseCommand: echo
class: CommandLineTool
cwlVersion: v1.0
id: testtranslation-tool
inputs:
- id: testtool
  label: testtool
  type: string
label: testtranslation-tool
outputs:
- id: std
  label: std
  type: stdout
requirements:
  DockerRequirement:
    dockerPull: ubuntu:latest
  InlineJavascriptRequirement: {}
";

#[test]
fn test_str_tool() {
    assert_eq!(translate_tool(&test_tool()).unwrap(), TEST_TOOL_CWL);
}

#[test]
fn test_translation_is_byte_identical_across_runs() {
    let first = translate_tool(&test_tool()).unwrap();
    let second = translate_tool(&test_tool()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tool_with_bindings_and_capture() {
    let tool = CommandTool::new(
        "Samtools-index",
        vec!["samtools".to_string(), "index".to_string()],
    )
    .with_docker("biocontainers/samtools:1.9")
    .with_input(ToolInput::new("bam", DataType::File).with_position(1))
    .with_input(
        ToolInput::new("threads", DataType::Int)
            .with_prefix("--threads")
            .with_default(Selector::Cpu),
    )
    .with_output(
        ToolOutput::new("index", DataType::File).with_glob(Selector::Input(
            InputSelector::new("bam").unwrap().with_suffix(".bai"),
        )),
    );

    let expected = "\
baseCommand:
- samtools
- index
class: CommandLineTool
cwlVersion: v1.0
id: samtools-index
inputs:
- id: bam
  inputBinding:
    position: 1
  label: bam
  type: File
- id: threads
  inputBinding:
    prefix: --threads
    valueFrom: $(inputs.runtime_cpu)
  label: threads
  type: int
label: samtools-index
outputs:
- id: index
  label: index
  outputBinding:
    glob: $(inputs.bam).bai
  type: File
requirements:
  DockerRequirement:
    dockerPull: biocontainers/samtools:1.9
  InlineJavascriptRequirement: {}
";
    assert_eq!(translate_tool(&tool).unwrap(), expected);
}

#[test]
fn test_literal_default_embeds_structurally() {
    let tool = CommandTool::new("Echo-default", vec!["echo".to_string()])
        .with_input(ToolInput::new("greeting", DataType::Str).with_default("hello"))
        .with_output(ToolOutput::new("out", DataType::Stdout));

    let yaml = translate_tool(&tool).unwrap();
    assert!(yaml.contains("- default: hello\n  id: greeting\n"));
    // Literal defaults never produce a valueFrom expression
    assert!(!yaml.contains("valueFrom"));
}

#[test]
fn test_tool_without_docker_omits_requirement() {
    let tool = CommandTool::new("Plain", vec!["true".to_string()])
        .with_output(ToolOutput::new("out", DataType::Stdout));
    let yaml = translate_tool(&tool).unwrap();
    assert!(!yaml.contains("DockerRequirement"));
    assert!(yaml.contains("InlineJavascriptRequirement: {}"));
}

#[test]
fn test_wildcard_default_aborts_translation() {
    let tool = test_tool().with_input(
        ToolInput::new("bad", DataType::Str)
            .with_default(Selector::Wildcard(WildcardSelector::new("*"))),
    );
    let err = translate_tool(&tool).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Lower(LowerError::UnsupportedSelector { .. })
    ));
}

#[test]
fn test_unresolved_reference_aborts_translation() {
    let tool = test_tool().with_input(
        ToolInput::new("derived", DataType::Str)
            .with_default(InputSelector::new("missing").unwrap()),
    );
    let err = translate_tool(&tool).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Model(ModelError::UnresolvedInputReference { .. })
    ));
}
