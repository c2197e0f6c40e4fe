//! Selector model: placeholders describing how a command-line value is obtained
//!
//! A binding on a tool either carries a concrete literal or a `Selector` that
//! a translation target resolves at emission time: a reference to another
//! input, a deterministically generated filename, a runtime resource amount,
//! or a wildcard capture pattern (outputs only). The model is a closed enum
//! plus one open extension point, the [`Lowerable`] trait.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// LITERALS
// ============================================================================

/// A constant scalar value attached to a binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Literal {
    /// Canonical text of the literal, without any target-format quoting.
    pub fn canonical_text(&self) -> String {
        match self {
            Literal::Str(s) => s.clone(),
            Literal::Int(i) => i.to_string(),
            Literal::Float(x) => x.to_string(),
            Literal::Bool(b) => b.to_string(),
        }
    }

    /// Native JSON value, for targets that embed literals structurally
    /// (e.g. a CWL `default:` key) rather than as command-line text.
    pub fn as_json(&self) -> serde_json::Value {
        match self {
            Literal::Str(s) => serde_json::Value::String(s.clone()),
            Literal::Int(i) => serde_json::Value::from(*i),
            Literal::Float(x) => serde_json::Value::from(*x),
            Literal::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_text())
    }
}

// ============================================================================
// SELECTORS
// ============================================================================

/// Reference to another declared input of the same tool, with optional
/// literal text concatenated around the reference expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSelector {
    name: String,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl InputSelector {
    /// The referenced input name must be non-empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyReferenceName);
        }
        Ok(Self {
            name,
            prefix: None,
            suffix: None,
        })
    }

    /// Literal text emitted before the reference expression, unescaped.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Literal text emitted after the reference expression, unescaped.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

/// A filename the system manufactures deterministically from an identifier.
///
/// `generated_filename` is pure: the same guid (and extension) always yields
/// the same string, across calls and across process runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameGenerator {
    guid: String,
    extension: Option<String>,
}

impl FilenameGenerator {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            extension: None,
        }
    }

    /// Extension appended verbatim to the generated name (include the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// The manufactured filename. Referentially transparent in `guid`.
    pub fn generated_filename(&self) -> String {
        match &self.extension {
            Some(ext) => format!("generated-{}{}", self.guid, ext),
            None => format!("generated-{}", self.guid),
        }
    }
}

/// Glob pattern for discovering output files after execution.
/// Only meaningful in output-capture position, never as an input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardSelector {
    glob: String,
}

impl WildcardSelector {
    pub fn new(glob: impl Into<String>) -> Self {
        Self { glob: glob.into() }
    }

    pub fn glob(&self) -> &str {
        &self.glob
    }
}

/// Closed set of built-in value selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// Reference to another declared input of the same tool
    Input(InputSelector),
    /// Deterministically generated filename
    Filename(FilenameGenerator),
    /// Runtime-provided CPU count
    Cpu,
    /// Runtime-provided memory amount (fractional at runtime)
    Memory,
    /// Output-discovery glob pattern
    Wildcard(WildcardSelector),
}

impl Selector {
    /// Short human-readable kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Selector::Input(_) => "input selector",
            Selector::Filename(_) => "generated filename",
            Selector::Cpu => "cpu selector",
            Selector::Memory => "memory selector",
            Selector::Wildcard(_) => "wildcard selector",
        }
    }
}

// ============================================================================
// EXTENSION POINT
// ============================================================================

/// Open extension point: a value that lowers itself to target-format text.
///
/// Implementors own their quoting entirely; the engine splices the returned
/// text verbatim into the emitted document.
pub trait Lowerable: fmt::Debug + Send + Sync {
    /// Target-format text for this value (CWL expression syntax).
    fn cwl(&self) -> String;
}

/// A value that crossed a plugin or configuration boundary without a typed
/// model, e.g. deserialized third-party tool metadata. Only the advertised
/// capabilities are known, not whether they are actually bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignValue {
    type_name: String,
    declares_cwl: bool,
}

impl ForeignValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            declares_cwl: false,
        }
    }

    /// Mark the value as advertising a `cwl` lowering hook it never bound.
    pub fn declaring_cwl(mut self) -> Self {
        self.declares_cwl = true;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn declares_cwl(&self) -> bool {
        self.declares_cwl
    }
}

// ============================================================================
// INPUT VALUES
// ============================================================================

/// Anything that can appear as the value of a command-line binding.
#[derive(Debug, Clone)]
pub enum InputValue {
    /// Absent value; lowers to the target's null representation, never an error
    Null,
    /// Constant scalar
    Literal(Literal),
    /// Built-in selector
    Selector(Selector),
    /// Custom value lowering itself via the [`Lowerable`] contract
    Custom(Arc<dyn Lowerable>),
    /// Untyped value from a plugin boundary
    Foreign(ForeignValue),
}

impl InputValue {
    /// Short human-readable kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            InputValue::Null => "null",
            InputValue::Literal(_) => "literal",
            InputValue::Selector(s) => s.kind(),
            InputValue::Custom(_) => "custom lowerable",
            InputValue::Foreign(_) => "foreign value",
        }
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Literal(Literal::Str(s.to_string()))
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Literal(Literal::Str(s))
    }
}

impl From<i64> for InputValue {
    fn from(i: i64) -> Self {
        InputValue::Literal(Literal::Int(i))
    }
}

impl From<f64> for InputValue {
    fn from(x: f64) -> Self {
        InputValue::Literal(Literal::Float(x))
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Literal(Literal::Bool(b))
    }
}

impl From<Literal> for InputValue {
    fn from(lit: Literal) -> Self {
        InputValue::Literal(lit)
    }
}

impl From<Selector> for InputValue {
    fn from(sel: Selector) -> Self {
        InputValue::Selector(sel)
    }
}

impl From<InputSelector> for InputValue {
    fn from(sel: InputSelector) -> Self {
        InputValue::Selector(Selector::Input(sel))
    }
}

impl From<FilenameGenerator> for InputValue {
    fn from(gen: FilenameGenerator) -> Self {
        InputValue::Selector(Selector::Filename(gen))
    }
}

impl From<Arc<dyn Lowerable>> for InputValue {
    fn from(obj: Arc<dyn Lowerable>) -> Self {
        InputValue::Custom(obj)
    }
}
