//! Expression-lowering engine: selector → CWL expression text
//!
//! Given an input value of unknown kind plus a lowering context, produce the
//! exact text to splice into the emitted document, or fail with a typed error
//! when the value kind cannot appear in that position. The engine is a pure
//! function of its arguments: identical inputs always yield identical text,
//! so emitted documents are byte-reproducible.

use skein_core::{InputSelector, InputValue, Literal, Selector};
use thiserror::Error;

// ============================================================================
// LOWER ERRORS
// ============================================================================

/// Errors raised by the lowering engine. Every failure is a contract
/// violation by the caller; none is recoverable or retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LowerError {
    /// Value kind cannot be lowered in this position at all
    #[error("unsupported selector for tool '{tool_id}': {reason}")]
    UnsupportedSelector { tool_id: String, reason: String },

    /// Value advertises the custom-lowering capability without binding it
    #[error("invalid lowerable for tool '{tool_id}': '{type_name}' declares a cwl hook that is not bound")]
    InvalidLowerable { tool_id: String, type_name: String },
}

pub type LowerResult<T> = Result<T, LowerError>;

// ============================================================================
// LOWERING CONTEXT
// ============================================================================

/// Names of the implicit runtime-resource input bindings. Passed explicitly
/// rather than read from an ambient source so a host can remap them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInputs {
    pub cpu: String,
    pub memory: String,
}

impl Default for RuntimeInputs {
    fn default() -> Self {
        Self {
            cpu: "runtime_cpu".to_string(),
            memory: "runtime_memory".to_string(),
        }
    }
}

/// Where a lowered value lands in the document.
///
/// `string_environment = true` means the destination already lives inside the
/// target format's quote delimiters, so string literals are emitted verbatim.
/// `false` means a bare expression slot, so string literals must be quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowerContext {
    tool_id: Option<String>,
    string_environment: bool,
    runtime: RuntimeInputs,
}

impl LowerContext {
    /// Context for a bare expression slot.
    pub fn expression(tool_id: Option<&str>) -> Self {
        Self {
            tool_id: tool_id.map(str::to_string),
            string_environment: false,
            runtime: RuntimeInputs::default(),
        }
    }

    /// Context for a destination already inside quote delimiters.
    pub fn string(tool_id: Option<&str>) -> Self {
        Self {
            tool_id: tool_id.map(str::to_string),
            string_environment: true,
            runtime: RuntimeInputs::default(),
        }
    }

    pub fn with_runtime(mut self, runtime: RuntimeInputs) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn string_environment(&self) -> bool {
        self.string_environment
    }

    pub fn runtime(&self) -> &RuntimeInputs {
        &self.runtime
    }

    /// Owning tool id for diagnostics; placeholder when the caller has none.
    pub fn tool_id(&self) -> &str {
        self.tool_id.as_deref().unwrap_or("<unnamed>")
    }
}

// ============================================================================
// LOWERING
// ============================================================================

/// Wrap text in CWL's double-quote syntax, escaping embedded quotes.
pub fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// CWL reference expression for a declared input, with the selector's
/// prefix/suffix concatenated verbatim around it.
pub fn input_reference(sel: &InputSelector) -> String {
    format!(
        "{}$(inputs.{}){}",
        sel.prefix().unwrap_or(""),
        sel.name(),
        sel.suffix().unwrap_or("")
    )
}

/// Lower one input value to document text.
///
/// Returns `Ok(None)` for an absent value (the caller omits the binding) and
/// `Ok(Some(text))` otherwise. Reference and resource expressions are
/// identical in both contexts because CWL interpolates them; only string
/// literals (and generated filenames, which lower as strings) are quoted in
/// expression position.
pub fn lower(value: &InputValue, ctx: &LowerContext) -> LowerResult<Option<String>> {
    match value {
        InputValue::Null => Ok(None),
        InputValue::Literal(lit) => Ok(Some(lower_literal(lit, ctx))),
        InputValue::Selector(sel) => lower_selector(sel, ctx).map(Some),
        InputValue::Custom(obj) => Ok(Some(obj.cwl())),
        InputValue::Foreign(foreign) => {
            if foreign.declares_cwl() {
                Err(LowerError::InvalidLowerable {
                    tool_id: ctx.tool_id().to_string(),
                    type_name: foreign.type_name().to_string(),
                })
            } else {
                Err(LowerError::UnsupportedSelector {
                    tool_id: ctx.tool_id().to_string(),
                    reason: format!("unrecognized value kind '{}'", foreign.type_name()),
                })
            }
        }
    }
}

/// Lower an output-capture rule to the text of a `glob` field. This is the
/// one position where wildcards are legal; resource and filename selectors
/// never are.
pub fn lower_output_glob(selector: &Selector, ctx: &LowerContext) -> LowerResult<String> {
    match selector {
        Selector::Wildcard(w) => Ok(w.glob().to_string()),
        Selector::Input(sel) => Ok(input_reference(sel)),
        other => Err(LowerError::UnsupportedSelector {
            tool_id: ctx.tool_id().to_string(),
            reason: format!("{} cannot capture output files", other.kind()),
        }),
    }
}

fn lower_literal(lit: &Literal, ctx: &LowerContext) -> String {
    match lit {
        // Non-string primitives render canonically and are never quoted
        Literal::Str(s) if !ctx.string_environment() => quote(s),
        other => other.canonical_text(),
    }
}

fn lower_selector(selector: &Selector, ctx: &LowerContext) -> LowerResult<String> {
    match selector {
        Selector::Input(sel) => Ok(input_reference(sel)),
        Selector::Filename(gen) => {
            let name = gen.generated_filename();
            if ctx.string_environment() {
                Ok(name)
            } else {
                Ok(quote(&name))
            }
        }
        Selector::Cpu => Ok(format!("$(inputs.{})", ctx.runtime().cpu)),
        // Runtime memory is fractional; CWL consumers need an integral value
        Selector::Memory => Ok(format!("$(Math.floor(inputs.{}))", ctx.runtime().memory)),
        Selector::Wildcard(_) => Err(LowerError::UnsupportedSelector {
            tool_id: ctx.tool_id().to_string(),
            reason: "wildcard selector cannot produce an input value".to_string(),
        }),
    }
}
