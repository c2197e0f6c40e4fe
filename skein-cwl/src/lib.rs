//! skein CWL - Common Workflow Language Translation Target
//!
//! Turns a [`skein_core::CommandTool`] into a CWL v1.0 `CommandLineTool`
//! document. The heart of the crate is the expression-lowering engine, which
//! decides the exact text each input value contributes to the document.
//!
//! Architecture:
//! ```text
//! CommandTool (skein-core)
//!     ↓
//! validate() (semantic checks)
//!     ↓
//! Lowering engine (selector → CWL expression text)
//!     ↓
//! CwlDocument (serde model, fixed key order)
//!     ↓
//! YAML text (byte-reproducible)
//! ```

pub mod document;
pub mod lower;
pub mod translate;

// Re-export key types for convenience
pub use document::*;
pub use lower::*;
pub use translate::*;
