//! skein core - Tool & Selector Data Model
//!
//! Pure data structures with no behavior beyond constructors, accessors and
//! validation. Translation targets (e.g. `skein-cwl`) depend on this crate.
//!
//! Architecture:
//! ```text
//! CommandTool (inputs, outputs, base command, container)
//!     ↓
//! InputValue per binding (literal | selector | custom | null)
//!     ↓
//! Target crate lowers each value to document text
//! ```

pub mod error;
pub mod selector;
pub mod tool;
pub mod types;

// Re-export key types for convenience
pub use error::*;
pub use selector::*;
pub use tool::*;
pub use types::*;
