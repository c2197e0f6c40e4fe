//! Data types a tool input or output can carry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a tool input or output value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Text value
    Str,
    /// Integer value
    Int,
    /// Floating-point value
    Float,
    /// Boolean flag
    Boolean,
    /// Path to an existing file
    File,
    /// Path to an existing directory
    Directory,
    /// Captured standard output of the tool process
    Stdout,
    /// Homogeneous list of another data type
    Array(Box<DataType>),
}

impl DataType {
    /// Whether this type can only appear on an output.
    pub fn is_output_only(&self) -> bool {
        matches!(self, DataType::Stdout)
    }

    /// Whether an output of this type needs an explicit capture rule.
    /// Stdout is captured implicitly by the execution engine.
    pub fn requires_capture(&self) -> bool {
        match self {
            DataType::Stdout => false,
            DataType::Array(inner) => inner.requires_capture(),
            _ => true,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Str => write!(f, "string"),
            DataType::Int => write!(f, "int"),
            DataType::Float => write!(f, "float"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::File => write!(f, "file"),
            DataType::Directory => write!(f, "directory"),
            DataType::Stdout => write!(f, "stdout"),
            DataType::Array(inner) => write!(f, "array<{}>", inner),
        }
    }
}
