//! Error types for skein model construction and validation

use thiserror::Error;

/// Model construction and validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("input reference name must not be empty")]
    EmptyReferenceName,

    #[error("tool id must not be empty")]
    EmptyToolId,

    #[error("tool '{tool_id}' has an empty base command")]
    EmptyBaseCommand { tool_id: String },

    #[error("duplicate input tag '{tag}' on tool '{tool_id}'")]
    DuplicateInputTag { tool_id: String, tag: String },

    #[error("duplicate output tag '{tag}' on tool '{tool_id}'")]
    DuplicateOutputTag { tool_id: String, tag: String },

    #[error("input '{tag}' on tool '{tool_id}' references undeclared input '{reference}'")]
    UnresolvedInputReference {
        tool_id: String,
        tag: String,
        reference: String,
    },

    #[error("output '{tag}' on tool '{tool_id}' has type {data_type} but no capture rule")]
    MissingOutputCapture {
        tool_id: String,
        tag: String,
        data_type: String,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
