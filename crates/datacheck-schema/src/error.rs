//! # Error Types
//!
//! One variant per failing stage of a run. Every variant is fatal to the
//! run that produced it.

use thiserror::Error;

use crate::validate::ValidationViolations;

/// Coarse classification of a [`ValidatorError`], comparable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The schema could not be read, parsed, or compiled.
    SchemaCompile,
    /// The data file could not be opened.
    DataFileOpen,
    /// The data file is not valid JSON.
    DataParse,
    /// The data does not conform to the schema.
    Validation,
}

/// Error raised while compiling a schema or validating data against it.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The schema file is missing, is not JSON, or is not a valid schema.
    #[error("schema compile error for '{path}': {reason}")]
    SchemaCompile {
        /// Path of the schema file.
        path: String,
        /// Reason the schema could not be compiled.
        reason: String,
    },

    /// The data file is missing or inaccessible.
    #[error("cannot open data file '{path}': {source}")]
    DataFileOpen {
        /// Path of the data file.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The data file exists but does not contain valid JSON.
    #[error("data parse error for '{path}': {reason}")]
    DataParse {
        /// Path of the data file.
        path: String,
        /// Parser message, including line and column.
        reason: String,
    },

    /// The data is well-formed JSON but violates the schema.
    #[error("'{data_path}' does not conform to schema '{schema_path}':\n{violations}")]
    ValidationFailed {
        /// Path of the schema file.
        schema_path: String,
        /// Path of the data file.
        data_path: String,
        /// Every violation reported by the validator.
        violations: ValidationViolations,
    },
}

impl ValidatorError {
    /// Returns the stage classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SchemaCompile { .. } => ErrorKind::SchemaCompile,
            Self::DataFileOpen { .. } => ErrorKind::DataFileOpen,
            Self::DataParse { .. } => ErrorKind::DataParse,
            Self::ValidationFailed { .. } => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = ValidatorError::SchemaCompile {
            path: "data.schema.json".to_string(),
            reason: "invalid JSON".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::SchemaCompile);

        let err = ValidatorError::DataFileOpen {
            path: "data.json".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.kind(), ErrorKind::DataFileOpen);

        let err = ValidatorError::DataParse {
            path: "data.json".to_string(),
            reason: "EOF while parsing".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::DataParse);
    }

    #[test]
    fn display_includes_path_and_reason() {
        let err = ValidatorError::SchemaCompile {
            path: "/tmp/root/data.schema.json".to_string(),
            reason: "invalid JSON: expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/root/data.schema.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn open_error_exposes_io_source() {
        let err = ValidatorError::DataFileOpen {
            path: "data.json".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
