//! # datacheck-schema — Schema Compilation & Data Validation
//!
//! Compiles a JSON Schema document once and validates a JSON data
//! document against it. All keyword semantics, draft detection, and
//! `$ref` evaluation are delegated to the `jsonschema` crate; this crate
//! owns file loading, reference retrieval from disk, and the error
//! taxonomy.
//!
//! ## Workflow
//!
//! 1. [`CompiledSchema::compile`] — read, parse, and build the validator.
//! 2. [`open_data`] / [`parse_data`] — load the instance document.
//! 3. [`CompiledSchema::validate`] — evaluate and collect violations.
//!
//! Each step fails with a distinct [`ValidatorError`] variant so callers
//! can stop at the first failure and still tell stages apart via
//! [`ValidatorError::kind`].
//!
//! ## Crate Policy
//!
//! - No network access: remote `$ref` targets are refused.
//! - Validation failures carry the instance location, the schema
//!   location, and the library's message for every violation.

pub mod data;
pub mod error;
mod retrieve;
pub mod validate;

pub use data::{load_data, open_data, parse_data};
pub use error::{ErrorKind, ValidatorError};
pub use jsonschema::Draft;
pub use validate::{CompileOptions, CompiledSchema, ValidationViolations, Violation};

/// File name of the schema document expected under the data root.
pub const SCHEMA_FILE_NAME: &str = "data.schema.json";

/// File name of the data document expected under the data root.
pub const DATA_FILE_NAME: &str = "data.json";
