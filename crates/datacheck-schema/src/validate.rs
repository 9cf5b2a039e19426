//! # Schema Compilation & Validation
//!
//! A [`CompiledSchema`] is built once from a schema file and used to
//! validate parsed JSON instances.
//!
//! ## Draft Selection
//!
//! Unless [`CompileOptions::draft`] forces one, the draft is detected
//! from the schema's `$schema` keyword and defaults to Draft 2020-12.
//!
//! ## Reference Resolution
//!
//! Internal `$ref`s (`#/$defs/...`) are resolved by the jsonschema crate.
//! A schema read from a file without its own `$id` is anchored at the
//! file's `file://` URL, so external references resolve relative to the
//! schema's location (`../common.json` included) and are read from disk.
//! Non-file URIs are refused and fail compilation.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Draft, ValidationOptions, Validator};
use serde_json::Value;

use crate::error::ValidatorError;
use crate::retrieve::{anchor_at, file_url, LocalSchemaRetriever};

/// Settings passed through to the schema compiler.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Draft to compile against. `None` detects it from `$schema`.
    pub draft: Option<Draft>,
    /// Treat the `format` keyword as an assertion instead of an annotation.
    pub assert_formats: bool,
}

impl CompileOptions {
    fn validation_options(&self) -> ValidationOptions {
        let mut opts = jsonschema::options();
        if let Some(draft) = self.draft {
            opts.with_draft(draft);
        }
        opts.should_validate_formats(self.assert_formats);
        opts.with_retriever(LocalSchemaRetriever);
        opts
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer path to the schema keyword that rejected it.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.instance_path.is_empty() {
            "(root)"
        } else {
            self.instance_path.as_str()
        };
        write!(f, "  {location}: {} (schema: {})", self.message, self.schema_path)
    }
}

/// Every violation found in one instance, in the order the validator
/// reported them. Never empty inside [`ValidatorError::ValidationFailed`].
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Number of failing locations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when the instance produced no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Borrow the violations in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Take ownership of the violations, e.g. to sort or filter them.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A schema compiled by the `jsonschema` crate, ready to validate instances.
pub struct CompiledSchema {
    /// Schema file the validator was built from.
    path: PathBuf,
    validator: Validator,
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl CompiledSchema {
    /// Read, parse, and compile the schema file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::SchemaCompile`] if the file cannot be read,
    /// is not valid JSON, or is rejected by the schema compiler (invalid
    /// keywords, unresolvable references).
    pub fn compile(
        path: impl AsRef<Path>,
        options: &CompileOptions,
    ) -> Result<Self, ValidatorError> {
        let path = path.as_ref().to_path_buf();

        let content = std::fs::read_to_string(&path).map_err(|e| {
            ValidatorError::SchemaCompile {
                path: path.display().to_string(),
                reason: format!("cannot read file: {e}"),
            }
        })?;

        let mut schema: Value = serde_json::from_str(&content).map_err(|e| {
            ValidatorError::SchemaCompile {
                path: path.display().to_string(),
                reason: format!("invalid JSON: {e}"),
            }
        })?;

        let base = file_url(&path).map_err(|reason| ValidatorError::SchemaCompile {
            path: path.display().to_string(),
            reason,
        })?;
        anchor_at(&mut schema, &base, options.draft);

        Self::from_value(path, &schema, options)
    }

    /// Compile an already-parsed schema. `path` is used for error reporting.
    ///
    /// The schema is compiled as given: without a `file://` `$id`, relative
    /// references cannot be resolved from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::SchemaCompile`] if the schema compiler
    /// rejects the document.
    pub fn from_value(
        path: impl Into<PathBuf>,
        schema: &Value,
        options: &CompileOptions,
    ) -> Result<Self, ValidatorError> {
        let path = path.into();
        let validator = options
            .validation_options()
            .build(schema)
            .map_err(|e| ValidatorError::SchemaCompile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { path, validator })
    }

    /// Returns the schema file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if `instance` conforms to the schema.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate `instance`, read from `data_path`, against the schema.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::ValidationFailed`] listing every violation
    /// if the instance does not conform.
    pub fn validate(&self, instance: &Value, data_path: &Path) -> Result<(), ValidatorError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidatorError::ValidationFailed {
                schema_path: self.path.display().to_string(),
                data_path: data_path.display().to_string(),
                violations: ValidationViolations { violations },
            })
        }
    }
}
