//! # Validate Run
//!
//! The two-stage workflow: compile `<root>/data.schema.json`, then
//! validate `<root>/data.json` against it. Stages advance strictly in
//! order and the first failure ends the run.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use datacheck_schema::{
    open_data, parse_data, CompileOptions, CompiledSchema, Draft, ValidatorError,
    DATA_FILE_NAME, SCHEMA_FILE_NAME,
};

/// Exit status of a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status of a run that stopped on any error.
pub const EXIT_FAILURE: u8 = 1;

/// JSON Schema drafts selectable with `--draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DraftArg {
    #[value(name = "4")]
    Draft4,
    #[value(name = "6")]
    Draft6,
    #[value(name = "7")]
    Draft7,
    #[value(name = "2019-09")]
    Draft201909,
    #[value(name = "2020-12")]
    Draft202012,
}

impl From<DraftArg> for Draft {
    fn from(arg: DraftArg) -> Self {
        match arg {
            DraftArg::Draft4 => Draft::Draft4,
            DraftArg::Draft6 => Draft::Draft6,
            DraftArg::Draft7 => Draft::Draft7,
            DraftArg::Draft201909 => Draft::Draft201909,
            DraftArg::Draft202012 => Draft::Draft202012,
        }
    }
}

/// Arguments for a validate run.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Path to the data root directory holding data.schema.json and data.json.
    #[arg(long, default_value = "")]
    pub root: String,

    /// Force a JSON Schema draft instead of detecting it from `$schema`.
    #[arg(long, value_enum)]
    pub draft: Option<DraftArg>,

    /// Treat `format` keywords as assertions.
    #[arg(long)]
    pub assert_formats: bool,
}

impl RunArgs {
    /// Compiler settings selected by these arguments.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            draft: self.draft.map(Draft::from),
            assert_formats: self.assert_formats,
        }
    }
}

/// Progress of a run. A failure at any stage ends the run with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Root logged; nothing read yet.
    Start,
    /// Schema file read and compiled.
    SchemaCompiled,
    /// Data file opened for reading.
    DataOpened,
    /// Data file parsed as JSON.
    DataParsed,
    /// Data conforms to the schema.
    Validated,
    /// Run finished successfully.
    Done,
}

fn enter(stage: Stage) {
    tracing::debug!(?stage, "stage reached");
}

/// Path of `name` under `root`, joined the way `root + "/" + name` reads.
///
/// An empty root therefore names a file at the filesystem root rather
/// than in the working directory.
pub fn root_file(root: &str, name: &str) -> PathBuf {
    if root.is_empty() {
        PathBuf::from(format!("/{name}"))
    } else {
        PathBuf::from(root).join(name)
    }
}

/// Compile the schema under `root` and validate the data document with it.
///
/// # Errors
///
/// Returns the first failure: [`ValidatorError::SchemaCompile`] (the data
/// file is then never opened), [`ValidatorError::DataFileOpen`],
/// [`ValidatorError::DataParse`], or [`ValidatorError::ValidationFailed`].
pub fn run(root: &str, options: &CompileOptions) -> Result<(), ValidatorError> {
    tracing::info!("root: {root}");
    enter(Stage::Start);

    let schema_path = root_file(root, SCHEMA_FILE_NAME);
    let schema = CompiledSchema::compile(&schema_path, options)?;
    enter(Stage::SchemaCompiled);

    let data_path = root_file(root, DATA_FILE_NAME);
    let file = open_data(&data_path)?;
    enter(Stage::DataOpened);

    let data = parse_data(file, &data_path)?;
    enter(Stage::DataParsed);

    schema.validate(&data, &data_path)?;
    enter(Stage::Validated);

    enter(Stage::Done);
    Ok(())
}

/// Run with `args`, log a failure once, and return the exit status.
pub fn execute(args: &RunArgs) -> u8 {
    match run(&args.root, &args.compile_options()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            EXIT_FAILURE
        }
    }
}
