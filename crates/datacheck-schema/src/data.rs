//! # Data Loading
//!
//! Opening and parsing the instance document are separate steps so an
//! unreadable file and malformed JSON surface as different errors.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::ValidatorError;

/// Open the data file for reading.
///
/// # Errors
///
/// Returns [`ValidatorError::DataFileOpen`] if the file is missing or
/// cannot be opened.
pub fn open_data(path: &Path) -> Result<File, ValidatorError> {
    File::open(path).map_err(|source| ValidatorError::DataFileOpen {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a JSON document from `reader`. `path` is used for error reporting.
///
/// # Errors
///
/// Returns [`ValidatorError::DataParse`] if the stream is not a single
/// valid JSON value, including read failures mid-stream.
pub fn parse_data<R: Read>(reader: R, path: &Path) -> Result<Value, ValidatorError> {
    serde_json::from_reader(BufReader::new(reader)).map_err(|e| ValidatorError::DataParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Open and parse the data file at `path`.
pub fn load_data(path: &Path) -> Result<Value, ValidatorError> {
    let file = open_data(path)?;
    parse_data(file, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn load_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, br#"{"id": "abc", "tags": [1, 2]}"#).unwrap();

        let value = load_data(&path).unwrap();
        assert_eq!(value, json!({"id": "abc", "tags": [1, 2]}));
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_data(&dir.path().join("data.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataFileOpen);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_data(&b"{\"id\": }"[..], Path::new("data.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataParse);
        assert!(err.to_string().contains("data.json"));
    }

    #[test]
    fn trailing_content_is_parse_error() {
        let err = parse_data(&b"{} {}"[..], Path::new("data.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataParse);
    }

    #[test]
    fn empty_stream_is_parse_error() {
        let err = parse_data(&b""[..], Path::new("data.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataParse);
    }

    #[test]
    fn scalar_document_is_accepted() {
        let value = parse_data(&b"42"[..], Path::new("data.json")).unwrap();
        assert_eq!(value, json!(42));
    }
}
