//! Local `$ref` retrieval.
//!
//! The validator never fetches schemas over the network. A schema compiled
//! from a file is anchored at its `file://` URL, so relative references
//! resolve to `file://` URLs as well and are read from disk here. Any
//! other scheme is refused.

use std::path::{Path, PathBuf};

use jsonschema::{Draft, Retrieve, Uri};
use serde_json::Value;
use url::Url;

/// Retriever resolving external `$ref` targets to local files.
pub(crate) struct LocalSchemaRetriever;

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let path = local_path(uri.as_str())?;

        let content = std::fs::read_to_string(&path).map_err(|e| {
            format!("cannot read referenced schema '{}': {e}", path.display())
        })?;

        let value = serde_json::from_str(&content).map_err(|e| {
            format!("referenced schema '{}' is not valid JSON: {e}", path.display())
        })?;

        Ok(value)
    }
}

/// Map a `file://` reference URI to the file it names, or refuse it.
fn local_path(uri: &str) -> Result<PathBuf, String> {
    let url = Url::parse(uri).map_err(|e| format!("invalid reference '{uri}': {e}"))?;
    if url.scheme() != "file" {
        return Err(format!("refusing to retrieve non-local schema '{uri}'"));
    }
    url.to_file_path()
        .map_err(|()| format!("reference '{uri}' does not name a local file"))
}

/// `file://` URL of the schema at `path`, used as its base URI.
pub(crate) fn file_url(path: &Path) -> Result<Url, String> {
    let absolute = std::fs::canonicalize(path).map_err(|e| format!("cannot resolve path: {e}"))?;
    Url::from_file_path(&absolute)
        .map_err(|()| format!("cannot express '{}' as a file URL", absolute.display()))
}

/// Give `schema` a base URI of `url` unless it already declares one.
///
/// Draft 4 spells the identifier keyword `id`; later drafts use `$id`.
pub(crate) fn anchor_at(schema: &mut Value, url: &Url, draft: Option<Draft>) {
    let Some(object) = schema.as_object_mut() else {
        return;
    };
    if object.contains_key("$id") || object.contains_key("id") {
        return;
    }
    let draft4 = match draft {
        Some(draft) => draft == Draft::Draft4,
        None => object
            .get("$schema")
            .and_then(Value::as_str)
            .is_some_and(|s| s.contains("draft-04")),
    };
    let key = if draft4 { "id" } else { "$id" };
    object.insert(key.to_string(), Value::String(url.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_uri_maps_to_absolute_path() {
        let path = local_path("file:///srv/schemas/item.json").unwrap();
        assert_eq!(path, PathBuf::from("/srv/schemas/item.json"));
    }

    #[test]
    fn file_uri_is_percent_decoded() {
        let path = local_path("file:///srv/my%20schemas/item.json").unwrap();
        assert_eq!(path, PathBuf::from("/srv/my schemas/item.json"));
    }

    #[test]
    fn remote_reference_is_refused() {
        let err = local_path("https://example.com/item.schema.json").unwrap_err();
        assert!(err.contains("non-local"));
    }

    #[test]
    fn default_base_reference_is_refused() {
        assert!(local_path("json-schema:///item.json").is_err());
    }

    #[test]
    fn anchor_inserts_dollar_id() {
        let url = Url::parse("file:///r/data.schema.json").unwrap();
        let mut schema = json!({"type": "object"});
        anchor_at(&mut schema, &url, None);
        assert_eq!(schema["$id"], "file:///r/data.schema.json");
    }

    #[test]
    fn anchor_keeps_declared_id() {
        let url = Url::parse("file:///r/data.schema.json").unwrap();
        let mut schema = json!({"$id": "https://example.com/s.json"});
        anchor_at(&mut schema, &url, None);
        assert_eq!(schema["$id"], "https://example.com/s.json");
    }

    #[test]
    fn anchor_uses_id_for_draft4() {
        let url = Url::parse("file:///r/data.schema.json").unwrap();

        let mut forced = json!({"type": "object"});
        anchor_at(&mut forced, &url, Some(Draft::Draft4));
        assert_eq!(forced["id"], "file:///r/data.schema.json");
        assert!(forced.get("$id").is_none());

        let mut declared = json!({"$schema": "http://json-schema.org/draft-04/schema#"});
        anchor_at(&mut declared, &url, None);
        assert_eq!(declared["id"], "file:///r/data.schema.json");
    }

    #[test]
    fn anchor_ignores_boolean_schema() {
        let url = Url::parse("file:///r/data.schema.json").unwrap();
        let mut schema = json!(true);
        anchor_at(&mut schema, &url, None);
        assert_eq!(schema, json!(true));
    }
}
