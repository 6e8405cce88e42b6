//! JSON file source: applies a parsed document onto the target's shape.

use crate::coerce;
use crate::error::LoadError;
use crate::provenance::Provenance;
use crate::schema::walker::FieldBinding;
use crate::sources::Source;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Loads values from a JSON file.
///
/// Document keys are the record's own declared field names, with nested
/// objects for nested groups; external-name derivation does not apply
/// here. Unknown keys are ignored and missing keys leave fields untouched.
/// An unreadable file or a document that does not fit the target shape
/// aborts the load.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading the JSON document at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Source for FileSource {
    fn label(&self) -> &'static str {
        "file"
    }

    fn apply(
        &mut self,
        fields: &mut [FieldBinding<'_>],
        trace: &mut Provenance,
    ) -> Result<(), LoadError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| LoadError::SourceUnavailable {
                path: self.path.clone(),
                source: e,
            })?;
        let doc: Value = serde_json::from_str(&text).map_err(|e| {
            LoadError::MalformedDocument(format!("{}: {}", self.path.display(), e))
        })?;
        if !doc.is_object() {
            return Err(LoadError::MalformedDocument(format!(
                "{}: top level must be an object",
                self.path.display()
            )));
        }

        for binding in fields.iter_mut() {
            match lookup(&doc, &binding.path)? {
                Some(value) => {
                    coerce::assign_json(&mut binding.slot, &binding.path.join("."), value)?;
                    trace.record(&binding.name, "file");
                    tracing::trace!(field = %binding.name, "field set from file");
                }
                None => continue,
            }
        }
        Ok(())
    }
}

/// Walk the document along a declared-name path. Missing keys resolve to
/// `None`; an intermediate value that is not an object does not fit the
/// target shape.
fn lookup<'v>(doc: &'v Value, path: &[&'static str]) -> Result<Option<&'v Value>, LoadError> {
    let mut current = doc;
    for (depth, segment) in path.iter().enumerate() {
        let map = match current {
            Value::Object(map) => map,
            _ => {
                return Err(LoadError::MalformedDocument(format!(
                    "key '{}' must hold an object",
                    path[..depth].join("."),
                )))
            }
        };
        current = match field(map, segment) {
            Some(value) => value,
            None => return Ok(None),
        };
    }
    Ok(Some(current))
}

/// Exact key match, falling back to the first ASCII-case-insensitive
/// match, mirroring lenient decoder key matching.
fn field<'v>(map: &'v Map<String, Value>, name: &str) -> Option<&'v Value> {
    map.get(name).or_else(|| {
        map.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}
