//! Per-field source attribution for a completed load.

use serde::Serialize;
use std::collections::BTreeMap;

/// Records which source last supplied each field, keyed by resolved
/// external name. Later sources overwrite earlier attributions, mirroring
/// the merge itself. Serializable for diagnostics output.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Provenance {
    entries: BTreeMap<String, String>,
}

impl Provenance {
    /// Attribute a field to a source, replacing any earlier attribution.
    pub fn record(&mut self, field: &str, source: &str) {
        self.entries.insert(field.to_string(), source.to_string());
    }

    /// The source that last supplied `field`, if any source did.
    pub fn origin(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Number of fields any source supplied.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no source supplied any field.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (field, source) attributions in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
