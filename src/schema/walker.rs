//! Record walker: flattens a record into its leaf field bindings.
//!
//! The walker runs once per load; every source consumes the same binding
//! sequence, so names and kinds are derived exactly once.

use crate::schema::{resolve_name, Entry, Record, Slot};

/// Flattened binding for one leaf field.
pub struct FieldBinding<'a> {
    /// Resolved external name: group prefixes + (override | declared name).
    /// Used by the environment and parameter sources.
    pub name: String,
    /// Declared field-name path from the record root. Used by document
    /// sources, independent of name derivation.
    pub path: Vec<&'static str>,
    /// Binding to the field's storage.
    pub slot: Slot<'a>,
}

/// Flatten a record into its leaf field bindings, depth-first in
/// declaration order. Group prefixes accumulate in front of every
/// descendant's resolved name.
pub fn collect(record: &mut dyn Record) -> Vec<FieldBinding<'_>> {
    let mut out = Vec::new();
    let mut path = Vec::new();
    collect_into(record, "", &mut path, &mut out);
    out
}

fn collect_into<'a>(
    record: &'a mut dyn Record,
    prefix: &str,
    path: &mut Vec<&'static str>,
    out: &mut Vec<FieldBinding<'a>>,
) {
    for entry in record.entries() {
        match entry {
            Entry::Leaf { name, rename, slot } => {
                path.push(name);
                out.push(FieldBinding {
                    name: resolve_name(prefix, name, rename),
                    path: path.clone(),
                    slot,
                });
                path.pop();
            }
            Entry::Group {
                name,
                prefix: group_prefix,
                record,
            } => {
                let nested = format!("{}{}", prefix, group_prefix);
                path.push(name);
                collect_into(record, &nested, path, out);
                path.pop();
            }
        }
    }
}
