//! In-memory defaults source, ordinarily registered first.

use crate::coerce;
use crate::error::LoadError;
use crate::provenance::Provenance;
use crate::schema::walker::FieldBinding;
use crate::sources::Source;

/// Loads values from an in-memory (resolved name, raw value) list.
///
/// Registered first, this acts as the lowest-priority layer so every later
/// source overrides it. Values go through the same coercion path as the
/// environment and parameter sources. Pairs naming no known field are
/// skipped.
#[derive(Debug, Default)]
pub struct DefaultsSource {
    values: Vec<(String, String)>,
}

impl DefaultsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default for the field with the given resolved external name.
    /// Later entries for the same field overwrite earlier ones.
    pub fn set(mut self, field: &str, value: &str) -> Self {
        self.values.push((field.to_string(), value.to_string()));
        self
    }
}

impl Source for DefaultsSource {
    fn label(&self) -> &'static str {
        "defaults"
    }

    fn apply(
        &mut self,
        fields: &mut [FieldBinding<'_>],
        trace: &mut Provenance,
    ) -> Result<(), LoadError> {
        for (name, value) in &self.values {
            let Some(binding) = fields.iter_mut().find(|b| b.name == *name) else {
                tracing::debug!(field = %name, "default names no known field, skipping");
                continue;
            };
            coerce::assign_str(&mut binding.slot, name, value)?;
            trace.record(name, "defaults");
        }
        Ok(())
    }
}
