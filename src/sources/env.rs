//! Environment variable source: CONFIG_<UPPERCASED_NAME> per field.

use crate::coerce;
use crate::error::LoadError;
use crate::provenance::Provenance;
use crate::schema::walker::FieldBinding;
use crate::sources::Source;

const ENV_PREFIX: &str = "CONFIG_";

/// Loads values from environment variables.
///
/// For each field, the variable name is `CONFIG_` plus the field's
/// resolved external name upper-cased. Absent or empty variables leave the
/// field untouched.
pub struct EnvSource {
    lookup: Box<dyn Fn(&str) -> Option<String>>,
}

impl EnvSource {
    /// Source reading the process environment.
    pub fn new() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    /// Source with a custom variable lookup, e.g. for tests.
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var_name(field: &str) -> String {
        format!("{}{}", ENV_PREFIX, field.to_uppercase())
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for EnvSource {
    fn label(&self) -> &'static str {
        "environment"
    }

    fn apply(
        &mut self,
        fields: &mut [FieldBinding<'_>],
        trace: &mut Provenance,
    ) -> Result<(), LoadError> {
        for binding in fields.iter_mut() {
            let var = Self::var_name(&binding.name);
            let Some(raw) = (self.lookup)(&var) else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }
            coerce::assign_str(&mut binding.slot, &binding.name, &raw)?;
            trace.record(&binding.name, "environment");
            tracing::trace!(field = %binding.name, var = %var, "field set from environment");
        }
        Ok(())
    }
}
