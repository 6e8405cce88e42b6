//! Merge engine: applies ranked sources onto a target record.

use crate::error::LoadError;
use crate::provenance::Provenance;
use crate::schema::{walker, Record};
use crate::sources::Source;

/// Applies an ordered list of sources onto a target record.
///
/// Sources added later take priority: each one overwrites, field by field,
/// whatever earlier sources supplied. A loader is single-use;
/// [`retrieve`](Loader::retrieve) consumes it, so a finished loader cannot
/// be re-run.
///
/// ```
/// use strata::{DefaultsSource, Loader};
///
/// #[derive(Default)]
/// struct AppConfig {
///     database: String,
/// }
///
/// strata::schema! {
///     AppConfig {
///         database,
///     }
/// }
///
/// let config = Loader::for_record(AppConfig::default())
///     .add_source(DefaultsSource::new().set("database", "postgres"))
///     .retrieve()
///     .unwrap();
/// assert_eq!(config.database, "postgres");
/// ```
pub struct Loader<T: Record> {
    target: T,
    sources: Vec<Box<dyn Source>>,
}

impl<T: Record> Loader<T> {
    /// Create a loader for `target` with an empty source list.
    pub fn for_record(target: T) -> Self {
        Self {
            target,
            sources: Vec::new(),
        }
    }

    /// Append a source. Registration order defines priority: sources added
    /// later overwrite fields touched by earlier ones.
    pub fn add_source(mut self, source: impl Source + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Run every registered source against the target, in registration
    /// order, and return the populated record. The first failure aborts
    /// the whole load with no partial result.
    pub fn retrieve(self) -> Result<T, LoadError> {
        self.retrieve_traced().map(|(target, _)| target)
    }

    /// Like [`retrieve`](Loader::retrieve), additionally reporting which
    /// source last supplied each field.
    pub fn retrieve_traced(self) -> Result<(T, Provenance), LoadError> {
        let Loader {
            mut target,
            mut sources,
        } = self;
        let mut trace = Provenance::default();
        {
            // One walk per load; every source consumes the same bindings.
            let mut fields = walker::collect(&mut target);
            for source in sources.iter_mut() {
                tracing::debug!(
                    source = source.label(),
                    fields = fields.len(),
                    "applying config source"
                );
                source.apply(&mut fields, &mut trace)?;
            }
        }
        Ok((target, trace))
    }
}
