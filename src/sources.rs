//! Config sources: ranked providers of configuration values.
//!
//! A source is handed the flat binding sequence produced by the record
//! walker and writes whatever values it can resolve. The loader applies
//! sources in registration order; a source either fully applies its
//! available fields or fails the whole load.

use crate::error::LoadError;
use crate::provenance::Provenance;
use crate::schema::walker::FieldBinding;

mod defaults;
mod env;
mod file;
mod params;

pub use defaults::DefaultsSource;
pub use env::EnvSource;
pub use file::FileSource;
pub use params::ParamsSource;

/// A ranked provider of configuration values.
pub trait Source {
    /// Short label used for logging and provenance.
    fn label(&self) -> &'static str;

    /// Write this source's available values into the bindings, recording
    /// each touched field in `trace`. Fields the source cannot resolve are
    /// left untouched; any failure aborts the whole load.
    fn apply(
        &mut self,
        fields: &mut [FieldBinding<'_>],
        trace: &mut Provenance,
    ) -> Result<(), LoadError>;
}
