//! Strata: Layered Configuration Loading
//!
//! Populates a caller-defined configuration record by merging values from
//! ranked sources: an in-memory defaults layer, a JSON file, environment
//! variables, and command-line parameters. Sources are applied in
//! registration order, later sources overwriting earlier ones field by
//! field, with raw values coerced into each field's native type.
//!
//! A record describes its shape through the [`schema::Record`] trait,
//! usually generated with the [`schema!`] macro:
//!
//! ```
//! use strata::{EnvSource, Loader, ParamsSource};
//!
//! #[derive(Debug, Default)]
//! struct AppConfig {
//!     listen_url: String,
//!     database: String,
//! }
//!
//! strata::schema! {
//!     AppConfig {
//!         listen_url => "ListenURL",
//!         database,
//!     }
//! }
//!
//! let config = Loader::for_record(AppConfig::default())
//!     .add_source(ParamsSource::from_args(["--database", "mysql"]))
//!     .add_source(EnvSource::new())
//!     .retrieve()
//!     .unwrap();
//! assert_eq!(config.database, "mysql");
//! ```

pub mod coerce;
pub mod error;
pub mod loader;
pub mod logging;
mod macros;
pub mod provenance;
pub mod schema;
pub mod sources;

pub use error::LoadError;
pub use loader::Loader;
pub use provenance::Provenance;
pub use schema::Record;
pub use sources::{DefaultsSource, EnvSource, FileSource, ParamsSource, Source};
