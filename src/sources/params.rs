//! Command-line parameter source: one string flag per field.

use crate::coerce;
use crate::error::LoadError;
use crate::provenance::Provenance;
use crate::schema::walker::FieldBinding;
use crate::sources::Source;

/// Loads values from command-line parameters.
///
/// One long flag is registered per field, named exactly as the field's
/// resolved external name and taking a single string value
/// (`--name value` or `--name=value`). Flags with a non-empty value are
/// coerced and written; omitted flags leave the field untouched. Unknown
/// or malformed arguments abort the load.
pub struct ParamsSource {
    args: Vec<String>,
}

impl ParamsSource {
    /// Source parsing the process command line.
    pub fn new() -> Self {
        Self {
            args: std::env::args().skip(1).collect(),
        }
    }

    /// Source parsing an explicit argument list (no binary name).
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for ParamsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for ParamsSource {
    fn label(&self) -> &'static str {
        "parameters"
    }

    fn apply(
        &mut self,
        fields: &mut [FieldBinding<'_>],
        trace: &mut Provenance,
    ) -> Result<(), LoadError> {
        let mut cmd = clap::Command::new("strata")
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true);
        for binding in fields.iter() {
            cmd = cmd.arg(
                clap::Arg::new(binding.name.clone())
                    .long(binding.name.clone())
                    .value_name("VALUE")
                    .action(clap::ArgAction::Set),
            );
        }

        let matches = cmd
            .try_get_matches_from(&self.args)
            .map_err(|e| LoadError::MalformedArgument(e.to_string()))?;

        for binding in fields.iter_mut() {
            let Some(value) = matches.get_one::<String>(&binding.name) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            coerce::assign_str(&mut binding.slot, &binding.name, value)?;
            trace.record(&binding.name, "parameters");
            tracing::trace!(field = %binding.name, "field set from parameters");
        }
        Ok(())
    }
}
