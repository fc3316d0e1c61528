//! Configuration of one run, filled by scanning our own arguments.

use kssl_diagnostic::{progname, ScanDiagnostic};
use kssl_getopt::{Arity, FlagCell, LongOpt, ScanResult, ScanSpec};

use crate::error::CliError;

/// What to scan and how.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Short option string for the scanned parameters.
    pub short_opts: String,
    /// Long options for the scanned parameters, in declaration order.
    pub long_opts: Vec<(String, Arity)>,
    /// Program name reported as `argv[0]` of the scanned parameters.
    pub name: String,
    /// Suppress diagnostics for errors in the scanned parameters.
    pub quiet: bool,
    pub help: bool,
    /// The parameters to scan.
    pub params: Vec<String>,
}

impl Config {
    /// Build a configuration from the tool's own argument vector.
    ///
    /// Without `-o`, the first operand is taken as the short option string.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let quiet = FlagCell::new(0);
        let spec = own_spec(&quiet)?;

        let argv0 = args.first().map_or("", AsRef::as_ref);
        let mut config = Config {
            name: progname(argv0).to_string(),
            ..Config::default()
        };
        let mut short_opts = None;

        let mut scanner = spec.scan(args);
        loop {
            let result = scanner.next_option();
            match result {
                ScanResult::Option { id, argument, .. } => match (id.as_char(), argument) {
                    _ if id.is_flag() => {}
                    (Some('h'), _) => config.help = true,
                    (Some('q'), _) => quiet.set(1),
                    (Some('o'), Some(value)) => short_opts = Some(value.to_string()),
                    (Some('l'), Some(value)) => config.long_opts.extend(parse_long_options(value)),
                    (Some('n'), Some(value)) => config.name = value.to_string(),
                    _ => {}
                },
                ScanResult::UnknownOption(_) | ScanResult::MissingArgument(_) => {
                    let message = ScanDiagnostic::from_result(&result)
                        .map(|diagnostic| diagnostic.to_string())
                        .unwrap_or_default();
                    return Err(CliError::Usage(message));
                }
                ScanResult::NonOption | ScanResult::Done => break,
            }
        }

        let mut operands = scanner.operands().iter().map(|s| s.as_ref().to_string());
        config.short_opts = match short_opts {
            Some(opts) => opts,
            None => match operands.next() {
                Some(opts) => opts,
                None if config.help => String::new(),
                None => return Err(CliError::Usage("missing optstring argument".to_string())),
            },
        };
        config.params = operands.collect();
        config.quiet = quiet.get() != 0;

        Ok(config)
    }
}

/// Parse a comma-separated long option list. A trailing `:` marks a
/// required argument and `::` an optional one; empty entries are skipped.
pub fn parse_long_options(list: &str) -> Vec<(String, Arity)> {
    list.split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            if let Some(name) = entry.strip_suffix("::") {
                (name.to_string(), Arity::Optional)
            } else if let Some(name) = entry.strip_suffix(':') {
                (name.to_string(), Arity::Required)
            } else {
                (entry.to_string(), Arity::None)
            }
        })
        .collect()
}

/// The tool's own options. `--quiet` stores into `quiet` rather than
/// reporting an id.
fn own_spec(quiet: &FlagCell) -> Result<ScanSpec, CliError> {
    let spec = ScanSpec::new(
        "ho:l:n:q",
        vec![
            LongOpt::new("help", Arity::None, 'h'),
            LongOpt::new("options", Arity::Required, 'o'),
            LongOpt::new("longoptions", Arity::Required, 'l'),
            LongOpt::new("name", Arity::Required, 'n'),
            LongOpt::flag("quiet", Arity::None, quiet, 1),
        ],
    )?;
    Ok(spec)
}

#[cfg(test)]
mod tests;
