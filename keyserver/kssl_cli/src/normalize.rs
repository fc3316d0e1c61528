//! Scan the configured parameters and render them canonically.

use std::io::Write;

use kssl_diagnostic::Reporter;
use kssl_getopt::{Arity, LongOpt, ScanResult, ScanSpec};
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;

/// First id handed to long options; past the last `char`, so it never
/// collides with a short option.
pub const LONG_ID_BASE: i32 = 0x11_0000;

/// Canonical words and the number of option errors met on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub words: Vec<String>,
    pub errors: usize,
}

/// Scan `config.params` and render every option as its own word.
///
/// Short options come out as `-x`, long options under their full name,
/// arguments as separate quoted words (an absent optional argument as
/// `''`), then `--` and the quoted operands. Errors are reported to
/// `stderr` unless the config is quiet or the option string is silent.
#[tracing::instrument(level = "debug", skip_all, fields(name = %config.name))]
pub fn normalize<W: Write>(config: &Config, stderr: &mut W) -> Result<Normalized, CliError> {
    let long_opts = config
        .long_opts
        .iter()
        .zip(LONG_ID_BASE..)
        .map(|((name, arity), id)| LongOpt::new(name.as_str(), *arity, id))
        .collect();
    let spec = ScanSpec::new(&config.short_opts, long_opts)?;

    let argv: Vec<&str> = std::iter::once(config.name.as_str())
        .chain(config.params.iter().map(String::as_str))
        .collect();
    let reporter = Reporter::new(config.name.as_str()).with_enabled(!config.quiet);

    let mut words = Vec::new();
    let mut errors = 0;
    let mut scanner = spec.scan(&argv);
    loop {
        let result = scanner.next_option();
        match result {
            ScanResult::Option {
                id,
                argument,
                long_index,
            } => {
                let arity = match long_index {
                    Some(index) => {
                        let opt = &spec.long_opts()[index];
                        words.push(format!("--{}", opt.name()));
                        opt.arity()
                    }
                    None => {
                        let option = id.as_char().unwrap_or('?');
                        words.push(format!("-{option}"));
                        spec.short_arity(option).unwrap_or_default()
                    }
                };
                match (arity, argument) {
                    (Arity::None, _) => {}
                    (_, Some(value)) => words.push(quote(value)),
                    (Arity::Optional, None) => words.push(quote("")),
                    (Arity::Required, None) => {}
                }
            }
            ScanResult::UnknownOption(_) | ScanResult::MissingArgument(_) => {
                errors += 1;
                reporter.emit(&spec, &result, stderr)?;
            }
            ScanResult::NonOption | ScanResult::Done => break,
        }
    }

    words.push("--".to_string());
    words.extend(scanner.operands().iter().copied().map(quote));
    debug!(words = words.len(), errors, "parameters normalised");

    Ok(Normalized { words, errors })
}

/// Single-quote `word` for a POSIX shell.
pub fn quote(word: &str) -> String {
    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    for c in word.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}
