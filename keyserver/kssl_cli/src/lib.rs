//! Command-line front end for the kssl option scanner.
//!
//! `kssl-getopt` works like util-linux `getopt(1)` in POSIX mode: it scans
//! a parameter list against a short option string and a long option list,
//! and prints the options back in a canonical, shell-quoted form followed
//! by `--` and the operands.
//!
//! ```text
//! $ kssl-getopt -o vp: -l verbose,port: -- -vp443 --verb file
//! -v -p '443' --verbose -- 'file'
//! ```
//!
//! This crate owns everything the scanner deliberately does not: stream
//! output, diagnostics on stderr, and the process exit code.
//!
//! | Exit code | Meaning |
//! |---|---|
//! | 0 | success |
//! | 1 | the scanned parameters contained option errors |
//! | 2 | bad usage of `kssl-getopt` itself, or an invalid option spec |
//! | 3 | I/O error while writing output |

mod config;
mod error;
mod normalize;

use std::io::Write;
use std::sync::Once;

use kssl_diagnostic::progname;

pub use config::{parse_long_options, Config};
pub use error::CliError;
pub use normalize::{normalize, quote, Normalized, LONG_ID_BASE};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=kssl_getopt=trace` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}

/// Run the tool on `args` (including `args[0]`) and return the exit code.
pub fn run<S: AsRef<str>>(args: &[S], stdout: &mut impl Write, stderr: &mut impl Write) -> i32 {
    let prog = args
        .first()
        .map_or("kssl-getopt", |argv0| progname(argv0.as_ref()));

    match try_run(prog, args, stdout, stderr) {
        Ok(code) => code,
        Err(err) => {
            let _ = writeln!(stderr, "{prog}: {err}");
            if matches!(err, CliError::Usage(_)) {
                let _ = writeln!(stderr, "Try '{prog} --help' for more information.");
            }
            err.exit_code()
        }
    }
}

fn try_run<S: AsRef<str>>(
    prog: &str,
    args: &[S],
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<i32, CliError> {
    let config = Config::from_args(args)?;
    if config.help {
        stdout.write_all(usage(prog).as_bytes())?;
        return Ok(0);
    }

    let normalized = normalize(&config, stderr)?;
    writeln!(stdout, "{}", normalized.words.join(" "))?;
    Ok(if normalized.errors == 0 { 0 } else { 1 })
}

/// Help text.
pub fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [options] [--] optstring parameters\n\
         \x20      {prog} [options] -o|--options optstring [options] [--] parameters\n\
         \n\
         Options:\n\
         \x20 -o, --options <optstring>     short options to recognize\n\
         \x20 -l, --longoptions <longopts>  long options, comma separated; append ':' for a\n\
         \x20                               required and '::' for an optional argument\n\
         \x20 -n, --name <progname>         name used in error messages\n\
         \x20 -q, --quiet                   do not report option errors\n\
         \x20 -h, --help                    display this help\n"
    )
}
