//! `kssl-getopt`: normalise a command line against an option spec.

use std::io;

fn main() {
    kssl_cli::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let code = kssl_cli::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock());
    std::process::exit(code);
}
