use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use md2html::logging;
use md2html::pipeline::Pipeline;

/// Convert markdown on stdin to HTML on stdout, without any post-processing
#[derive(Parser)]
#[command(name = "md2html-plain")]
#[command(version)]
struct Cli {
    /// Ignored: the document is always read from stdin
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _args: Vec<OsString>,
}

fn main() -> ExitCode {
    Cli::parse();

    logging::init();

    match Pipeline::Plain.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("md2html-plain: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
