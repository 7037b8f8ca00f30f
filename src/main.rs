use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use md2html::config::Config;
use md2html::logging;
use md2html::pipeline::Pipeline;

/// Convert markdown on stdin to HTML on stdout, with inline styles from
/// ~/.config/md2html/config.yaml
#[derive(Parser)]
#[command(name = "md2html")]
#[command(version)]
struct Cli {
    /// Ignored: the document is always read from stdin
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _args: Vec<OsString>,
}

fn main() -> ExitCode {
    Cli::parse();

    logging::init();

    let config = Config::load();

    match Pipeline::Styled(config).run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("md2html: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
