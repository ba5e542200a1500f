use std::path::Path;
use std::process::ExitCode;

use fileflag::error::EXIT_FAILURE;
use fileflag::{Cli, Error, Stage, WriteConfig, WriteEngine, cli, logging};
use tracing::debug;

fn main() -> ExitCode {
    logging::init();

    let parsed = Cli::parse_env();
    if !parsed.args.is_empty() {
        debug!(count = parsed.args.len(), "ignoring arguments after the first non-flag");
    }

    let config = match WriteConfig::try_from(parsed) {
        Ok(config) => config,
        Err(e) => {
            eprint!("{}", cli::defaults());
            println!("error: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    debug!(
        stdout = config.output().is_stdout(),
        bytes = config.content().len(),
        "configuration validated"
    );

    match WriteEngine::from_config(&config).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::Io(e)) if e.stage == Stage::Open => {
            cli::open_error(Path::new(&e.target), &e.error).exit()
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}
