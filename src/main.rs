mod cli;
mod config;
mod errors;
mod filter;
mod lister;
mod logging;
mod render;

use clap::Parser;
use cli::Args;
use config::Settings;
use errors::AppError;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;

fn run(args: &Args) -> Result<(), AppError> {
    let file_config = config::load_config(args)?;
    let settings = Settings::resolve(args, file_config)?;

    info!(
        directory = %settings.directory.display(),
        suffixes = ?settings.filter.suffixes(),
        "resolved settings"
    );

    let names = match settings.filter.suffixes() {
        [extension] => lister::list_matching(&settings.directory, extension)?,
        _ => lister::list_matching_filter(&settings.directory, &settings.filter)?,
    };
    let output = render::render(&names, settings.format);

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("extls: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
