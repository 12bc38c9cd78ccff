use clap::Parser;
use motifmark::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{oneline, plot},
    utils::{handle_error_and_exit, Result},
};
use std::time;

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        FULL_VERSION,
        cli.command.name()
    );

    let start_timer = time::Instant::now();
    match cli.command {
        Command::Plot(args) => {
            log::trace!("Plot arguments: {:#?}", args);
            plot::motif_mark(args)?
        }
        Command::Oneline(args) => {
            log::trace!("Oneline arguments: {:#?}", args);
            oneline::oneline(args)?
        }
    }

    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
