// File: crates/game-insights/src/main.rs
// Summary: Entry point; renders the analysis figure and prints the key-insights digest.

use anyhow::Result;
use clap::Parser;
use game_insights::config::Args;
use game_insights::{render_report, Datasets};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    log::info!("game-insights v{}", env!("CARGO_PKG_VERSION"));
    let data = Datasets::load();
    let opts = args.render_options();
    log::debug!("theme {} at {} dpi", opts.theme.name, opts.dpi);

    let insights = render_report(&data, &opts, &args.output)?;
    print!("{insights}");
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
