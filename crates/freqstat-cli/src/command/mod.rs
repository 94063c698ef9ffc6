use clap::{ArgAction, Parser, Subcommand};

use self::{percentiles::PercentilesArg, summarize::SummarizeArg, table::TableArg};

mod args;
mod percentiles;
mod summarize;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug). `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// What to compute
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Full summary: statistics, percentiles and frequency table
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Frequency distribution table only
    Table(#[clap(flatten)] TableArg),
    /// Percentiles at arbitrary ranks
    Percentiles(#[clap(flatten)] PercentilesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose);

    match args
        .mode
        .unwrap_or(Mode::Summarize(SummarizeArg::default()))
    {
        Mode::Summarize(arg) => summarize::run(&arg)?,
        Mode::Table(arg) => table::run(&arg)?,
        Mode::Percentiles(arg) => percentiles::run(&arg)?,
    }
    Ok(())
}

fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
