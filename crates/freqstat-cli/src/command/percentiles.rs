use freqstat_stats::percentiles::{Percentiles, STANDARD_RANKS};

use super::args::{InputArg, OutputArg};
use crate::render;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PercentilesArg {
    #[clap(flatten)]
    input: InputArg,

    #[clap(flatten)]
    output: OutputArg,

    /// Percentile ranks to compute (comma-separated, each within 0..=100)
    #[arg(long, value_delimiter = ',', default_values_t = STANDARD_RANKS, value_parser = parse_rank)]
    ranks: Vec<f64>,
}

fn parse_rank(s: &str) -> Result<f64, String> {
    let rank: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid percentile rank `{s}`: {e}"))?;
    if (0.0..=100.0).contains(&rank) {
        Ok(rank)
    } else {
        Err(format!("percentile rank must be within 0..=100, got {rank}"))
    }
}

pub(crate) fn run(arg: &PercentilesArg) -> anyhow::Result<()> {
    let sample = arg.input.read_sample(arg.output.lang)?;
    let percentiles = Percentiles::new(&sample, &arg.ranks);

    let mut output = arg.output.open()?;
    render::write_percentiles(&mut output, &percentiles, arg.output.format, arg.output.lang)
}
