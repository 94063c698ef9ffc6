use freqstat_stats::summary::Summary;

use super::args::{InputArg, OutputArg};
use crate::render;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    #[clap(flatten)]
    input: InputArg,

    #[clap(flatten)]
    output: OutputArg,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let sample = arg.input.read_sample(arg.output.lang)?;
    let summary = Summary::compute(&sample);
    log::debug!(
        "Built {} frequency table with {} row(s)",
        summary.frequency_table.kind(),
        summary.frequency_table.len()
    );

    let mut output = arg.output.open()?;
    render::write_summary(&mut output, &summary, arg.output.format, arg.output.lang)
}
