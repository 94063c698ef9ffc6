use freqstat_stats::frequency::{FrequencyTable, TableKind};

use super::args::{InputArg, OutputArg};
use crate::render;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TableArg {
    #[clap(flatten)]
    input: InputArg,

    #[clap(flatten)]
    output: OutputArg,

    /// Force a table kind (discrete or grouped) instead of choosing by sample size
    #[arg(long)]
    kind: Option<TableKindArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
enum TableKindArg {
    Discrete,
    Grouped,
}

pub(crate) fn run(arg: &TableArg) -> anyhow::Result<()> {
    let sample = arg.input.read_sample(arg.output.lang)?;
    let table = match arg.kind {
        None => FrequencyTable::build(&sample),
        Some(TableKindArg::Discrete) => FrequencyTable::discrete(&sample),
        Some(TableKindArg::Grouped) => FrequencyTable::grouped(&sample),
    };
    if arg.kind.is_none() {
        log::debug!(
            "Chose {} table for {} observation(s)",
            TableKind::for_count(sample.count()),
            sample.count()
        );
    }

    let mut output = arg.output.open()?;
    render::write_table(&mut output, &table, arg.output.format, arg.output.lang)
}
