use std::path::PathBuf;

use anyhow::bail;
use freqstat_stats::sample::{self, InvalidInputError, Sample};

use crate::{
    render::{Format, labels::Locale},
    util::{self, Output},
};

/// Where the observations come from.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InputArg {
    /// Comma-separated observations, e.g. "10, 20, 20, 30". Read from stdin if omitted
    pub data: Option<String>,

    /// Read observations from a file (commas or line breaks separate values)
    #[arg(long, conflicts_with = "data")]
    pub file: Option<PathBuf>,
}

impl InputArg {
    fn read_text(&self) -> anyhow::Result<String> {
        if let Some(data) = &self.data {
            return Ok(data.clone());
        }
        if let Some(path) = &self.file {
            log::info!("Reading observations from {}", path.display());
            return util::read_text_file("observations", path);
        }
        log::info!("Reading observations from stdin");
        util::read_stdin()
    }

    /// Reads and parses the observations.
    ///
    /// Fails with a single localized message when the observations are
    /// unusable.
    pub fn read_sample(&self, locale: Locale) -> anyhow::Result<Sample> {
        let text = self.read_text()?;
        let text = text.replace(['\r', '\n'], &sample::TOKEN_SEPARATOR.to_string());

        let parsed = sample::parse_tokens(&text);
        if parsed.rejected > 0 {
            log::debug!("Discarded {} non-numeric token(s)", parsed.rejected);
        }
        let labels = locale.labels();
        let sample = match Sample::new(parsed.values) {
            Ok(sample) => sample,
            Err(err) => {
                log::debug!("Rejected input: {err}");
                match err {
                    InvalidInputError::RangeOverflow { .. } => bail!(labels.out_of_range),
                    InvalidInputError::NoValidNumbers
                    | InvalidInputError::NonFiniteValue { .. } => {
                        bail!(labels.invalid_input)
                    }
                }
            }
        };
        log::info!("Parsed {} observation(s)", sample.count());
        Ok(sample)
    }
}

/// How and where results are rendered.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct OutputArg {
    /// Output format: html, text or json
    #[arg(long, default_value = "html")]
    pub format: Format,

    /// Label language: es or en
    #[arg(long, default_value = "es")]
    pub lang: Locale,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl OutputArg {
    pub fn open(&self) -> anyhow::Result<Output> {
        Output::from_output_path(self.output.as_deref())
    }
}
