//! User-facing wording, per language.

/// Language of rendered labels.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

/// Name and short interpretation of a reported statistic.
#[derive(Debug)]
pub struct StatisticLabel {
    pub name: &'static str,
    pub note: &'static str,
}

/// Header of a frequency table column, e.g. "Frecuencia Absoluta (fᵢ)".
#[derive(Debug)]
pub struct ColumnLabel {
    pub name: &'static str,
    /// Conventional symbol, rendered with an `i` subscript.
    pub symbol: &'static str,
}

#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub statistics_heading: &'static str,
    pub table_heading: &'static str,
    pub percentiles_heading: &'static str,
    pub sample_size: &'static str,
    pub invalid_input: &'static str,
    pub out_of_range: &'static str,
    pub no_mode: &'static str,
    pub undefined: &'static str,

    pub mean: StatisticLabel,
    pub median: StatisticLabel,
    pub mode: StatisticLabel,
    pub p10: StatisticLabel,
    pub p25: StatisticLabel,
    pub p75: StatisticLabel,
    pub p90: StatisticLabel,
    pub variance: StatisticLabel,
    pub standard_deviation: StatisticLabel,
    pub skewness: StatisticLabel,
    pub range: StatisticLabel,
    pub interquartile_range: StatisticLabel,

    pub value_column: &'static str,
    pub interval_column: &'static str,
    pub rank_column: &'static str,
    pub percentile_value_column: &'static str,
    pub frequency: ColumnLabel,
    pub cumulative_frequency: ColumnLabel,
    pub relative_frequency: ColumnLabel,
    pub cumulative_relative_frequency: ColumnLabel,
}

static ES: Labels = Labels {
    title: "Resumen estadístico",
    statistics_heading: "Estadísticos",
    table_heading: "Tabla de frecuencias",
    percentiles_heading: "Percentiles",
    sample_size: "Tamaño de la muestra",
    invalid_input: "Por favor ingrese tiempos válidos.",
    out_of_range: "Los valores exceden el rango numérico representable.",
    no_mode: "No hay moda",
    undefined: "indefinido",

    mean: StatisticLabel {
        name: "Media",
        note: "Promedio de los datos",
    },
    median: StatisticLabel {
        name: "Mediana",
        note: "Valor medio",
    },
    mode: StatisticLabel {
        name: "Moda",
        note: "Valor más frecuente",
    },
    p10: StatisticLabel {
        name: "Percentil 10",
        note: "Valor bajo",
    },
    p25: StatisticLabel {
        name: "Cuartil 1",
        note: "25% de los datos",
    },
    p75: StatisticLabel {
        name: "Cuartil 3",
        note: "75% de los datos",
    },
    p90: StatisticLabel {
        name: "Percentil 90",
        note: "Valor alto",
    },
    variance: StatisticLabel {
        name: "Varianza",
        note: "Dispersión de los datos en torno a la media",
    },
    standard_deviation: StatisticLabel {
        name: "Desviación estándar",
        note: "Variabilidad de los datos",
    },
    skewness: StatisticLabel {
        name: "Coeficiente de Asimetría de Fisher",
        note: "Grado de asimetría en la distribución",
    },
    range: StatisticLabel {
        name: "Rango",
        note: "Diferencia entre el valor máximo y mínimo",
    },
    interquartile_range: StatisticLabel {
        name: "Rango Intercuartílico",
        note: "Diferencia entre Q3 y Q1",
    },

    value_column: "Valor (x)",
    interval_column: "Intervalo",
    rank_column: "Percentil",
    percentile_value_column: "Valor",
    frequency: ColumnLabel {
        name: "Frecuencia Absoluta",
        symbol: "f",
    },
    cumulative_frequency: ColumnLabel {
        name: "Frecuencia Acumulada",
        symbol: "F",
    },
    relative_frequency: ColumnLabel {
        name: "Frecuencia Relativa",
        symbol: "h",
    },
    cumulative_relative_frequency: ColumnLabel {
        name: "Frecuencia Relativa Acumulada",
        symbol: "H",
    },
};

static EN: Labels = Labels {
    title: "Statistical summary",
    statistics_heading: "Statistics",
    table_heading: "Frequency table",
    percentiles_heading: "Percentiles",
    sample_size: "Sample size",
    invalid_input: "Please enter valid values.",
    out_of_range: "The values exceed the representable numeric range.",
    no_mode: "No mode",
    undefined: "undefined",

    mean: StatisticLabel {
        name: "Mean",
        note: "Average of the data",
    },
    median: StatisticLabel {
        name: "Median",
        note: "Middle value",
    },
    mode: StatisticLabel {
        name: "Mode",
        note: "Most frequent value",
    },
    p10: StatisticLabel {
        name: "Percentile 10",
        note: "Low value",
    },
    p25: StatisticLabel {
        name: "Quartile 1",
        note: "25% of the data",
    },
    p75: StatisticLabel {
        name: "Quartile 3",
        note: "75% of the data",
    },
    p90: StatisticLabel {
        name: "Percentile 90",
        note: "High value",
    },
    variance: StatisticLabel {
        name: "Variance",
        note: "Spread of the data around the mean",
    },
    standard_deviation: StatisticLabel {
        name: "Standard deviation",
        note: "Variability of the data",
    },
    skewness: StatisticLabel {
        name: "Fisher skewness coefficient",
        note: "Degree of asymmetry of the distribution",
    },
    range: StatisticLabel {
        name: "Range",
        note: "Difference between the maximum and minimum values",
    },
    interquartile_range: StatisticLabel {
        name: "Interquartile range",
        note: "Difference between Q3 and Q1",
    },

    value_column: "Value (x)",
    interval_column: "Interval",
    rank_column: "Percentile",
    percentile_value_column: "Value",
    frequency: ColumnLabel {
        name: "Absolute Frequency",
        symbol: "f",
    },
    cumulative_frequency: ColumnLabel {
        name: "Cumulative Frequency",
        symbol: "F",
    },
    relative_frequency: ColumnLabel {
        name: "Relative Frequency",
        symbol: "h",
    },
    cumulative_relative_frequency: ColumnLabel {
        name: "Cumulative Relative Frequency",
        symbol: "H",
    },
};
