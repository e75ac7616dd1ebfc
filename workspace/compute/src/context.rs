use model::{TableKind, default_months, default_years};
use tracing::{info, instrument};

use crate::error::Result;
use crate::generator::{RandomSource, generate};
use crate::table::ObservationTable;

/// Parameters for building a [`DataContext`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub source: RandomSource,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            years: default_years(),
            months: default_months(),
            source: RandomSource::Entropy,
        }
    }
}

impl GeneratorSettings {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.source = RandomSource::from_seed(seed);
        self
    }
}

/// The generated agriculture and weather tables.
///
/// Built once at startup and only read afterwards; share it behind an `Arc`.
#[derive(Debug)]
pub struct DataContext {
    years: Vec<i32>,
    months: Vec<u32>,
    agriculture: ObservationTable,
    weather: ObservationTable,
}

impl DataContext {
    /// Generates both tables from one random source, agriculture first.
    #[instrument]
    pub fn generate(settings: &GeneratorSettings) -> Result<Self> {
        let mut rng = settings.source.rng();
        let agriculture = generate(
            &settings.years,
            &settings.months,
            TableKind::Agriculture.fields(),
            &mut rng,
        )?;
        let weather = generate(
            &settings.years,
            &settings.months,
            TableKind::Weather.fields(),
            &mut rng,
        )?;

        info!(
            agriculture_rows = agriculture.height(),
            weather_rows = weather.height(),
            "Generated dashboard tables"
        );

        Ok(Self::from_tables(
            settings.years.clone(),
            settings.months.clone(),
            agriculture,
            weather,
        ))
    }

    pub fn from_tables(
        years: Vec<i32>,
        months: Vec<u32>,
        agriculture: ObservationTable,
        weather: ObservationTable,
    ) -> Self {
        Self {
            years,
            months,
            agriculture,
            weather,
        }
    }

    pub fn table(&self, kind: TableKind) -> &ObservationTable {
        match kind {
            TableKind::Agriculture => &self.agriculture,
            TableKind::Weather => &self.weather,
        }
    }

    /// Years the tables were generated for, in generation order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn months(&self) -> &[u32] {
        &self.months
    }

    /// Page title, e.g. "Santa Cruz Agriculture and Weather Data (2014-2023)".
    pub fn title(&self) -> String {
        let base = "Santa Cruz Agriculture and Weather Data";
        match (self.years.iter().min(), self.years.iter().max()) {
            (Some(first), Some(last)) => format!("{} ({}-{})", base, first, last),
            _ => base.to_string(),
        }
    }
}
