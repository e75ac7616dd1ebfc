use anyhow::{Result, bail};
use compute::{DataContext, GeneratorSettings, RandomSource};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use model::{DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR, default_months};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Runtime settings, layered from defaults, `santacruz.toml` and
/// `SANTACRUZ_*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub bind_address: String,
    pub first_year: i32,
    pub last_year: i32,
    /// Without a seed the tables differ on every start
    pub seed: Option<u64>,
}

impl Settings {
    /// Applies command line flags on top of the loaded settings.
    pub fn with_overrides(mut self, bind_address: Option<String>, seed: Option<u64>) -> Self {
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            years: (self.first_year..=self.last_year).collect(),
            months: default_months(),
            source: RandomSource::from_seed(self.seed),
        }
    }
}

fn base_builder() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
        .set_default("first_year", DEFAULT_FIRST_YEAR as i64)?
        .set_default("last_year", DEFAULT_LAST_YEAR as i64)?)
}

/// Load settings from the config file and environment
pub fn load_settings() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let builder = base_builder()?
        .add_source(File::with_name("santacruz").required(false))
        .add_source(Environment::with_prefix("SANTACRUZ"));
    settings_from_builder(builder)
}

pub fn settings_from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    let settings: Settings = builder.build()?.try_deserialize()?;
    if settings.first_year > settings.last_year {
        bail!(
            "first_year ({}) must not be after last_year ({})",
            settings.first_year,
            settings.last_year
        );
    }
    debug!(?settings, "Settings loaded");
    Ok(settings)
}

/// Generate the tables and wrap them in the shared application state
pub fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    info!(
        first_year = settings.first_year,
        last_year = settings.last_year,
        seeded = settings.seed.is_some(),
        "Generating dashboard data"
    );
    let context = DataContext::generate(&settings.generator_settings())?;
    Ok(AppState {
        context: Arc::new(context),
    })
}
