pub mod helpers;
pub mod scenarios;

pub use helpers::{context_with_weather_rows, value_table, weather_table, ymd};

use chrono::NaiveDate;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::ComputeError;
use crate::query::monthly_mean_series;
use crate::table::ObservationTable;

/// What a series scenario is expected to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// (date, mean) pairs in the order the series must return them
    Points(Vec<(NaiveDate, f64)>),
    /// The aggregation must fail on this key
    DateError { year: i32, month: u32 },
}

/// Prepared test scenario: the table, the field to aggregate and the outcome.
pub type TestScenario = (ObservationTable, &'static str, Expected);

/// Trait for building test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

/// Runs `monthly_mean_series` on the scenario and checks the outcome.
pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) {
    let _guard = init_test_tracing();
    let (table, field, expected) = builder.get_scenario();
    let result = monthly_mean_series(&table, field);

    match (result, expected) {
        (Ok(points), Expected::Points(expected)) => {
            assert_eq!(points.len(), expected.len(), "point count: {:#?}", points);
            for (point, (date, value)) in points.iter().zip(expected.iter()) {
                assert_eq!(point.date, *date);
                assert!(
                    (point.value - value).abs() < 1e-9,
                    "value on {}: got {}, expected {}",
                    date,
                    point.value,
                    value
                );
            }
        }
        (Err(ComputeError::DateComposition { year, month }), Expected::DateError { year: y, month: m }) => {
            assert_eq!((year, month), (y, m));
        }
        (other, expected) => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
