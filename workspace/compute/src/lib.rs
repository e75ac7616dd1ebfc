pub mod context;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod query;
pub mod table;

#[cfg(test)]
pub mod testing;

pub use context::{DataContext, GeneratorSettings};
pub use dashboard::build_dashboard;
pub use error::{ComputeError, Result};
pub use generator::{RandomSource, generate};
pub use query::{monthly_mean_series, select_exact};
pub use table::ObservationTable;

/// Returns the context used most of the time: 2014-2023, every month,
/// seeded when `seed` is given and from entropy otherwise.
pub fn default_context(seed: Option<u64>) -> Result<DataContext> {
    DataContext::generate(&GeneratorSettings::default().with_seed(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TableKind;

    #[test]
    fn test_default_context_covers_ten_years() {
        let context = default_context(Some(42)).unwrap();
        assert_eq!(context.years().first(), Some(&2014));
        assert_eq!(context.years().last(), Some(&2023));
        assert_eq!(context.months().len(), 12);
        for kind in TableKind::ALL {
            assert_eq!(context.table(kind).height(), 120);
        }
    }

    #[test]
    fn test_default_context_seed_is_reproducible() {
        let first = default_context(Some(42)).unwrap();
        let second = default_context(Some(42)).unwrap();
        assert_eq!(
            first.table(TableKind::Weather).values("Rainfall").unwrap(),
            second.table(TableKind::Weather).values("Rainfall").unwrap()
        );
    }

    #[test]
    fn test_default_context_without_seed() {
        let context = default_context(None).unwrap();
        assert_eq!(context.table(TableKind::Agriculture).height(), 120);
    }
}
