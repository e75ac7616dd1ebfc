//! Monthly aggregation scenarios built from hand-written tables.

use super::helpers::{VALUE, value_table, ymd};
use super::{Expected, TestScenario, TestScenarioBuilder, run_and_assert_scenario};

/// One row per month, so every mean is the raw value.
struct SingleRowPerMonth;

impl TestScenarioBuilder for SingleRowPerMonth {
    fn get_scenario(&self) -> TestScenario {
        let table = value_table(&[(2020, 1, 10.0), (2020, 2, 20.0), (2020, 3, 30.0)]);
        let expected = Expected::Points(vec![
            (ymd(2020, 1, 1), 10.0),
            (ymd(2020, 2, 1), 20.0),
            (ymd(2020, 3, 1), 30.0),
        ]);
        (table, VALUE.name, expected)
    }
}

/// Repeated keys collapse into their arithmetic mean.
struct DuplicateKeysAreAveraged;

impl TestScenarioBuilder for DuplicateKeysAreAveraged {
    fn get_scenario(&self) -> TestScenario {
        let table = value_table(&[
            (2021, 5, 10.0),
            (2021, 5, 20.0),
            (2021, 5, 60.0),
            (2021, 6, 7.5),
        ]);
        let expected = Expected::Points(vec![(ymd(2021, 5, 1), 30.0), (ymd(2021, 6, 1), 7.5)]);
        (table, VALUE.name, expected)
    }
}

/// Input order does not matter; output is ascending by date.
struct ShuffledInputIsSorted;

impl TestScenarioBuilder for ShuffledInputIsSorted {
    fn get_scenario(&self) -> TestScenario {
        let table = value_table(&[
            (2023, 12, 4.0),
            (2014, 1, 1.0),
            (2019, 7, 3.0),
            (2014, 2, 2.0),
            (2023, 12, 6.0),
        ]);
        let expected = Expected::Points(vec![
            (ymd(2014, 1, 1), 1.0),
            (ymd(2014, 2, 1), 2.0),
            (ymd(2019, 7, 1), 3.0),
            (ymd(2023, 12, 1), 5.0),
        ]);
        (table, VALUE.name, expected)
    }
}

/// A month outside 1-12 cannot become a date.
struct MonthThirteenFails;

impl TestScenarioBuilder for MonthThirteenFails {
    fn get_scenario(&self) -> TestScenario {
        let table = value_table(&[(2020, 12, 1.0), (2020, 13, 2.0)]);
        (table, VALUE.name, Expected::DateError { year: 2020, month: 13 })
    }
}

struct MonthZeroFails;

impl TestScenarioBuilder for MonthZeroFails {
    fn get_scenario(&self) -> TestScenario {
        let table = value_table(&[(2020, 0, 1.0)]);
        (table, VALUE.name, Expected::DateError { year: 2020, month: 0 })
    }
}

struct EmptyTable;

impl TestScenarioBuilder for EmptyTable {
    fn get_scenario(&self) -> TestScenario {
        (value_table(&[]), VALUE.name, Expected::Points(vec![]))
    }
}

#[test]
fn test_single_row_per_month() {
    run_and_assert_scenario(&SingleRowPerMonth);
}

#[test]
fn test_duplicate_keys_are_averaged() {
    run_and_assert_scenario(&DuplicateKeysAreAveraged);
}

#[test]
fn test_shuffled_input_is_sorted() {
    run_and_assert_scenario(&ShuffledInputIsSorted);
}

#[test]
fn test_month_thirteen_fails() {
    run_and_assert_scenario(&MonthThirteenFails);
}

#[test]
fn test_month_zero_fails() {
    run_and_assert_scenario(&MonthZeroFails);
}

#[test]
fn test_empty_table() {
    run_and_assert_scenario(&EmptyTable);
}
