pub mod dashboard;
pub mod health;
pub mod tables;
pub mod timeseries;
