pub mod calculator;
pub mod exchange;
pub mod latest;
pub mod log;
pub mod merge;
pub mod records;
pub mod reducer;
pub mod settings;
