pub mod monthly;
pub mod working_time;
