pub mod minute_counter;
pub mod percentage;
pub mod schedule;
pub mod status;
