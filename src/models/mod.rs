pub mod date_range;
pub mod event;
pub mod group_record;
pub mod stats;
pub mod status;
