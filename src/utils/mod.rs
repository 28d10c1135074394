// Utility functions
// Helper functions for common operations

pub mod data_state;
pub mod request_generation;
pub mod time;

pub use data_state::ViewState;
pub use request_generation::{Generation, RequestGeneration};
pub use time::{format_date, format_datetime_in};

/// Treat blank identifiers the same as missing ones; others pass through untouched
pub fn normalize_identifier(id: Option<&str>) -> Option<&str> {
    id.filter(|s| !s.trim().is_empty())
}
