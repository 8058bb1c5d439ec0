//! Helpers shared by every model implementation

mod history;
mod metrics;
mod time_index;

pub use history::validate_history;
pub use metrics::coefficient_of_determination;
pub use time_index::implicit_time_index;
