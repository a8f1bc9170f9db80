//! Lookup data for the overview filters: regions and the year range.

mod intent;
mod reducer;
mod state;

pub use intent::ManagementInfoIntent;
pub use reducer::ManagementInfoReducer;
pub use state::{LoadStatus, ManagementInfoState};
