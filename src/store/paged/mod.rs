//! Generic paginated slice: data, loading flag, error, pagination and
//! filters of one server-paginated collection.

mod intent;
mod reducer;
mod state;

pub use intent::PageIntent;
pub use reducer::PageReducer;
pub use state::{PagedSlice, SliceItem};
