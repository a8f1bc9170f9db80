//! Non-paginated languages of the selected country.

mod intent;
mod reducer;
mod state;

pub use intent::LanguagesIntent;
pub use reducer::LanguagesReducer;
pub use state::LanguagesState;
