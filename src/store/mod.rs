//! Paginated state-and-view-model core.
//!
//! # Flow
//!
//! ```text
//! dispatch(intent) ──→ NationsReducer ──→ snapshot ──→ selectors ──→ view model
//!                           │
//!                           └──→ EffectOrchestrator ──→ NationsApi (async)
//!                                      ↑                      │
//!                                      └── ticket check ◄─────┘
//! ```
//!
//! The composite [`NationsState`] is owned by the store runtime and only
//! changes through [`NationsReducer`]. Fetches are issued by the
//! [`effects::EffectOrchestrator`]; their outcomes re-enter as intents, and
//! only the most recently requested fetch per slice is ever applied.

pub mod effects;
pub mod languages;
pub mod management;
pub mod observer;
pub mod paged;
pub mod selectors;

mod intent;
mod reducer;
mod runtime;
mod state;

pub use intent::{
    CountriesListIntent, CountryStatsIntent, IntentLabel, NationsIntent, OverviewIntent,
};
pub use reducer::NationsReducer;
pub use runtime::{Store, StoreBuilder, StoreError, StoreHandle};
pub use state::{ErrorCode, NationsState, PaginationState, SliceId, DEFAULT_PAGE_SIZE};
