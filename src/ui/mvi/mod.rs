//! Model-View-Intent (MVI) primitives shared by every store slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selector ──→ View model
//!    ↑                                             │
//!    └─────────────── presentation ────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one slice (or the composite)
//! - **Intent**: a named request for a state transition
//! - **Reducer**: pure function producing the next state
//!
//! Side effects never live here; see [`crate::store::effects`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
