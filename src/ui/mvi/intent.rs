//! Base trait for intents in MVI architecture.

/// Marker trait for intent values.
///
/// Intents represent:
/// - User actions (page clicks, filter edits)
/// - Fetch outcomes (page loaded, load failed)
/// - Store lifecycle events
///
/// Intents are plain tagged values. Constructing one has no side effects.
pub trait Intent: Clone + std::fmt::Debug + Send + 'static {}
