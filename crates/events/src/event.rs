use chrono::{DateTime, Utc};

/// A domain event.
///
/// Events are immutable facts describing a state change that already happened
/// (e.g. "item added to cart"). They are produced by an aggregate's `handle`,
/// applied by its `apply`, and then published so observers can react.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "cart.item_added").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (wall-clock time of the user action).
    fn occurred_at(&self) -> DateTime<Utc>;
}
