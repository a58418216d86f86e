//! Marker trait for view intents.

/// Something that happened to a view: a page click, typed text, or a fetch
/// completing. Fetch-driven intents carry the request number they answer.
pub trait Intent: Send + 'static {}
