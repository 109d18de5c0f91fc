/// Marker trait for intent objects.
///
/// Intents come from two places: the keyboard (search edits) and the
/// fetch task (started, settled, finished).
pub trait Intent: Send + 'static {}
