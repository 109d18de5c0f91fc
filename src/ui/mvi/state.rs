/// Marker trait for UI state objects.
///
/// States are cloned into the draw loop, compared in tests, and start
/// from `Default` when the application launches.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
