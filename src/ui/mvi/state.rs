/// Marker trait for view state.
///
/// State is owned by exactly one controller, cloned for rendering and
/// compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
