//! Model-View-Intent primitives shared by every view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── fetch completions ───┘
//! ```
//!
//! Controllers turn user input and fetch completions into intents; reducers
//! are the only place view state changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
