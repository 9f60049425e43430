pub mod generation_request;
pub mod ui_state;
pub use generation_request::{ContentType, Difficulty, GenerationRequest};
pub use ui_state::{BusyGuard, UiState};
