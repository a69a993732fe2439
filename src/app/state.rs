//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod number_pad;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{EditorMode, EditorState};
pub use number_pad::{format_length, NumberPadField, NumberPadKey, NumberPadState};
pub use ui::UiState;
pub use view::ViewState;
