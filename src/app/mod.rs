//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod curb_store;
pub mod dataset_loader;
pub mod events;
pub mod gesture;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Datensatz, Auswahl, Editor, View).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use curb_store::{reduce, CurbAction, CurbState, SegmentReplacement, SegmentUpdater};
pub use events::{AppCommand, AppIntent};
pub use gesture::{Gesture, GestureOutcome, GestureState, PointerEvent, PointerTarget};
pub use state::{
    format_length, AppState, EditorMode, EditorState, NumberPadField, NumberPadKey,
    NumberPadState, UiState, ViewState,
};
