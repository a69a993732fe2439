//! Row Canvas Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    reduce, AppCommand, AppController, AppIntent, AppState, CurbAction, CurbState, EditorMode,
    UiState, ViewState,
};
pub use core::{
    build_segmented_highlight, layout_labels, Blockface, BlockfaceSet, Camera2D, Segment,
    SegmentError, SegmentType, SpatialIndex, SpatialMatch,
};
pub use shared::EditorOptions;
