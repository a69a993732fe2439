//! UI-Komponenten: Menü, Karte, Segment-Editor, Tabelle, Dialoge.

pub mod curb_table;
pub mod dialogs;
/// UI-Layer mit egui
///
/// Jede Komponente rendert aus `&AppState` und gibt `AppIntent`s zurück.
/// Zustand wird nur für reine Eingabepuffer (Zahlenfeld, Dialog-Flags)
/// direkt verändert.
pub mod editor_panel;
mod keyboard;
pub mod map_view;
pub mod menu;
pub mod number_pad;
pub mod options_dialog;
pub mod segmented_editor;
pub mod status;

pub use curb_table::render_curb_table;
pub use dialogs::handle_file_dialogs;
pub use editor_panel::render_editor_panel;
pub use keyboard::collect_keyboard_intents;
pub use map_view::render_map_view;
pub use menu::render_menu;
pub use number_pad::show_number_pad;
pub use options_dialog::show_options_dialog;
pub use segmented_editor::render_segmented_editor;
pub use status::render_status_bar;

/// Wandelt eine Palettenfarbe in eine egui-Farbe.
pub(crate) fn palette_color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Wandelt eine Options-Farbe (`[f32; 4]`, 0..1) in eine egui-Farbe.
pub(crate) fn option_color(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
