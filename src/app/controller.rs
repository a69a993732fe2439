//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datensatz & Dateien ===
            AppCommand::FetchDataset => handlers::file_io::fetch_dataset(state),
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::LoadDatasetFile { path } => handlers::file_io::load_file(state, path)?,
            AppCommand::ApplyDataset { source, blockfaces } => {
                handlers::file_io::apply_dataset(state, source, blockfaces)
            }
            AppCommand::ReportDatasetError { message } => {
                handlers::file_io::report_error(state, message)
            }
            AppCommand::RequestExportDialog => handlers::file_io::request_export(state),
            AppCommand::ExportSegments { path } => handlers::file_io::export(state, path)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::FitToDataset => handlers::view::fit_to_dataset(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Auswahl ===
            AppCommand::SelectBlockfaceAt {
                world_pos,
                max_distance,
            } => handlers::map::select_at(state, world_pos, max_distance),
            AppCommand::ClearSelection => handlers::map::clear(state),

            // === Segment-Editor ===
            AppCommand::SetEditorMode { mode } => handlers::curb::set_mode(state, mode),
            AppCommand::DispatchCurbAction { action } => handlers::curb::dispatch(state, action),
            AppCommand::ToggleLabelMenu { index } => {
                handlers::curb::toggle_label_menu(state, index)
            }
            AppCommand::CloseLabelMenu => handlers::curb::close_label_menu(state),
            AppCommand::HandleStripPointer {
                event,
                strip_height,
            } => handlers::curb::strip_pointer(state, event, strip_height),
            AppCommand::OpenNumberPad { index, field } => {
                handlers::curb::open_number_pad(state, index, field)
            }
            AppCommand::ConfirmNumberPad => handlers::curb::confirm_number_pad(state),
            AppCommand::CloseNumberPad => handlers::curb::close_number_pad(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
