//! Mapping von UI-Intents auf mutierende App-Commands.

use super::curb_store::CurbAction;
use super::{AppCommand, AppIntent, AppState};
use crate::core::SegmentType;

/// Typ neu eingefügter Segmente.
const NEW_SEGMENT_KIND: SegmentType = SegmentType::Parking;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FetchDatasetRequested => vec![AppCommand::FetchDataset],
        AppIntent::OpenDatasetFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::DatasetFileSelected { path } => vec![
            AppCommand::LoadDatasetFile { path },
            AppCommand::FitToDataset,
        ],
        AppIntent::DatasetLoaded { source, blockfaces } => vec![
            AppCommand::ApplyDataset { source, blockfaces },
            AppCommand::FitToDataset,
        ],
        AppIntent::DatasetLoadFailed { message } => {
            vec![AppCommand::ReportDatasetError { message }]
        }
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportSegments { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::FitToDatasetRequested => vec![AppCommand::FitToDataset],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::BlockfaceClicked { world_pos } => {
            let viewport_height = f64::from(state.view.viewport_size[1]);
            let max_distance = state.view.camera.pick_radius_world(
                viewport_height,
                f64::from(state.options.selection_pick_radius_px),
            );
            vec![AppCommand::SelectBlockfaceAt {
                world_pos,
                max_distance,
            }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::EditorModeChanged { mode } => vec![
            AppCommand::CloseLabelMenu,
            AppCommand::CloseNumberPad,
            AppCommand::SetEditorMode { mode },
        ],
        AppIntent::SegmentTypeChanged { index, kind } => vec![
            AppCommand::CloseLabelMenu,
            AppCommand::DispatchCurbAction {
                action: CurbAction::UpdateSegmentType { index, kind },
            },
        ],
        AppIntent::AddSegmentRequested { index } => vec![AppCommand::DispatchCurbAction {
            action: CurbAction::AddSegment {
                index,
                kind: NEW_SEGMENT_KIND,
                length: state.options.default_add_length,
            },
        }],
        AppIntent::InsertLeftRequested { index } => vec![
            AppCommand::CloseLabelMenu,
            AppCommand::DispatchCurbAction {
                action: CurbAction::InsertSegmentLeft {
                    index,
                    kind: NEW_SEGMENT_KIND,
                    length: state.options.default_add_length,
                },
            },
        ],
        AppIntent::LabelMenuToggled { index } => vec![AppCommand::ToggleLabelMenu { index }],
        AppIntent::LabelMenuClosed => vec![AppCommand::CloseLabelMenu],
        AppIntent::StripPointer {
            event,
            strip_height,
        } => vec![AppCommand::HandleStripPointer {
            event,
            strip_height,
        }],
        AppIntent::NumberPadOpened { index, field } => vec![
            AppCommand::CloseLabelMenu,
            AppCommand::OpenNumberPad { index, field },
        ],
        AppIntent::NumberPadConfirmed => vec![AppCommand::ConfirmNumberPad],
        AppIntent::NumberPadCancelled => vec![AppCommand::CloseNumberPad],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
