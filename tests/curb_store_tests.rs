//! Integrationstests für den Bordstein-Store über die öffentliche API.

use approx::assert_relative_eq;
use row_canvas::app::curb_store::SegmentReplacement;
use row_canvas::app::gesture::swap_updater;
use row_canvas::{reduce, CurbAction, CurbState, Segment, SegmentError, SegmentType};

const PRECISION: f64 = 0.1;

/// `[Parking:30, Unknown:100, Curb Cut:20]`, Gesamtlänge 150
fn example_state() -> CurbState {
    CurbState {
        segments: vec![
            Segment::new(SegmentType::Parking, 30.0, PRECISION),
            Segment::new(SegmentType::Unknown, 100.0, PRECISION),
            Segment::new(SegmentType::CurbCut, 20.0, PRECISION),
        ],
        blockface_length: 150.0,
        blockface_id: Some("bf-example".into()),
    }
}

fn lengths(state: &CurbState) -> Vec<f64> {
    state.segments.iter().map(|s| s.length).collect()
}

fn kinds(state: &CurbState) -> Vec<SegmentType> {
    state.segments.iter().map(|s| s.kind).collect()
}

#[test]
fn test_growing_a_segment_takes_space_from_unknown() {
    let next = reduce(
        &example_state(),
        CurbAction::UpdateSegmentLength {
            index: 0,
            length: 40.0,
        },
        PRECISION,
    )
    .expect("Änderung sollte gültig sein");

    assert_eq!(lengths(&next), vec![40.0, 90.0, 20.0]);
    assert_eq!(next.blockface_id.as_deref(), Some("bf-example"));
}

#[test]
fn test_oversized_add_is_clamped_to_unknown_remainder() {
    let next = reduce(
        &example_state(),
        CurbAction::AddSegment {
            index: 0,
            kind: SegmentType::Loading,
            length: 150.0,
        },
        PRECISION,
    )
    .expect("Einfügen sollte gültig sein");

    assert_eq!(
        kinds(&next),
        vec![
            SegmentType::Parking,
            SegmentType::Loading,
            SegmentType::Unknown,
            SegmentType::CurbCut,
        ]
    );
    assert_eq!(lengths(&next), vec![30.0, 100.0, 0.0, 20.0]);
}

#[test]
fn test_rejected_action_reports_error_and_keeps_input() {
    let state = example_state();
    let err = reduce(
        &state,
        CurbAction::UpdateSegmentLength {
            index: 2,
            length: 200.0,
        },
        PRECISION,
    )
    .expect_err("Unknown würde negativ");

    assert_eq!(err, SegmentError::InsufficientSpace);
    assert_eq!(err.to_string(), "Insufficient space in Unknown segment");
    assert_eq!(state, example_state());
}

#[test]
fn test_insert_left_of_unknown_target() {
    let next = reduce(
        &example_state(),
        CurbAction::InsertSegmentLeft {
            index: 2,
            kind: SegmentType::NoParking,
            length: 15.0,
        },
        PRECISION,
    )
    .expect("Einfügen sollte gültig sein");

    assert_eq!(next.segments[2].kind, SegmentType::NoParking);
    assert_eq!(lengths(&next), vec![30.0, 85.0, 15.0, 20.0]);
}

#[test]
fn test_start_position_moves_delta_between_predecessor_and_unknown() {
    let mut state = example_state();
    // Unknown ans Ende, damit der Vorgänger von Index 2 ein normales Segment ist
    state.segments.swap(1, 2);

    let next = reduce(
        &state,
        CurbAction::UpdateStartPosition {
            index: 2,
            start: 60.0,
        },
        PRECISION,
    )
    .expect("Verschieben sollte gültig sein");

    assert_eq!(lengths(&next), vec![30.0, 30.0, 90.0]);
    assert_relative_eq!(next.starts()[2], 60.0);
}

#[test]
fn test_start_of_first_segment_is_rejected() {
    let err = reduce(
        &example_state(),
        CurbAction::UpdateStartPosition {
            index: 0,
            start: 5.0,
        },
        PRECISION,
    )
    .expect_err("Index 0 hat keinen Vorgänger");

    assert_eq!(err, SegmentError::FirstSegmentStart);
}

#[test]
fn test_replace_with_second_unknown_is_rejected() {
    let mut segments = example_state().segments;
    segments[0].kind = SegmentType::Unknown;

    let err = reduce(
        &example_state(),
        CurbAction::ReplaceSegments(SegmentReplacement::Literal(segments)),
        PRECISION,
    )
    .expect_err("zwei Unknown-Segmente");

    assert_eq!(err, SegmentError::MultipleUnknownSegments);
}

#[test]
fn test_nan_length_is_rejected_and_unknown_kept() {
    let state = example_state();
    let err = reduce(
        &state,
        CurbAction::UpdateSegmentLength {
            index: 0,
            length: f64::NAN,
        },
        PRECISION,
    )
    .expect_err("NaN ist keine Länge");

    assert_eq!(err, SegmentError::NonFiniteLength);
    assert_eq!(state.unknown_length(), 100.0);
}

#[test]
fn test_swap_updater_reorders_without_changing_lengths() {
    let state = example_state();
    let next = reduce(
        &state,
        CurbAction::ReplaceSegments(SegmentReplacement::Updater(swap_updater(0, 2))),
        PRECISION,
    )
    .expect("Tausch sollte gültig sein");

    assert_eq!(next.segments[0].id, state.segments[2].id);
    assert_eq!(next.segments[2].id, state.segments[0].id);
    assert_eq!(lengths(&next).iter().sum::<f64>(), 150.0);
}

#[test]
fn test_initialize_creates_single_unknown_not_exceeding_length() {
    let next = reduce(
        &CurbState::default(),
        CurbAction::InitializeSegments {
            blockface_id: "bf-new".into(),
            length: 288.46,
            seed: false,
        },
        PRECISION,
    )
    .expect("Initialisierung sollte gültig sein");

    assert_eq!(kinds(&next), vec![SegmentType::Unknown]);
    assert_relative_eq!(next.segments[0].length, 288.4, epsilon = 1e-9);
    assert!(next.is_active());
}

#[test]
fn test_seeded_initialize_keeps_sum_within_length() {
    let next = reduce(
        &CurbState::default(),
        CurbAction::InitializeSegments {
            blockface_id: "bf-seed".into(),
            length: 123.45,
            seed: true,
        },
        PRECISION,
    )
    .expect("Initialisierung sollte gültig sein");

    assert_eq!(next.unknown_index(), Some(next.segments.len() - 1));
    let sum: f64 = lengths(&next).iter().sum();
    assert!(sum <= 123.45 + 1e-9);
}
