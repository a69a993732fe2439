//! Zustand des Zahlenfelds für Länge und Start in der Tabelle.

use crate::app::curb_store::{CurbAction, CurbState};

/// Maximale Anzahl eingegebener Zeichen.
const MAX_INPUT_LEN: usize = 9;

/// Welche Zelle bearbeitet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPadField {
    /// Segmentlänge
    Length,
    /// Startposition
    Start,
}

/// Taste des Zahlenfelds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPadKey {
    /// Ziffer 0-9
    Digit(u8),
    /// Dezimalpunkt (höchstens einer)
    Decimal,
    /// Letztes Zeichen löschen
    Backspace,
    /// Eingabe leeren
    Clear,
}

/// Offenes Zahlenfeld mit Eingabepuffer und erlaubtem Bereich
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPadState {
    /// Zeile (Segment-Index)
    pub index: usize,
    /// Bearbeitete Zelle
    pub field: NumberPadField,
    /// Eingabepuffer
    pub buffer: String,
    /// Untergrenze (inklusiv)
    pub min: f64,
    /// Obergrenze (inklusiv)
    pub max: f64,
    /// Validierungsfehler der letzten Bestätigung
    pub error: Option<String>,
    /// Erste Eingabe ersetzt den vorbelegten Wert
    fresh: bool,
}

impl NumberPadState {
    /// Öffnet das Zahlenfeld für eine Zelle; `None` für nicht editierbare Zellen.
    ///
    /// Länge: `0 ..= aktuelle Länge + Unknown`, beim `Unknown`-Segment selbst
    /// nicht editierbar. Start: `0 ..= Blockseitenlänge`, in Zeile 0 nicht
    /// editierbar.
    pub fn open(curb: &CurbState, index: usize, field: NumberPadField) -> Option<Self> {
        let segment = curb.segments.get(index)?;
        let (value, min, max) = match field {
            NumberPadField::Length => {
                // Rest-Puffer ergibt sich aus den übrigen Segmenten
                if segment.kind.is_unknown() {
                    return None;
                }
                (segment.length, 0.0, segment.length + curb.unknown_length())
            }
            NumberPadField::Start => {
                if index == 0 {
                    return None;
                }
                (curb.starts()[index], 0.0, curb.blockface_length)
            }
        };

        Some(Self {
            index,
            field,
            buffer: format_length(value),
            min,
            max,
            error: None,
            fresh: true,
        })
    }

    /// Verarbeitet eine Taste.
    pub fn press(&mut self, key: NumberPadKey) {
        self.error = None;
        let fresh = std::mem::replace(&mut self.fresh, false);

        match key {
            NumberPadKey::Digit(digit) if digit <= 9 => {
                if fresh {
                    self.buffer.clear();
                }
                if self.buffer.len() < MAX_INPUT_LEN {
                    if self.buffer == "0" {
                        self.buffer.clear();
                    }
                    self.buffer.push(char::from(b'0' + digit));
                }
            }
            NumberPadKey::Digit(_) => {}
            NumberPadKey::Decimal => {
                if fresh {
                    self.buffer.clear();
                }
                if !self.buffer.contains('.') && self.buffer.len() < MAX_INPUT_LEN {
                    if self.buffer.is_empty() {
                        self.buffer.push('0');
                    }
                    self.buffer.push('.');
                }
            }
            NumberPadKey::Backspace => {
                self.buffer.pop();
            }
            NumberPadKey::Clear => self.buffer.clear(),
        }
    }

    /// Prüft den Puffer gegen den Bereich; setzt bei Fehler `error`.
    pub fn validate(&mut self) -> Option<f64> {
        let Ok(value) = self.buffer.parse::<f64>() else {
            self.error = Some("Bitte eine Zahl eingeben".to_string());
            return None;
        };
        if value < self.min || value > self.max + 1e-9 {
            self.error = Some(format!(
                "Wert muss zwischen {} und {} liegen",
                format_length(self.min),
                format_length(self.max)
            ));
            return None;
        }
        self.error = None;
        Some(value)
    }

    /// Store-Aktion für einen bestätigten Wert.
    pub fn to_action(&self, value: f64) -> CurbAction {
        match self.field {
            NumberPadField::Length => CurbAction::UpdateSegmentLength {
                index: self.index,
                length: value,
            },
            NumberPadField::Start => CurbAction::UpdateStartPosition {
                index: self.index,
                start: value,
            },
        }
    }
}

/// Formatiert eine Länge mit höchstens einer Nachkommastelle.
pub fn format_length(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < 1e-9 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Segment, SegmentType};

    /// `[Parking:30, Unknown:100, Curb Cut:20]`, Gesamtlänge 150
    fn curb() -> CurbState {
        CurbState {
            segments: vec![
                Segment::new(SegmentType::Parking, 30.0, 0.1),
                Segment::new(SegmentType::Unknown, 100.0, 0.1),
                Segment::new(SegmentType::CurbCut, 20.0, 0.1),
            ],
            blockface_length: 150.0,
            blockface_id: Some("bf".into()),
        }
    }

    fn press_all(pad: &mut NumberPadState, keys: &[NumberPadKey]) {
        for &key in keys {
            pad.press(key);
        }
    }

    #[test]
    fn length_range_includes_unknown_remainder() {
        let pad = NumberPadState::open(&curb(), 0, NumberPadField::Length).unwrap();
        assert_eq!(pad.buffer, "30");
        assert_eq!(pad.min, 0.0);
        assert_eq!(pad.max, 130.0);
    }

    #[test]
    fn start_of_first_row_is_read_only() {
        assert!(NumberPadState::open(&curb(), 0, NumberPadField::Start).is_none());
        let pad = NumberPadState::open(&curb(), 2, NumberPadField::Start).unwrap();
        assert_eq!(pad.buffer, "130");
        assert_eq!(pad.max, 150.0);
    }

    #[test]
    fn first_key_replaces_prefilled_value() {
        let mut pad = NumberPadState::open(&curb(), 0, NumberPadField::Length).unwrap();
        press_all(
            &mut pad,
            &[
                NumberPadKey::Digit(4),
                NumberPadKey::Digit(2),
                NumberPadKey::Decimal,
                NumberPadKey::Digit(5),
            ],
        );
        assert_eq!(pad.buffer, "42.5");
    }

    #[test]
    fn only_one_decimal_point_is_accepted() {
        let mut pad = NumberPadState::open(&curb(), 0, NumberPadField::Length).unwrap();
        press_all(
            &mut pad,
            &[
                NumberPadKey::Decimal,
                NumberPadKey::Digit(5),
                NumberPadKey::Decimal,
                NumberPadKey::Digit(1),
            ],
        );
        assert_eq!(pad.buffer, "0.51");
    }

    #[test]
    fn backspace_and_clear_edit_buffer() {
        let mut pad = NumberPadState::open(&curb(), 0, NumberPadField::Length).unwrap();
        pad.press(NumberPadKey::Backspace);
        assert_eq!(pad.buffer, "3");
        pad.press(NumberPadKey::Clear);
        assert!(pad.buffer.is_empty());
    }

    #[test]
    fn confirm_rejects_out_of_range_value() {
        let mut pad = NumberPadState::open(&curb(), 0, NumberPadField::Length).unwrap();
        press_all(
            &mut pad,
            &[
                NumberPadKey::Digit(1),
                NumberPadKey::Digit(3),
                NumberPadKey::Digit(1),
            ],
        );
        assert_eq!(pad.validate(), None);
        assert_eq!(
            pad.error.as_deref(),
            Some("Wert muss zwischen 0 und 130 liegen")
        );

        pad.press(NumberPadKey::Backspace);
        assert!(pad.error.is_none());
        assert_eq!(pad.validate(), Some(13.0));
    }

    #[test]
    fn unknown_length_is_read_only() {
        assert!(NumberPadState::open(&curb(), 1, NumberPadField::Length).is_none());
        // Start des Unknown bleibt editierbar
        assert!(NumberPadState::open(&curb(), 1, NumberPadField::Start).is_some());
    }

    #[test]
    fn confirm_rejects_empty_input() {
        let mut pad = NumberPadState::open(&curb(), 0, NumberPadField::Length).unwrap();
        pad.press(NumberPadKey::Clear);
        assert_eq!(pad.validate(), None);
        assert!(pad.error.is_some());
    }

    #[test]
    fn confirmed_value_maps_to_store_action() {
        let pad = NumberPadState::open(&curb(), 2, NumberPadField::Start).unwrap();
        assert!(matches!(
            pad.to_action(120.0),
            CurbAction::UpdateStartPosition { index: 2, start } if start == 120.0
        ));
    }

    #[test]
    fn format_length_trims_whole_numbers() {
        assert_eq!(format_length(20.0), "20");
        assert_eq!(format_length(20.04), "20");
        assert_eq!(format_length(33.3), "33.3");
    }
}
