//! Kollisionsfreies Layout der schwebenden Segment-Labels.
//!
//! Labels sitzen vertikal auf der Mitte ihres Segments. Überlappen sie,
//! werden sie in Spalten gleicher Breite nebeneinander gestaffelt.

/// Gemessene Label-Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    /// Gewünschte vertikale Mitte (Segment-Mitte) in Pixeln
    pub anchor_y: f32,
    /// Gemessene Breite
    pub width: f32,
    /// Gemessene Höhe
    pub height: f32,
}

/// Berechnete Position eines Labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Spalten-Index (0 = direkt neben dem Streifen)
    pub column: usize,
    /// Horizontaler Versatz relativ zur ersten Spalte
    pub x_offset: f32,
    /// Oberkante in Pixeln
    pub top: f32,
}

/// Ordnet jedem Label eine Spalte zu, sodass sich Labels derselben Spalte
/// nicht überlappen. Ergebnis in Eingabe-Reihenfolge.
pub fn layout_labels(labels: &[LabelBox], gap: f32) -> Vec<LabelPlacement> {
    let column_width = labels.iter().map(|l| l.width).fold(0.0_f32, f32::max);

    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| labels[a].anchor_y.total_cmp(&labels[b].anchor_y));

    let mut column_bottoms: Vec<f32> = Vec::new();
    let mut placements = vec![
        LabelPlacement {
            column: 0,
            x_offset: 0.0,
            top: 0.0,
        };
        labels.len()
    ];

    for index in order {
        let label = labels[index];
        let top = label.anchor_y - label.height / 2.0;

        let column = match column_bottoms.iter().position(|&bottom| bottom + gap <= top) {
            Some(column) => column,
            None => {
                column_bottoms.push(f32::NEG_INFINITY);
                column_bottoms.len() - 1
            }
        };
        column_bottoms[column] = top + label.height;

        placements[index] = LabelPlacement {
            column,
            x_offset: column as f32 * (column_width + gap),
            top,
        };
    }

    placements
}
