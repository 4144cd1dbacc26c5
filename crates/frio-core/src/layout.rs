//! Registered source layouts and corridor-label resolution.
//!
//! Each monitoring export variant is one table entry: the corridor labels
//! that select it, where its header row sits, and how its column titles map
//! onto the canonical schema. Supporting a new variant means adding a new
//! entry, not new code.

use crate::schema::Field;

/// Export variants produced by the monitoring equipment. The numbering
/// follows the vendor's own layout tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Type1,
    Type2,
    Type8,
}

/// Static description of one source column arrangement.
#[derive(Debug)]
pub struct LayoutDefinition {
    pub kind: LayoutKind,
    /// Corridor labels (as read from the metadata cell) that select this
    /// layout. Labels are unique across all registered layouts.
    pub corridor_labels: &'static [&'static str],
    /// 1-based row number of the header row; rows above it hold metadata.
    pub header_row: u32,
    /// 0-based (row, column) of the metadata cell holding the corridor label.
    pub corridor_cell: (u32, u32),
    /// Source column title -> canonical field. Fields without an entry stay
    /// null for every row of a file using this layout.
    pub column_mapping: &'static [(&'static str, Field)],
}

/// Metadata cell shared by every registered layout (B1). It has to be read
/// before the layout itself is known.
pub const CORRIDOR_CELL: (u32, u32) = (0, 1);

const TYPE_1_LABELS: &[&str] = &[
    "Pasillo 1",
    "Pasillo 2",
    "Pasillo 4",
    "Pasillo 5",
    "Pasillo 7",
    "Pasillo 9",
    "Pasillo 10",
    "Pulmón",
    "Pasillo 18 RS 1",
    "Pasillo18 RS 2",
    "Pasillo 18 RS 4",
];

const TYPE_2_LABELS: &[&str] = &["Pasillo 3", "Pasillo 6", "Pasillo 18 RS 3"];

const TYPE_8_LABELS: &[&str] = &["Pasillo 8"];

const TYPE_1_MAPPING: &[(&str, Field)] = &[
    ("Fecha", Field::OriginalTimestamp),
    ("Temperatura Ambiente", Field::AmbientTemp),
    ("Temperatura Evaporador", Field::EvaporatorTemp),
    ("Setpoint", Field::Setpoint),
    ("Desvío relativo al Setpoint", Field::RelativeDeviation),
    ("Proceso actual", Field::CurrentProcess),
    ("Salida REFR", Field::OutputRefr),
    ("Salida FANS", Field::OutputFans),
    ("Salida DEFR", Field::OutputDefr),
];

const TYPE_2_MAPPING: &[(&str, Field)] = &[
    ("Fecha", Field::OriginalTimestamp),
    ("Ambiente", Field::AmbientTemp),
    ("Evaporador", Field::EvaporatorTemp),
    ("Setpoint actual", Field::Setpoint),
    ("Desvío relativo", Field::RelativeDeviation),
    ("Proceso actual", Field::CurrentProcess),
    ("Salida REFR", Field::OutputRefr),
    ("Salida FANS", Field::OutputFans),
    ("Salida DEFR", Field::OutputDefr),
];

// Type 8 exports carry no current-process column; the field stays null.
const TYPE_8_MAPPING: &[(&str, Field)] = &[
    ("Fecha", Field::OriginalTimestamp),
    ("Temperatura Ambiente", Field::AmbientTemp),
    ("Evaporador", Field::EvaporatorTemp),
    ("Setpoint actual", Field::Setpoint),
    ("Desvío relativo al Setpoint", Field::RelativeDeviation),
    ("Salida REFR", Field::OutputRefr),
    ("Salida FANS", Field::OutputFans),
    ("Salida DEFR", Field::OutputDefr),
];

static LAYOUTS: [LayoutDefinition; 3] = [
    LayoutDefinition {
        kind: LayoutKind::Type1,
        corridor_labels: TYPE_1_LABELS,
        header_row: 4,
        corridor_cell: CORRIDOR_CELL,
        column_mapping: TYPE_1_MAPPING,
    },
    LayoutDefinition {
        kind: LayoutKind::Type2,
        corridor_labels: TYPE_2_LABELS,
        header_row: 4,
        corridor_cell: CORRIDOR_CELL,
        column_mapping: TYPE_2_MAPPING,
    },
    LayoutDefinition {
        kind: LayoutKind::Type8,
        corridor_labels: TYPE_8_LABELS,
        header_row: 4,
        corridor_cell: CORRIDOR_CELL,
        column_mapping: TYPE_8_MAPPING,
    },
];

pub fn registered_layouts() -> &'static [LayoutDefinition] {
    &LAYOUTS
}

/// A static layout definition paired with the corridor label read from one
/// file. Created once per file; the label is stamped into every row.
#[derive(Debug, Clone)]
pub struct ResolvedLayout {
    pub layout: &'static LayoutDefinition,
    pub corridor: String,
}

/// Looks up the layout claiming the given corridor label. The label is
/// trimmed and compared exactly; the scan runs in declaration order and the
/// first match wins.
pub fn resolve(label: &str) -> Option<ResolvedLayout> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }
    for layout in &LAYOUTS {
        if layout.corridor_labels.contains(&trimmed) {
            return Some(ResolvedLayout {
                layout,
                corridor: trimmed.to_string(),
            });
        }
    }
    None
}
