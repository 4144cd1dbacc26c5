use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical output field. The declaration order is the literal column order
/// of the consolidated output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Corridor,
    Year,
    Month,
    Day,
    TimeBucket,
    OriginalTimestamp,
    AmbientTemp,
    EvaporatorTemp,
    Setpoint,
    RelativeDeviation,
    CurrentProcess,
    OutputRefr,
    OutputFans,
    OutputDefr,
}

pub const FIELD_COUNT: usize = 14;

pub const OUTPUT_FIELDS: [Field; FIELD_COUNT] = [
    Field::Corridor,
    Field::Year,
    Field::Month,
    Field::Day,
    Field::TimeBucket,
    Field::OriginalTimestamp,
    Field::AmbientTemp,
    Field::EvaporatorTemp,
    Field::Setpoint,
    Field::RelativeDeviation,
    Field::CurrentProcess,
    Field::OutputRefr,
    Field::OutputFans,
    Field::OutputDefr,
];

impl Field {
    /// Column title as written to the consolidated file. The titles are the
    /// ones downstream consumers of the plant exports already ingest.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Corridor => "Pasillo",
            Field::Year => "Anio",
            Field::Month => "Mes",
            Field::Day => "Dia",
            Field::TimeBucket => "Hora_10min",
            Field::OriginalTimestamp => "FechaHora_Original",
            Field::AmbientTemp => "Temp_Ambiente",
            Field::EvaporatorTemp => "Temp_Evaporador",
            Field::Setpoint => "Setpoint",
            Field::RelativeDeviation => "Desvio_Relativo",
            Field::CurrentProcess => "Proceso_Actual",
            Field::OutputRefr => "Salida_REFR",
            Field::OutputFans => "Salida_FANS",
            Field::OutputDefr => "Salida_DEFR",
        }
    }

    /// Position of the field in the output column order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_header(name: &str) -> Option<Field> {
        HEADER_INDEX.get(name).copied()
    }
}

static HEADER_INDEX: Lazy<HashMap<&'static str, Field>> =
    Lazy::new(|| OUTPUT_FIELDS.iter().map(|f| (f.header(), *f)).collect());

pub fn output_headers() -> [&'static str; FIELD_COUNT] {
    OUTPUT_FIELDS.map(|f| f.header())
}

/// Fields coerced to a uniform float representation after mapping.
pub fn numeric_fields() -> &'static [Field] {
    use Field::*;
    &[
        AmbientTemp,
        EvaporatorTemp,
        Setpoint,
        RelativeDeviation,
        CurrentProcess,
    ]
}
