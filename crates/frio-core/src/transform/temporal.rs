use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

use crate::model::{CellValue, StandardizedRow};
use crate::schema::Field;

static TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Populates Year/Month/Day and the 10-minute time bucket from the row's
/// original timestamp. Returns false when the timestamp cell cannot be
/// interpreted; such a row must be dropped by the caller.
pub fn derive_calendar_fields(row: &mut StandardizedRow) -> bool {
    let Some(dt) = parse_timestamp_cell(row.get(Field::OriginalTimestamp)) else {
        return false;
    };
    let Some(bucket) = bucket_10min(dt) else {
        return false;
    };

    // Year/Month/Day follow the bucketed datetime, so a carry past midnight
    // rolls the date with it. Without a carry the two dates are identical.
    row.set(Field::Year, CellValue::Int(i64::from(bucket.year())));
    row.set(Field::Month, CellValue::Int(i64::from(bucket.month())));
    row.set(Field::Day, CellValue::Int(i64::from(bucket.day())));
    row.set(
        Field::TimeBucket,
        CellValue::Text(bucket.format("%H:%M").to_string()),
    );
    true
}

fn parse_timestamp_cell(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Text(raw) => {
            let trimmed = raw.trim();
            TIMESTAMP_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        }
        _ => None,
    }
}

/// Minute rounded to the nearest multiple of ten, ties rounding up. A result
/// of 60 carries into the next hour through ordinary date arithmetic, so the
/// roll cascades across day, month, and year boundaries. Seconds and
/// sub-seconds are zeroed; the rounding decision uses the original minute.
fn bucket_10min(dt: NaiveDateTime) -> Option<NaiveDateTime> {
    let rounded = (dt.minute() + 5) / 10 * 10;
    let floor = dt.with_minute(0)?.with_second(0)?.with_nanosecond(0)?;
    if rounded == 60 {
        Some(floor + Duration::hours(1))
    } else {
        floor.with_minute(rounded)
    }
}
