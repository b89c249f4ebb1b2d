use chrono::{DateTime, FixedOffset, Offset, Utc};

/// JST offset from UTC in seconds (UTC+9)
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// JST as a fixed offset, or UTC if the offset were ever out of range
fn jst_offset() -> FixedOffset {
    match FixedOffset::east_opt(JST_OFFSET_SECONDS) {
        Some(offset) => offset,
        None => Utc.fix(),
    }
}

/// Get current time in JST
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst_offset())
}
