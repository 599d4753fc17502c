/// Record identifier. Assigned by a store, unique within it.
pub type RecordId = u32;

/// Get the current UTC time as an RFC 3339 string with millisecond
/// precision and a `Z` suffix, e.g. `2024-03-01T09:30:00.000Z`.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
