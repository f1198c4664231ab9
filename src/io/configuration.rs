//! Runtime constants and safety limits

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas extent along either axis, in pixels
pub const MAX_CANVAS_DIMENSION: u64 = 65_536;

// Output settings
/// Suffix appended to the output name while encoding is in flight
pub const PARTIAL_OUTPUT_SUFFIX: &str = "part";
