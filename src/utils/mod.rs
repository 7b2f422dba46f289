/// Date formatting helpers
pub mod datetime;
/// Consistent-format log helpers
pub mod logging;
