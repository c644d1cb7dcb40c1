/// Points for a win under the standard league rule.
pub const DEFAULT_WIN_POINTS: u32 = 2;

/// Points each side takes from a tie.
pub const DEFAULT_TIE_POINTS: u32 = 1;

/// Points each side takes from an abandoned match.
/// Same as a tie, but tracked in its own column so the table shows
/// how many games were lost to weather.
pub const DEFAULT_NO_RESULT_POINTS: u32 = 1;
