/// Axis bounds on unsigned degree magnitudes
pub const LAT_MAX_MAGNITUDE: f64 = 90.0;
pub const LONG_MAX_MAGNITUDE: f64 = 180.0;

/// Token grammar
pub const MAX_FIELDS: usize = 3;
pub const DEGREE_MARKS: [char; 3] = ['°', 'º', '˚'];
pub const MINUTE_MARKS: [char; 3] = ['\'', '′', '’'];
pub const SECOND_MARKS: [char; 3] = ['"', '″', '”'];
pub const POSITIVE_CARDINALS: [char; 2] = ['N', 'E'];
pub const NEGATIVE_CARDINALS: [char; 2] = ['S', 'W'];

/// Output precision
pub const DEFAULT_PRECISION: usize = 5;
pub const MIN_PRECISION: usize = 1;
pub const MAX_PRECISION: usize = 15;
pub const SECONDS_DECIMAL_PLACES: i32 = 2;
pub const MINUTES_DECIMAL_PLACES: i32 = 4;

pub const MINUTES_PER_DEGREE: f64 = 60.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "COORDS";
