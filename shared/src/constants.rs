pub const FULL_TURN: f64 = 360.0;
/// The pointer sits at the top of the wheel; wedge angles are measured clockwise from it.
pub const POINTER_ANGLE: f64 = 0.0;

pub const DEFAULT_SPINS: u32 = 5;
pub const DEFAULT_JITTER_RATIO: f64 = 0.1;
pub const DEFAULT_SPIN_DURATION_MS: u32 = 5000;
pub const RESULT_STORAGE_KEY: &str = "prize_result";

pub const PERCENT_SCALE: f64 = 100.0;

pub const SPIN_LABEL: &str = "Spin";
pub const SPINNING_LABEL: &str = "Spinning...";
pub const ALREADY_SPUN_LABEL: &str = "Already spun";
pub const ONE_SPIN_HINT: &str = "One spin per visitor";
pub const RESULT_SAVED_HINT: &str = "Your result has been saved";
pub const WHEEL_UNAVAILABLE_ERROR: &str = "The prize wheel is unavailable right now";
