/// Attempts a student is allowed on a quiz. Fixed policy, not read from the quiz.
pub const ATTEMPTS_MAX: u8 = 3;

/// Remaining attempts once a latest attempt is known. This does not count the
/// attempt history; only the presence of a latest attempt matters.
pub const ATTEMPTS_LEFT_AFTER_SUBMISSION: u8 = 2;

/// Upper bound of the score scale.
pub const SCORE_SCALE_MAX: f64 = 10.0;

/// Scores at or above this value pass (50% of the scale).
pub const PASS_THRESHOLD: f64 = 5.0;

pub const DEFAULT_DURATION_MINUTES: u32 = 30;
