/// Assumed nominal annual return used by every projection.
pub const ANNUAL_RETURN_RATE: f64 = 0.05;

/// Fixed contributions are entered per month and annualized with this factor.
pub const PAY_PERIODS_PER_YEAR: f64 = 12.0;

/// Upper bound for a percentage-of-salary contribution.
pub const MAX_CONTRIBUTION_PERCENT: f64 = 100.0;

/// Oldest age accepted for the current or retirement age.
pub const MAX_AGE: i32 = 150;

/// Type tag of history entries that count toward year-to-date savings
pub const CONTRIBUTION_ENTRY_TYPE: &str = "contribution";

// Settings used when nothing has been saved yet.
pub const DEFAULT_CONTRIBUTION_VALUE: f64 = 250.0;
pub const DEFAULT_AGE: i32 = 30;
pub const DEFAULT_SALARY: f64 = 80_000.0;
pub const DEFAULT_RETIREMENT_AGE: i32 = 65;
