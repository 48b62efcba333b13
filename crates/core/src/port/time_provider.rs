// Time Provider Port (for testability)

use chrono::NaiveDate;

/// Calendar source interface (allows pinning the date in tests)
pub trait TimeProvider: Send + Sync {
    /// Current calendar date in local time
    fn today(&self) -> NaiveDate;
}

/// System clock provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Provider pinned to a fixed date, for deterministic reference codes in
/// tests
pub struct FixedTimeProvider(pub NaiveDate);

impl TimeProvider for FixedTimeProvider {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
