//! Value objects for the hotel domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Money amount, stored as minor currency units (100 per whole unit).
///
/// Prices are never negative, so the amount is unsigned. Room prices are
/// usually quoted in whole units; build those with [`Money::from_major`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    minor: u64,
}

impl Money {
    /// Creates a money amount from minor units.
    pub fn from_minor(minor: u64) -> Self {
        Self { minor }
    }

    /// Creates a money amount from whole currency units, saturating at
    /// `u64::MAX` minor units.
    pub fn from_major(major: u64) -> Self {
        Self {
            minor: major.saturating_mul(100),
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { minor: 0 }
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Returns the whole-unit portion.
    pub fn major(&self) -> u64 {
        self.minor / 100
    }

    /// Returns the remainder after whole units.
    pub fn minor_part(&self) -> u64 {
        self.minor % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Multiplies by a count of nights, saturating at `u64::MAX`.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            minor: self.minor.saturating_mul(u64::from(quantity)),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.major(), self.minor_part())
    }
}

impl From<u64> for Money {
    fn from(minor: u64) -> Self {
        Self { minor }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            minor: self.minor.saturating_add(rhs.minor),
        }
    }
}

/// Half-open stay interval `[check_in, check_out)`.
///
/// The check-out day is not occupied, so a stay ending on the 28th and one
/// starting on the 28th share a boundary without overlapping.
///
/// Deserialization goes through [`StayRange::new`], so an empty or inverted
/// range is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StayRangeDe")]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct StayRangeDe {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<StayRangeDe> for StayRange {
    type Error = ValidationError;

    fn try_from(value: StayRangeDe) -> Result<Self, Self::Error> {
        StayRange::new(value.check_in, value.check_out)
    }
}

impl StayRange {
    /// Creates a stay range, rejecting empty or inverted intervals.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ValidationError> {
        if check_in >= check_out {
            return Err(ValidationError::InvalidDateRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// First night of the stay.
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Departure day (exclusive).
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights covered by the range. Always at least one.
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Returns true if the two half-open ranges share at least one night.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Returns true if `date` is a night inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }
}

impl std::fmt::Display for StayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}
