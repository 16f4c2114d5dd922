//! Coupon payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard coupon payment schedules.
///
/// The pricer itself takes the raw number of payments per year; this enum
/// names the schedules callers normally use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year) - most common for US bonds
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// All standard schedules, shortest payment count first.
    pub const ALL: [Frequency; 4] = [
        Frequency::Annual,
        Frequency::SemiAnnual,
        Frequency::Quarterly,
        Frequency::Monthly,
    ];

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Looks up the schedule paying `n` coupons per year.
    ///
    /// Returns `None` for non-standard counts (including zero).
    #[must_use]
    pub fn from_periods_per_year(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.periods_per_year() == n)
    }
}

impl From<Frequency> for u32 {
    fn from(freq: Frequency) -> Self {
        freq.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_from_periods_per_year() {
        assert_eq!(Frequency::from_periods_per_year(2), Some(Frequency::SemiAnnual));
        assert_eq!(Frequency::from_periods_per_year(12), Some(Frequency::Monthly));
        assert_eq!(Frequency::from_periods_per_year(0), None);
        assert_eq!(Frequency::from_periods_per_year(3), None);
    }

    #[test]
    fn test_default_is_semi_annual() {
        assert_eq!(u32::from(Frequency::default()), 2);
        assert_eq!(Frequency::default().to_string(), "Semi-Annual");
    }
}
