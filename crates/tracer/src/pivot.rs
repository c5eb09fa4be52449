//! Pivot selection strategies for the QuickSort tracer.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::TracerError;

/// How QuickSort picks the pivot of a sub-array `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotMethod {
    /// `high`.
    #[default]
    Last,
    /// `low`.
    First,
    /// `(low + high) / 2`.
    Middle,
    /// Uniform in `[low, high]`, drawn from the injected RNG.
    Random,
    /// Median of `arr[low]`, `arr[mid]`, `arr[high]`.
    Median,
}

impl PivotMethod {
    pub const ALL: [PivotMethod; 5] = [
        PivotMethod::Last,
        PivotMethod::First,
        PivotMethod::Middle,
        PivotMethod::Random,
        PivotMethod::Median,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Last => "last",
            Self::First => "first",
            Self::Middle => "middle",
            Self::Random => "random",
            Self::Median => "median",
        }
    }

    /// Lenient parse: unrecognised names fall back to [`PivotMethod::Last`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(method = name, "unknown pivot method, falling back to 'last'");
            Self::Last
        })
    }

    /// Index of the pivot for `array[low..=high]`.
    pub fn choose<R: Rng + ?Sized>(self, array: &[f64], low: usize, high: usize, rng: &mut R) -> usize {
        match self {
            Self::Last => high,
            Self::First => low,
            Self::Middle => low + (high - low) / 2,
            Self::Random => rng.gen_range(low..=high),
            Self::Median => median_of_three(array, low, high),
        }
    }
}

impl fmt::Display for PivotMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotMethod {
    type Err = TracerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(Self::Last),
            "first" => Ok(Self::First),
            "middle" => Ok(Self::Middle),
            "random" => Ok(Self::Random),
            "median" => Ok(Self::Median),
            _ => Err(TracerError::UnknownPivotMethod(s.to_owned())),
        }
    }
}

/// Index among `low`, `mid` and `high` whose value is the median of the
/// three, found by pairwise comparison.
pub fn median_of_three(array: &[f64], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;
    let (a, b, c) = (array[low], array[mid], array[high]);

    if a > b {
        if b > c {
            mid
        } else if a > c {
            high
        } else {
            low
        }
    } else if a > c {
        low
    } else if b > c {
        high
    } else {
        mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn median_picks_middle_value() {
        assert_eq!(median_of_three(&[1.0, 2.0, 3.0], 0, 2), 1);
        assert_eq!(median_of_three(&[3.0, 1.0, 2.0], 0, 2), 2);
        assert_eq!(median_of_three(&[2.0, 3.0, 1.0], 0, 2), 0);
        assert_eq!(median_of_three(&[3.0, 2.0, 1.0], 0, 2), 1);
        assert_eq!(median_of_three(&[2.0, 1.0, 3.0], 0, 2), 0);
        assert_eq!(median_of_three(&[1.0, 3.0, 2.0], 0, 2), 2);
    }

    #[test]
    fn middle_uses_integer_midpoint() {
        let mut rng = StdRng::seed_from_u64(0);
        let array = [0.0; 8];
        assert_eq!(PivotMethod::Middle.choose(&array, 2, 7, &mut rng), 4);
        assert_eq!(PivotMethod::Middle.choose(&array, 3, 3, &mut rng), 3);
    }

    #[test]
    fn random_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let array = [0.0; 10];
        for _ in 0..100 {
            let idx = PivotMethod::Random.choose(&array, 3, 6, &mut rng);
            assert!((3..=6).contains(&idx));
        }
    }

    #[test]
    fn unknown_name_falls_back_to_last() {
        assert_eq!(PivotMethod::from_name("median"), PivotMethod::Median);
        assert_eq!(PivotMethod::from_name("sideways"), PivotMethod::Last);
        assert!(matches!(
            "sideways".parse::<PivotMethod>(),
            Err(TracerError::UnknownPivotMethod(name)) if name == "sideways"
        ));
    }

    #[test]
    fn names_round_trip() {
        for method in PivotMethod::ALL {
            assert_eq!(method.name().parse::<PivotMethod>(), Ok(method));
        }
    }
}
