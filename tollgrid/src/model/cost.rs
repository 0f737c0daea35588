use std::{cmp::Ordering, fmt::Display, ops::Add, str::FromStr};

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use super::TollError;

/// a distance or toll amount between two locations.
///
/// `Unreachable` stands in for "no known path" and sorts after every finite
/// value, so it can be used directly as the starting value of a shortest path
/// relaxation. it absorbs addition and scaling, which keeps it from turning
/// into NaN as it flows through averages and rate multipliers.
///
/// at a CSV boundary, finite values are plain numbers and `Unreachable` is
/// written as the token `inf`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cost {
    Finite(f64),
    Unreachable,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0.0);

    /// token used for [`Cost::Unreachable`] when serialized
    pub const UNREACHABLE_TOKEN: &'static str = "inf";

    /// wraps a float value, mapping positive infinity to [`Cost::Unreachable`].
    /// NaN and negative infinity have no meaning as a cost and are rejected.
    pub fn try_from_f64(value: f64) -> Result<Cost, TollError> {
        if value.is_nan() {
            Err(TollError::InvalidInput(String::from(
                "NaN is not a valid cost",
            )))
        } else if value == f64::INFINITY {
            Ok(Cost::Unreachable)
        } else if value == f64::NEG_INFINITY {
            Err(TollError::InvalidInput(String::from(
                "negative infinity is not a valid cost",
            )))
        } else {
            Ok(Cost::Finite(value))
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// the finite value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Cost::Finite(v) => Some(*v),
            Cost::Unreachable => None,
        }
    }

    /// the cost as a float, with `Unreachable` as positive infinity
    pub fn as_f64(&self) -> f64 {
        self.value().unwrap_or(f64::INFINITY)
    }

    pub fn scale(&self, factor: f64) -> Cost {
        match self {
            Cost::Finite(v) => Cost::Finite(v * factor),
            Cost::Unreachable => Cost::Unreachable,
        }
    }

    /// rounds a finite value to the given number of decimal places
    pub fn round_to(&self, decimals: i32) -> Cost {
        match self {
            Cost::Finite(v) => {
                let shift = 10f64.powi(decimals);
                Cost::Finite((v * shift).round() / shift)
            }
            Cost::Unreachable => Cost::Unreachable,
        }
    }

    /// true if this is a finite value within `[lower, upper]`. an unreachable
    /// cost is never within a band, even an unbounded one.
    pub fn within(&self, lower: f64, upper: f64) -> bool {
        match self {
            Cost::Finite(v) => lower <= *v && *v <= upper,
            Cost::Unreachable => false,
        }
    }

    /// arithmetic mean of a collection of costs. `None` when the collection is
    /// empty, `Unreachable` when any member is unreachable.
    pub fn mean<'a, I>(costs: I) -> Option<Cost>
    where
        I: IntoIterator<Item = &'a Cost>,
    {
        let mut count: usize = 0;
        let mut sum = Cost::ZERO;
        for cost in costs {
            count += 1;
            sum = sum + *cost;
        }
        match (count, sum) {
            (0, _) => None,
            (_, Cost::Unreachable) => Some(Cost::Unreachable),
            (n, Cost::Finite(total)) => Some(Cost::Finite(total / n as f64)),
        }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Unreachable,
        }
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b),
            (Cost::Finite(_), Cost::Unreachable) => Some(Ordering::Less),
            (Cost::Unreachable, Cost::Finite(_)) => Some(Ordering::Greater),
            (Cost::Unreachable, Cost::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{v}"),
            Cost::Unreachable => write!(f, "{}", Self::UNREACHABLE_TOKEN),
        }
    }
}

impl FromStr for Cost {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "inf" | "+inf" | "infinity" | "+infinity" | "unreachable" => Ok(Cost::Unreachable),
            _ => {
                let value = trimmed.parse::<f64>().map_err(|e| {
                    TollError::InvalidInput(format!("'{trimmed}' is not a cost: {e}"))
                })?;
                Cost::try_from_f64(value)
            }
        }
    }
}

impl Serialize for Cost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Cost::Finite(v) => serializer.serialize_f64(*v),
            Cost::Unreachable => serializer.serialize_str(Self::UNREACHABLE_TOKEN),
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cost_str: String = String::deserialize(deserializer)?;
        cost_str
            .parse::<Cost>()
            .map_err(|e| D::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Cost;

    #[test]
    fn test_unreachable_sorts_after_finite() {
        assert!(Cost::Finite(1e300) < Cost::Unreachable);
        assert!(Cost::Unreachable > Cost::ZERO);
        assert!(Cost::Finite(2.0) < Cost::Finite(3.0));
    }

    #[test]
    fn test_unreachable_absorbs_arithmetic() {
        assert_eq!(Cost::Finite(2.0) + Cost::Finite(3.0), Cost::Finite(5.0));
        assert_eq!(Cost::Finite(2.0) + Cost::Unreachable, Cost::Unreachable);
        assert_eq!(Cost::Unreachable.scale(0.7), Cost::Unreachable);
        assert_eq!(Cost::Unreachable.round_to(1), Cost::Unreachable);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("inf".parse::<Cost>().unwrap(), Cost::Unreachable);
        assert_eq!(" Infinity ".parse::<Cost>().unwrap(), Cost::Unreachable);
        assert_eq!("unreachable".parse::<Cost>().unwrap(), Cost::Unreachable);
        assert_eq!("9.7".parse::<Cost>().unwrap(), Cost::Finite(9.7));
        assert!("NaN".parse::<Cost>().is_err());
        assert!("-inf".parse::<Cost>().is_err());
        assert!("far".parse::<Cost>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for cost in [Cost::Finite(8.0), Cost::Finite(0.25), Cost::Unreachable] {
            assert_eq!(cost.to_string().parse::<Cost>().unwrap(), cost);
        }
    }

    #[test]
    fn test_mean() {
        let costs = [Cost::Finite(2.0), Cost::Finite(4.0)];
        assert_eq!(Cost::mean(&costs), Some(Cost::Finite(3.0)));
        let with_gap = [Cost::Finite(2.0), Cost::Unreachable];
        assert_eq!(Cost::mean(&with_gap), Some(Cost::Unreachable));
        let empty: &[Cost] = &[];
        assert_eq!(Cost::mean(empty), None);
    }

    #[test]
    fn test_within() {
        assert!(Cost::Finite(10.0).within(9.0, 11.0));
        assert!(Cost::Finite(9.0).within(9.0, 11.0));
        assert!(!Cost::Finite(11.5).within(9.0, 11.0));
        assert!(!Cost::Unreachable.within(f64::NEG_INFINITY, f64::INFINITY));
    }
}
