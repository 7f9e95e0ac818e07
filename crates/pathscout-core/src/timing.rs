//! Randomized delays for pacing automated actions.
//!
//! A delay is configured per action under the `Timing` section of the
//! configuration document. Accepted shapes for an entry:
//!
//! - a number (`2`, `0.75`): fixed delay
//! - a range string (`"0.5-1.5"`)
//! - a comma separated pair (`"0.5,1.5"`)
//! - a single number as a string (`"2"`)
//!
//! Anything else, including a missing entry, samples from [`TimingBounds::DEFAULT`].

use crate::config::TIMING_SECTION;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

/// Inclusive bounds of a uniform delay distribution, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingBounds {
    pub min: f64,
    pub max: f64,
}

impl TimingBounds {
    /// Range used when an entry is missing or malformed
    pub const DEFAULT: TimingBounds = TimingBounds { min: 0.5, max: 1.5 };

    /// Bounds with both ends at the same value
    pub fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Interpret a `Timing` entry.
    ///
    /// Returns `None` for falsy entries (null, false, zero, empty string or
    /// collection) and for anything that does not parse into finite bounds.
    pub fn parse(value: &Value) -> Option<Self> {
        if is_falsy(value) {
            return None;
        }

        let (a, b) = match value {
            Value::Number(n) => {
                let v = n.as_f64()?;
                (v, v)
            }
            Value::Bool(true) => (1.0, 1.0),
            Value::String(s) => {
                if s.contains('-') {
                    parse_pair(s, '-')?
                } else if s.contains(',') {
                    parse_pair(s, ',')?
                } else {
                    let v = parse_number(s)?;
                    (v, v)
                }
            }
            _ => return None,
        };

        // Reversed ranges ("2-1") are accepted and normalized
        let bounds = Self {
            min: a.min(b),
            max: a.max(b),
        };

        // The span must be representable or sampling cannot stay in range
        if !(bounds.max - bounds.min).is_finite() {
            return None;
        }

        Some(bounds)
    }

    /// Bounds configured for `key`, or the default range
    pub fn resolve(config: &Value, key: &str) -> Self {
        let entry = config
            .get(TIMING_SECTION)
            .and_then(|timing| timing.get(key));

        match entry.and_then(Self::parse) {
            Some(bounds) => bounds,
            None => {
                if let Some(raw) = entry {
                    tracing::debug!("Unusable timing entry {}={}, using default range", key, raw);
                }
                Self::DEFAULT
            }
        }
    }

    /// Draw a delay uniformly from `[min, max]`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    /// Whether `value` lies inside the bounds
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for TimingBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Random delay in seconds for the `Timing[timing_key]` entry of `config`.
///
/// Never fails: missing or malformed entries sample from 0.5 to 1.5 seconds.
pub fn random_wait_time(config: &Value, timing_key: &str) -> f64 {
    random_wait_time_with(&mut rand::thread_rng(), config, timing_key)
}

/// Same as [`random_wait_time`] with a caller supplied random source
pub fn random_wait_time_with<R: Rng + ?Sized>(rng: &mut R, config: &Value, timing_key: &str) -> f64 {
    TimingBounds::resolve(config, timing_key).sample(rng)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn parse_pair(s: &str, separator: char) -> Option<(f64, f64)> {
    let mut parts = s.split(separator);
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    Some((parse_number(a)?, parse_number(b)?))
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_fixed_range_string_is_exact() {
        let config = json!({"Timing": {"delay": "1.0-1.0"}});
        for _ in 0..20 {
            assert_eq!(random_wait_time(&config, "delay"), 1.0);
        }
    }

    #[test]
    fn test_integer_entry_is_exact() {
        let config = json!({"Timing": {"delay": 2}});
        for _ in 0..20 {
            assert_eq!(random_wait_time(&config, "delay"), 2.0);
        }
    }

    #[test]
    fn test_dash_range_stays_in_bounds() {
        let config = json!({"Timing": {"delay": "0.2-0.4"}});
        let mut rng = rng();
        for _ in 0..200 {
            let v = random_wait_time_with(&mut rng, &config, "delay");
            assert!((0.2..=0.4).contains(&v), "{} out of range", v);
        }
    }

    #[test]
    fn test_comma_range_stays_in_bounds() {
        let config = json!({"Timing": {"delay": "3, 5"}});
        assert_eq!(
            TimingBounds::resolve(&config, "delay"),
            TimingBounds { min: 3.0, max: 5.0 }
        );

        let mut rng = rng();
        for _ in 0..200 {
            let v = random_wait_time_with(&mut rng, &config, "delay");
            assert!((3.0..=5.0).contains(&v));
        }
    }

    #[test]
    fn test_single_number_string() {
        let config = json!({"Timing": {"delay": "0.75"}});
        assert_eq!(random_wait_time(&config, "delay"), 0.75);
    }

    #[test]
    fn test_reversed_bounds_are_normalized() {
        let config = json!({"Timing": {"k": "2-1"}});
        assert_eq!(
            TimingBounds::resolve(&config, "k"),
            TimingBounds { min: 1.0, max: 2.0 }
        );

        let mut rng = rng();
        for _ in 0..100 {
            let v = random_wait_time_with(&mut rng, &config, "k");
            assert!((1.0..=2.0).contains(&v));
        }
    }

    #[test]
    fn test_malformed_entries_use_default_range() {
        let malformed = [
            json!({}),
            json!({"Timing": {}}),
            json!({"Timing": {"k": "abc"}}),
            json!({"Timing": {"k": "1-2-3"}}),
            json!({"Timing": {"k": "-1"}}),
            json!({"Timing": {"k": "1,"}}),
            json!({"Timing": {"k": "nan"}}),
            json!({"Timing": {"k": "inf"}}),
            json!({"Timing": {"k": "-1e308,1e308"}}),
            json!({"Timing": {"k": [1, 2]}}),
            json!({"Timing": {"k": {"min": 1}}}),
            json!({"Timing": {"k": null}}),
            json!({"Timing": {"k": ""}}),
            json!({"Timing": {"k": 0}}),
            json!({"Timing": {"k": false}}),
            json!({"Timing": "not a section"}),
            json!("not even an object"),
        ];

        let mut rng = rng();
        for config in &malformed {
            assert_eq!(TimingBounds::resolve(config, "k"), TimingBounds::DEFAULT, "{}", config);
            for _ in 0..20 {
                let v = random_wait_time_with(&mut rng, config, "k");
                assert!((0.5..=1.5).contains(&v), "{} gave {}", config, v);
            }
        }
    }

    #[test]
    fn test_true_counts_as_one_second() {
        let config = json!({"Timing": {"k": true}});
        assert_eq!(TimingBounds::resolve(&config, "k"), TimingBounds::fixed(1.0));
    }

    #[test]
    fn test_negative_number_is_kept() {
        let config = json!({"Timing": {"k": -0.5}});
        assert_eq!(random_wait_time(&config, "k"), -0.5);
    }

    #[test]
    fn test_contains() {
        let bounds = TimingBounds { min: 1.0, max: 2.0 };
        assert!(bounds.contains(1.0));
        assert!(bounds.contains(2.0));
        assert!(!bounds.contains(2.1));
    }
}
