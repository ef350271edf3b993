use crate::error::ConfigError;
use rand::Rng;

/// Inclusive integer range a gene must stay within.
///
/// ```
/// use lineq_ga::ga::GeneBounds;
///
/// let bounds = GeneBounds::new(-10, 10).unwrap();
/// assert_eq!(bounds.clamp(25), 10);
/// assert!(GeneBounds::new(1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeneBounds"))]
pub struct GeneBounds {
    min: i32,
    max: i32,
}

/// Unchecked wire form; deserialization goes through [`GeneBounds::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeneBounds {
    min: i32,
    max: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeneBounds> for GeneBounds {
    type Error = ConfigError;

    fn try_from(raw: RawGeneBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl GeneBounds {
    #[tracing::instrument(level = "debug")]
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Uniform draw over `[min, max]`, both ends inclusive.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.min..=self.max)
    }

    pub fn clamp(&self, value: i64) -> i32 {
        // min/max are i32, so the clamped value always fits
        value.clamp(self.min as i64, self.max as i64) as i32
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
