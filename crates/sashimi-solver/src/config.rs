//! Complex fish search configuration.

use derive_more::{Display, Error};

/// Smallest supported fish size (an X-Wing).
pub const MIN_FISH_SIZE: u8 = 2;

/// Largest supported fish size (a Leviathan).
pub const MAX_FISH_SIZE: u8 = 7;

/// Errors returned when building a [`ComplexFishConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The requested maximum fish size is outside the supported range.
    #[display("max fish size {max_size} is outside {MIN_FISH_SIZE}..={MAX_FISH_SIZE}")]
    MaxSizeOutOfRange {
        /// The rejected size.
        max_size: u8,
    },
}

/// Options for [`ComplexFish`](crate::technique::ComplexFish).
///
/// # Examples
///
/// ```
/// use sashimi_solver::{ComplexFishConfig, ConfigError};
///
/// let config = ComplexFishConfig::new(4)?.with_allow_siamese(true);
/// assert_eq!(config.max_size(), 4);
/// assert!(config.allow_siamese());
///
/// assert!(ComplexFishConfig::new(8).is_err());
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexFishConfig {
    allow_siamese: bool,
    max_size: u8,
}

impl Default for ComplexFishConfig {
    fn default() -> Self {
        Self {
            allow_siamese: false,
            max_size: 3,
        }
    }
}

impl ComplexFishConfig {
    /// Creates a configuration searching fish of size 2 up to `max_size`.
    ///
    /// Siamese merging is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxSizeOutOfRange`] if `max_size` is not in 2-7.
    pub fn new(max_size: u8) -> Result<Self, ConfigError> {
        if !(MIN_FISH_SIZE..=MAX_FISH_SIZE).contains(&max_size) {
            return Err(ConfigError::MaxSizeOutOfRange { max_size });
        }
        Ok(Self {
            max_size,
            ..Self::default()
        })
    }

    /// Enables or disables Siamese merging.
    #[must_use]
    pub const fn with_allow_siamese(mut self, allow_siamese: bool) -> Self {
        self.allow_siamese = allow_siamese;
        self
    }

    /// Returns whether Siamese merging is enabled.
    #[must_use]
    pub const fn allow_siamese(self) -> bool {
        self.allow_siamese
    }

    /// Returns the largest fish size searched.
    #[must_use]
    pub const fn max_size(self) -> u8 {
        self.max_size
    }

    /// Returns the fish sizes searched, smallest first.
    pub fn sizes(self) -> impl Iterator<Item = usize> {
        usize::from(MIN_FISH_SIZE)..=usize::from(self.max_size)
    }
}
