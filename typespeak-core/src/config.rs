//! Configuration types for the segmentation engine

use crate::error::{Result, SegmentError};
use std::time::Duration;

/// Default configuration constants
pub mod defaults {
    use std::time::Duration;

    /// Quiet period after punctuation before it counts as a sentence end
    pub const DEBOUNCE: Duration = Duration::from_millis(360);

    /// Upper bound accepted for the debounce delay
    pub const MAX_DEBOUNCE: Duration = Duration::from_secs(10);
}

/// Segmentation engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Delay after sentence punctuation before the boundary fires on its own
    pub debounce: Duration,
    /// Queue the in-progress sentence when the input ends
    pub flush_on_eof: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            debounce: defaults::DEBOUNCE,
            flush_on_eof: false,
        }
    }
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.debounce.is_zero() {
            return Err(SegmentError::Config(
                "debounce must be greater than 0".into(),
            ));
        }

        if self.debounce > defaults::MAX_DEBOUNCE {
            return Err(SegmentError::Config(format!(
                "debounce must not exceed {}ms",
                defaults::MAX_DEBOUNCE.as_millis()
            )));
        }

        Ok(())
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    debounce: Option<Duration>,
    flush_on_eof: Option<bool>,
}

impl SegmenterConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce delay
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = Some(delay);
        self
    }

    /// Set the debounce delay in milliseconds
    pub fn debounce_ms(self, millis: u64) -> Self {
        self.debounce(Duration::from_millis(millis))
    }

    /// Queue the partial sentence when input ends
    pub fn flush_on_eof(mut self, flush: bool) -> Self {
        self.flush_on_eof = Some(flush);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SegmenterConfig> {
        let mut config = SegmenterConfig::default();

        if let Some(delay) = self.debounce {
            config.debounce = delay;
        }

        if let Some(flush) = self.flush_on_eof {
            config.flush_on_eof = flush;
        }

        config.validate()?;
        Ok(config)
    }
}
