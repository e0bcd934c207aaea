use anyhow::Result;

/// Default scale factor for the expected-score distribution.
pub const DEFAULT_SCALE: f64 = 400.0;

/// Default K factor for rating updates.
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Default rating for players on their first appearance in a table.
pub const DEFAULT_INITIAL_RATING: f64 = 400.0;

/// Parameters for one rating update.
///
/// Passed explicitly to the engine (dependency injection) rather than held in
/// process-wide state.
#[derive(Debug, Clone)]
pub struct EloSettings {
    pub scale: f64,
    pub k_factor: f64,
    pub initial_rating: f64,
}

impl Default for EloSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            k_factor: DEFAULT_K_FACTOR,
            initial_rating: DEFAULT_INITIAL_RATING,
        }
    }
}

impl EloSettings {
    pub fn new(scale: f64, k_factor: f64, initial_rating: f64) -> Self {
        Self {
            scale,
            k_factor,
            initial_rating,
        }
    }

    /// Scale and K factor must be strictly positive for the update formula to
    /// be well defined.
    pub fn validate(&self) -> Result<()> {
        if self.scale <= 0.0 {
            anyhow::bail!("scale factor must be strictly positive, got {}", self.scale);
        }
        if self.k_factor <= 0.0 {
            anyhow::bail!("k factor must be strictly positive, got {}", self.k_factor);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_parameters() {
        let settings = EloSettings::default();
        assert_eq!(settings.scale, 400.0);
        assert_eq!(settings.k_factor, 32.0);
        assert_eq!(settings.initial_rating, 400.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn non_positive_parameters_are_rejected() {
        assert!(EloSettings::new(0.0, 32.0, 400.0).validate().is_err());
        assert!(EloSettings::new(-400.0, 32.0, 400.0).validate().is_err());
        assert!(EloSettings::new(400.0, 0.0, 400.0).validate().is_err());
        assert!(EloSettings::new(400.0, -32.0, 400.0).validate().is_err());
    }
}
