/// Default ceiling on compensation rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

/// Tunables for a rent split.
///
/// # Example
/// ```
/// use roomsplit_domain::SplitConfig;
///
/// let config = SplitConfig { max_rounds: 500 };
/// assert_eq!(SplitConfig::default().max_rounds, 10_000);
/// assert_ne!(config, SplitConfig::default());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    /// Compensation rounds allowed before giving up with a non-convergence error.
    pub max_rounds: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}
