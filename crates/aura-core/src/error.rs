use thiserror::Error;

/// Errors raised when a simulation is configured with unusable parameters.
///
/// These are programmer errors at the mount call site, not runtime conditions,
/// so the variants carry the offending values for a useful message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("surface size must be positive, got {width}x{height}")]
    EmptySurface { width: f32, height: f32 },

    #[error("labeled ray count {labeled} exceeds total ray count {total}")]
    LabeledExceedsTotal { labeled: usize, total: usize },

    #[error("labeled ray count {labeled} exceeds the label vocabulary ({vocabulary} entries)")]
    LabeledExceedsVocabulary { labeled: usize, vocabulary: usize },

    #[error("ray field needs at least one ray")]
    NoRays,
}
