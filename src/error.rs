//! Synchronization errors.

/// Errors that can occur while building a timeline or driving playback.
///
/// Conditions that can be clamped (seeks past the end, indices out of range)
/// are never reported here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncError {
    /// The source text contained no timestamp tags. Callers should fall back
    /// to showing the lyrics untimed.
    #[error("No synchronized lyrics found (no [mm:ss.xx] tags)")]
    ParseEmpty,

    #[error("No timeline attached; attach lyrics before sending time updates")]
    NotAttached,

    /// Negative or non-finite time value. The cursor is left unchanged.
    #[error("Invalid playback time: {time}")]
    InvalidTime { time: f64 },
}

impl SyncError {
    /// Validate a playback time, returning it unchanged when usable.
    pub fn check_time(time: f64) -> Result<f64, SyncError> {
        if time.is_finite() && time >= 0.0 {
            Ok(time)
        } else {
            Err(SyncError::InvalidTime { time })
        }
    }
}
