/// A violated configuration contract.
///
/// These are caller bugs: the infallible constructors panic with this message instead of
/// clamping to a "working" geometry.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    #[error("row height must be a finite value > 0 (got {0})")]
    InvalidRowHeight(f64),
    #[error("row style cycle must be >= 1")]
    InvalidRowStyleCycle,
    #[error("splitter width must be a finite value >= 0 (got {0})")]
    InvalidSplitterWidth(f64),
}

pub(crate) fn check_row_height(row_height: f64) -> Result<(), ConfigError> {
    if row_height.is_finite() && row_height > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRowHeight(row_height))
    }
}
