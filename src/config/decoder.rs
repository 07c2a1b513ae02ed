//! Decoder behavior flags

use serde::Deserialize;

/// Flags controlling how the command-line decoder treats each code
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DecoderConfig {
    /// Fail on codes that are too long or have unknown positions
    #[serde(default)]
    pub strict: bool,
}
