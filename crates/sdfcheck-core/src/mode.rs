//! Renderer algorithm modes.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Distance-field algorithm requested from the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Single-channel signed distance field
    Sdf,
    /// Single-channel pseudo-distance field
    Psdf,
    /// Multi-channel signed distance field
    #[default]
    Msdf,
    /// Multi-channel field with true distance in the alpha channel
    Mtsdf,
}

impl Mode {
    /// Every image-producing mode, in renderer help order.
    pub const ALL: [Self; 4] = [Self::Sdf, Self::Psdf, Self::Msdf, Self::Mtsdf];

    /// Name passed on the renderer command line and used in artifact names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sdf => "sdf",
            Self::Psdf => "psdf",
            Self::Msdf => "msdf",
            Self::Mtsdf => "mtsdf",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}
