use serde::{Deserialize, Serialize};

/// What the caller's opacity function says about a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opacity {
    /// Visible, reported, and sight passes through
    Clear,
    /// Blocks sight and is not reported
    Opaque,
    /// Blocks sight but is still reported (a wall seen from outside)
    OpaqueReported,
}

impl Opacity {
    /// Map a plain "is this a wall" flag to the usual case of visible walls
    pub fn from_wall(is_wall: bool) -> Self {
        if is_wall {
            Opacity::OpaqueReported
        } else {
            Opacity::Clear
        }
    }

    pub fn blocks_sight(self) -> bool {
        !matches!(self, Opacity::Clear)
    }

    pub fn is_reported(self) -> bool {
        !matches!(self, Opacity::Opaque)
    }
}
