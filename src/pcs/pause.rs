//! PAUSE resolution (IEEE 802.3 Annex 28B, Table 28B-3)
//!
//! | Local PAUSE | Local ASM_DIR | Partner PAUSE | Partner ASM_DIR | TX | RX |
//! |-------------|---------------|---------------|-----------------|----|----|
//! | 1 | x | 1 | x | yes | yes |
//! | 0 | 1 | 1 | 1 | yes | no |
//! | 1 | 1 | 0 | 1 | no | yes |
//! | otherwise | | | | no | no |

use crate::link::Advertising;

/// Resolved PAUSE frame behaviour for the local MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PauseResolution {
    /// Local MAC may transmit PAUSE frames
    pub tx: bool,
    /// Local MAC honours received PAUSE frames
    pub rx: bool,
}

impl PauseResolution {
    /// Flow control disabled in both directions
    pub const NONE: Self = Self { tx: false, rx: false };

    /// Flow control enabled in both directions
    pub const SYMMETRIC: Self = Self { tx: true, rx: true };

    /// Returns `true` if PAUSE is used in either direction
    #[must_use]
    pub const fn any(self) -> bool {
        self.tx || self.rx
    }
}

/// Resolve PAUSE from the local and link partner advertisements
///
/// Only the PAUSE and ASYM_PAUSE bits of either set are consulted.
pub fn resolve_pause(local: Advertising, partner: Advertising) -> PauseResolution {
    let common = local & partner;

    if common.pause() {
        PauseResolution::SYMMETRIC
    } else if common.asym_pause() {
        PauseResolution {
            tx: partner.pause(),
            rx: local.pause(),
        }
    } else {
        PauseResolution::NONE
    }
}
