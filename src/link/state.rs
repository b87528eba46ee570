//! Normalized link state record

use super::advertising::Advertising;
use super::types::{Duplex, PhyInterface, Speed};
use crate::pcs::{PauseResolution, decode_state, resolve_pause};

/// Link state as seen through the PCS
///
/// The caller owns the record and fills the inputs; [`decode_state`]
/// overwrites the outputs.
///
/// # Field Ownership
///
/// | Field | Role | Written by the decoder |
/// |-------|------|------------------------|
/// | `interface` | input | never |
/// | `an_enabled` | input | never |
/// | `advertising` | input | never |
/// | `link` | output | every call |
/// | `an_complete` | output | every call |
/// | `speed`, `duplex` | output | link up, negotiation enabled, word decodes |
/// | `pause`, `asym_pause`, `lp_advertising` | output | same, BASE-X modes only |
///
/// `an_complete` does not gate the writes: a link that is up while the
/// handshake is still running gets its resolved fields decoded anyway.
/// Resolved fields are meaningful only while [`is_resolved`](Self::is_resolved)
/// holds. The decoder never clears them; stale values from an earlier call
/// stay in place when a later call takes the link-down path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkState {
    /// Interface mode between MAC and PCS
    pub interface: PhyInterface,
    /// Negotiation administratively enabled
    pub an_enabled: bool,
    /// Local advertisement, used for PAUSE resolution
    pub advertising: Advertising,
    /// Link detected
    pub link: bool,
    /// Negotiation handshake finished
    pub an_complete: bool,
    /// Resolved speed
    pub speed: Speed,
    /// Resolved duplex
    pub duplex: Duplex,
    /// Link partner advertised symmetric PAUSE
    pub pause: bool,
    /// Link partner advertised asymmetric PAUSE
    pub asym_pause: bool,
    /// Abilities reported by the link partner
    pub lp_advertising: Advertising,
}

impl Default for LinkState {
    fn default() -> Self {
        Self::new(PhyInterface::Rmii)
    }
}

impl LinkState {
    /// Create a link-down record for the given interface with negotiation enabled
    #[must_use]
    pub const fn new(interface: PhyInterface) -> Self {
        Self {
            interface,
            an_enabled: true,
            advertising: Advertising::empty(),
            link: false,
            an_complete: false,
            speed: Speed::Unknown,
            duplex: Duplex::Unknown,
            pause: false,
            asym_pause: false,
            lp_advertising: Advertising::empty(),
        }
    }

    /// Set whether negotiation is enabled
    #[must_use]
    pub const fn with_an_enabled(mut self, enabled: bool) -> Self {
        self.an_enabled = enabled;
        self
    }

    /// Set the local advertisement
    #[must_use]
    pub const fn with_advertising(mut self, advertising: Advertising) -> Self {
        self.advertising = advertising;
        self
    }

    /// Returns `true` when speed, duplex and PAUSE can be trusted
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.link && self.an_complete
    }

    /// By-value form of [`decode_state`]
    #[must_use]
    pub fn decoded(mut self, bmsr: u16, lpa: u16) -> Self {
        decode_state(&mut self, bmsr, lpa);
        self
    }

    /// Resolve TX/RX PAUSE from the local and partner advertisements
    #[must_use]
    pub fn resolved_pause(&self) -> PauseResolution {
        let partner = self.lp_advertising | Advertising::from_pause(self.pause, self.asym_pause);
        resolve_pause(self.advertising, partner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::phy_regs::{bmsr, c37};

    #[test]
    fn new_is_link_down_and_unresolved() {
        let state = LinkState::new(PhyInterface::Sgmii);

        assert_eq!(state.interface, PhyInterface::Sgmii);
        assert!(state.an_enabled);
        assert!(!state.link);
        assert!(!state.an_complete);
        assert_eq!(state.speed, Speed::Unknown);
        assert_eq!(state.duplex, Duplex::Unknown);
        assert!(!state.is_resolved());
    }

    #[test]
    fn builder_chaining() {
        let adv = Advertising::PAUSE | Advertising::BASEX1000_FULL;
        let state = LinkState::new(PhyInterface::BaseX1000)
            .with_an_enabled(false)
            .with_advertising(adv);

        assert!(!state.an_enabled);
        assert_eq!(state.advertising, adv);
    }

    #[test]
    fn decoded_matches_in_place_decode() {
        let bmsr_val = bmsr::LINK_STATUS | bmsr::AN_COMPLETE;
        let lpa = c37::FULL_DUPLEX | c37::PAUSE;
        let base = LinkState::new(PhyInterface::BaseX1000);

        let mut in_place = base;
        decode_state(&mut in_place, bmsr_val, lpa);

        assert_eq!(base.decoded(bmsr_val, lpa), in_place);
    }

    #[test]
    fn resolved_pause_uses_both_sides() {
        let state = LinkState::new(PhyInterface::BaseX1000)
            .with_advertising(Advertising::PAUSE | Advertising::BASEX1000_FULL)
            .decoded(
                bmsr::LINK_STATUS | bmsr::AN_COMPLETE,
                c37::FULL_DUPLEX | c37::PAUSE,
            );

        let resolution = state.resolved_pause();
        assert!(resolution.tx);
        assert!(resolution.rx);
    }

    #[test]
    fn resolved_pause_without_local_advertisement_is_off() {
        let state = LinkState::new(PhyInterface::BaseX1000).decoded(
            bmsr::LINK_STATUS | bmsr::AN_COMPLETE,
            c37::FULL_DUPLEX | c37::PAUSE | c37::PAUSE_ASYM,
        );

        assert_eq!(state.resolved_pause(), PauseResolution::NONE);
    }
}
