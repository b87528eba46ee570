//! PCS status decoding
//!
//! Turns the BMSR and LPA words of a Clause 22 PCS register block into a
//! [`LinkState`]. The meaning of LPA depends on the interface mode:
//! Clause 37 base page for BASE-X, Cisco `tx_config_reg` for SGMII.

use crate::internal::phy_regs::{bmsr, c37, sgmii};
use crate::link::{Advertising, Duplex, LinkState, PhyInterface, Speed};

/// Decode BMSR and LPA into `state`
///
/// `link` and `an_complete` are always taken from BMSR. When the link is
/// down or `state.an_enabled` is false, `lpa` is not inspected and the
/// resolved fields keep whatever the caller left there.
///
/// Interface modes without an in-band word format are reported as link
/// down.
pub fn decode_state(state: &mut LinkState, bmsr_val: u16, lpa: u16) {
    state.link = bmsr_val & bmsr::LINK_STATUS != 0;
    state.an_complete = bmsr_val & bmsr::AN_COMPLETE != 0;

    if !state.link || !state.an_enabled {
        return;
    }

    match state.interface {
        PhyInterface::BaseX1000 => decode_c37_word(state, lpa, Speed::Mbps1000),
        PhyInterface::BaseX2500 => decode_c37_word(state, lpa, Speed::Mbps2500),
        PhyInterface::Sgmii | PhyInterface::Qsgmii => decode_sgmii_word(state, lpa),
        PhyInterface::Mii
        | PhyInterface::Rmii
        | PhyInterface::Rgmii
        | PhyInterface::Usxgmii
        | PhyInterface::BaseR10G => {
            #[cfg(feature = "defmt")]
            defmt::warn!("no in-band word format for {}, forcing link down", state.interface);

            state.link = false;
        }
    }
}

/// Decode a Clause 37 base page received at a fixed nominal `speed`
///
/// Speed is not negotiated in the word; duplex is reported exactly as the
/// partner advertised it, with half duplex left to the caller's policy.
pub fn decode_c37_word(state: &mut LinkState, lpa: u16, speed: Speed) {
    state.speed = speed;
    state.duplex = if lpa & c37::FULL_DUPLEX != 0 {
        Duplex::Full
    } else {
        Duplex::Half
    };
    state.pause = lpa & c37::PAUSE != 0;
    state.asym_pause = lpa & c37::PAUSE_ASYM != 0;
    state.lp_advertising = c37_word_abilities(lpa, speed);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "c37 word {=u16:#x}: {} {} pause={} asym={}",
        lpa,
        state.speed,
        state.duplex,
        state.pause,
        state.asym_pause
    );
}

/// Decode a Cisco SGMII word as sent by the PHY
///
/// PAUSE is not carried by SGMII and the PAUSE fields are left untouched.
/// A cleared link bit or the reserved speed encoding force the link down.
pub fn decode_sgmii_word(state: &mut LinkState, lpa: u16) {
    if lpa & sgmii::LINK == 0 {
        #[cfg(feature = "defmt")]
        defmt::debug!("sgmii word {=u16:#x}: media link down", lpa);

        state.link = false;
        return;
    }

    state.speed = match lpa & sgmii::SPEED_MASK {
        sgmii::SPEED_10 => Speed::Mbps10,
        sgmii::SPEED_100 => Speed::Mbps100,
        sgmii::SPEED_1000 => Speed::Mbps1000,
        _ => {
            #[cfg(feature = "defmt")]
            defmt::warn!("sgmii word {=u16:#x}: reserved speed encoding", lpa);

            state.link = false;
            return;
        }
    };
    state.duplex = if lpa & sgmii::FULL_DUPLEX != 0 {
        Duplex::Full
    } else {
        Duplex::Half
    };

    #[cfg(feature = "defmt")]
    defmt::trace!("sgmii word {=u16:#x}: {} {}", lpa, state.speed, state.duplex);
}

/// Abilities carried by a Clause 37 base page
///
/// The full-duplex bit maps to the BASE-X mode matching `speed`.
pub fn c37_word_abilities(word: u16, speed: Speed) -> Advertising {
    let mut abilities = Advertising::AUTONEG;

    if word & c37::FULL_DUPLEX != 0 {
        abilities |= match speed {
            Speed::Mbps2500 => Advertising::BASEX2500_FULL,
            _ => Advertising::BASEX1000_FULL,
        };
    }
    abilities | Advertising::from_pause(word & c37::PAUSE != 0, word & c37::PAUSE_ASYM != 0)
}

// =============================================================================
// Unit Tests
// =============================================================================
