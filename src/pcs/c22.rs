//! Clause 22 PCS helpers over an [`MdioBus`]
//!
//! Glue for PCS blocks that expose BMCR/BMSR/ADVERTISE/LPA at the standard
//! Clause 22 addresses. Each helper validates the address, performs the
//! register accesses and hands the words to the pure decode/encode layer.
//!
//! # Example
//!
//! ```ignore
//! use ph_pcs_autoneg::pcs::c22;
//! use ph_pcs_autoneg::{Advertising, LinkState, PhyInterface};
//!
//! let adv = Advertising::BASEX1000_FULL | Advertising::PAUSE;
//! if c22::config(&mut mdio, 0, PhyInterface::BaseX1000, adv, true)? {
//!     c22::an_restart(&mut mdio, 0)?;
//! }
//!
//! let mut state = LinkState::new(PhyInterface::BaseX1000).with_advertising(adv);
//! c22::get_state(&mut mdio, 0, &mut state)?;
//! ```

use super::{decode_state, encode_advertisement};
use crate::error::Result;
use crate::hal::mdio::{MdioBus, check_phy_addr};
use crate::internal::phy_regs::{bmcr, phy_reg};
use crate::link::{Advertising, LinkState, PhyInterface};

/// Read BMSR and LPA and decode them into `state`
pub fn get_state<M: MdioBus>(mdio: &mut M, phy_addr: u8, state: &mut LinkState) -> Result<()> {
    check_phy_addr(phy_addr)?;

    let bmsr = mdio.read(phy_addr, phy_reg::BMSR)?;
    let lpa = mdio.read(phy_addr, phy_reg::LPA)?;
    decode_state(state, bmsr, lpa);

    Ok(())
}

/// Program the advertisement register for `interface`
///
/// Modes without an advertisement word leave the bus untouched. Returns
/// `true` when the register value changed.
pub fn set_advertisement<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    interface: PhyInterface,
    advertising: Advertising,
) -> Result<bool> {
    check_phy_addr(phy_addr)?;

    let Ok(adv) = encode_advertisement(interface, advertising) else {
        return Ok(false);
    };

    let changed = mdio.modify(phy_addr, phy_reg::ADVERTISE, 0xFFFF, adv)?;

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "PCS {=u8}: advertisement {=u16:#x} changed={=bool}",
        phy_addr,
        adv,
        changed
    );

    Ok(changed)
}

/// Configure advertisement and in-band negotiation
///
/// With `in_band` set, BMCR.AN_ENABLE is turned on, otherwise off. Returns
/// `true` when the advertisement changed, meaning negotiation should be
/// restarted with [`an_restart`].
pub fn config<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    interface: PhyInterface,
    advertising: Advertising,
    in_band: bool,
) -> Result<bool> {
    let changed = set_advertisement(mdio, phy_addr, interface, advertising)?;

    let an = if in_band { bmcr::AN_ENABLE } else { 0 };
    mdio.modify(phy_addr, phy_reg::BMCR, bmcr::AN_ENABLE, an)?;

    Ok(changed)
}

/// Restart negotiation (BMCR.AN_RESTART self-clears)
pub fn an_restart<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
    check_phy_addr(phy_addr)?;

    let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
    mdio.write(phy_addr, phy_reg::BMCR, bmcr_val | bmcr::AN_RESTART)
}

// =============================================================================
// Unit Tests
// =============================================================================
