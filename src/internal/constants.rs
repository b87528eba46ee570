//! Centralized Constants
//!
//! Single source of truth for the protocol-mandated numbers used by the
//! PCS decode/encode layer.
//!
//! Register bit definitions live in [`phy_regs`](super::phy_regs).

// =============================================================================
// Link Timer
// =============================================================================

/// SGMII link timer (Cisco SGMII specification, 1.6 ms)
pub const SGMII_LINK_TIMER_NS: u32 = 1_600_000;

/// Clause 37 link timer for 1000BASE-X and 2500BASE-X (10 ms)
pub const BASEX_LINK_TIMER_NS: u32 = 10_000_000;

// =============================================================================
// MDIO Addressing
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_timers_match_standards() {
        assert_eq!(SGMII_LINK_TIMER_NS, 1_600_000);
        assert_eq!(BASEX_LINK_TIMER_NS, 10_000_000);
        assert!(SGMII_LINK_TIMER_NS < BASEX_LINK_TIMER_NS);
    }

    #[test]
    fn phy_address_field_is_five_bits() {
        assert_eq!(MAX_PHY_ADDR, 0x1F);
    }
}
