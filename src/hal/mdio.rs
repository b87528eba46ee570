//! MDIO (Management Data Input/Output) bus abstraction
//!
//! The PCS register block is reached over a Clause 22 management bus. This
//! crate does not drive the bus itself; a HAL or OS driver implements
//! [`MdioBus`] and the [`pcs::c22`](crate::pcs::c22) helpers use it.

use crate::error::{IoError, IoResult, Result};
use crate::internal::constants::MAX_PHY_ADDR;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implementations are expected to serialize access themselves; every method
/// takes `&mut self`.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Read-modify-write the bits selected by `mask`
    ///
    /// The register is only written when its value changes. Returns whether
    /// it changed.
    fn modify(&mut self, phy_addr: u8, reg_addr: u8, mask: u16, set: u16) -> Result<bool> {
        let old = self.read(phy_addr, reg_addr)?;
        let new = (old & !mask) | (set & mask);
        if new == old {
            return Ok(false);
        }
        self.write(phy_addr, reg_addr, new)?;
        Ok(true)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

// =============================================================================
// Address Validation
// =============================================================================

/// Reject PHY addresses outside the 5-bit field
pub const fn check_phy_addr(phy_addr: u8) -> IoResult<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(IoError::InvalidPhyAddress);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockMdioBus;

    #[test]
    fn phy_addr_range() {
        assert_eq!(check_phy_addr(0), Ok(()));
        assert_eq!(check_phy_addr(31), Ok(()));
        assert_eq!(check_phy_addr(32), Err(IoError::InvalidPhyAddress));
    }

    #[test]
    fn modify_only_writes_on_change() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(1, 0, 0x1140);

        assert!(!mdio.modify(1, 0, 0x1000, 0x1000).unwrap());
        assert!(mdio.get_writes().is_empty());

        assert!(mdio.modify(1, 0, 0x1000, 0).unwrap());
        assert_eq!(mdio.get_writes(), [(1, 0, 0x0140)]);
    }

    #[test]
    fn modify_ignores_set_bits_outside_mask() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(0, 4, 0x0000);

        assert!(mdio.modify(0, 4, 0x00FF, 0xFF01).unwrap());
        assert_eq!(mdio.get_register(0, 4), Some(0x0001));
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(2, 1, 0x0024);

        let mut by_ref = &mut mdio;
        assert_eq!(MdioBus::read(&mut by_ref, 2, 1).unwrap(), 0x0024);
    }
}
