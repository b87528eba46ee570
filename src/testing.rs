//! Testing utilities and mock implementations
//!
//! Mock MDIO bus for exercising the Clause 22 PCS helpers on the host.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::vec::Vec;

use crate::error::{IoError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::{bmcr, bmsr, c37, phy_reg, sgmii};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PCS helpers without hardware
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.simulate_base_x_link_up(0, c37::FULL_DUPLEX | c37::PAUSE);
///
/// let mut state = LinkState::new(PhyInterface::BaseX1000);
/// c22::get_state(&mut mdio, 0, &mut state).unwrap();
/// assert!(state.link);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Number of reads served
    reads: Cell<usize>,
    /// Fail every transaction with a bus error
    failing: Cell<bool>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Number of register reads performed so far
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    /// Make every following transaction fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// PCS with negotiation enabled and link down
    pub fn setup_pcs(&self, phy_addr: u8) {
        self.set_register(phy_addr, phy_reg::BMCR, bmcr::AN_ENABLE | bmcr::DUPLEX_FULL);
        self.set_register(phy_addr, phy_reg::BMSR, bmsr::AN_ABILITY | bmsr::ESTATUS);
        self.set_register(phy_addr, phy_reg::ADVERTISE, c37::FULL_DUPLEX);
        self.set_register(phy_addr, phy_reg::LPA, 0x0000);
    }

    /// Simulate BASE-X negotiation completing with the given partner word
    pub fn simulate_base_x_link_up(&self, phy_addr: u8, lpa: u16) {
        self.simulate_link_up(phy_addr, lpa | c37::ACK);
    }

    /// Simulate the SGMII PHY reporting link with the given speed/duplex bits
    pub fn simulate_sgmii_link_up(&self, phy_addr: u8, speed_duplex: u16) {
        self.simulate_link_up(
            phy_addr,
            sgmii::LINK | sgmii::ACK | sgmii::SGMII_SELECT | speed_duplex,
        );
    }

    /// Simulate link going down
    pub fn simulate_link_down(&self, phy_addr: u8) {
        let mut bmsr_val = self.get_register(phy_addr, phy_reg::BMSR).unwrap_or(0);
        bmsr_val &= !(bmsr::LINK_STATUS | bmsr::AN_COMPLETE);
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_val);
        self.set_register(phy_addr, phy_reg::LPA, 0x0000);
    }

    fn simulate_link_up(&self, phy_addr: u8, lpa: u16) {
        let mut bmsr_val = self.get_register(phy_addr, phy_reg::BMSR).unwrap_or(0);
        bmsr_val |= bmsr::LINK_STATUS | bmsr::AN_COMPLETE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_val);
        self.set_register(phy_addr, phy_reg::LPA, lpa);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if self.failing.get() {
            return Err(IoError::BusError.into());
        }
        self.reads.set(self.reads.get() + 1);

        // Return from register map (default 0 if not set)
        Ok(self
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        if self.failing.get() {
            return Err(IoError::BusError.into());
        }
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }
}
