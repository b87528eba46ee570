//! PCS Register Definitions
//!
//! Register addresses and bit masks for the Clause 22 register block that
//! fronts a BASE-X or SGMII PCS. Registers are reached over MDIO through
//! [`MdioBus`](crate::hal::mdio::MdioBus); the pure decoders consume the
//! words after they have been read.

pub mod standard;

pub use standard::{bmcr, bmsr, c37, phy_reg, sgmii};
