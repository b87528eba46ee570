//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Protocol constants (link timers, nominal speeds, MDIO limits)
//! - [`phy_regs`]: Clause 22 / Clause 37 / SGMII register bit definitions

pub(crate) mod constants;
pub(crate) mod phy_regs;
