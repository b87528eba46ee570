//! PCS Autonegotiation
//!
//! A `no_std`, `no_alloc` implementation of the word-level logic between a
//! serial Ethernet PCS and a link manager: decoding the status and link
//! partner registers into a normalized link state, and encoding the local
//! advertisement.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Link Types** ([`link`]): interface modes, link state, capability sets
//! 2. **PCS Layer** ([`pcs`]): pure decode/encode functions plus the Clause 22
//!    helpers in [`pcs::c22`]
//! 3. **HAL Layer** ([`hal`]): the [`MdioBus`] trait, implemented elsewhere
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 22**: BMCR/BMSR/ADVERTISE/LPA register block
//! - **IEEE 802.3 Clause 37**: 1000BASE-X base page, reused by 2500BASE-X
//! - **IEEE 802.3 Annex 28B**: PAUSE resolution
//! - **Cisco SGMII**: `tx_config_reg` speed/duplex/link signalling, QSGMII alike
//!
//! # Supported Interface Modes
//!
//! | Mode | Link timer | LPA format | Advertisement |
//! |------|------------|------------|---------------|
//! | SGMII | 1.6 ms | SGMII | `0x0001` |
//! | QSGMII | - | SGMII | `0x0001` |
//! | 1000BASE-X | 10 ms | Clause 37 | Clause 37 |
//! | 2500BASE-X | 10 ms | Clause 37 | Clause 37 |
//!
//! Other [`PhyInterface`] values are accepted everywhere: the decoder reports
//! link down and the other operations return
//! [`NegotiationError::NotApplicable`].
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and decoder logging
//!
//! # Example
//!
//! ```ignore
//! use ph_pcs_autoneg::{pcs, Advertising, LinkState, PhyInterface};
//!
//! let mut state = LinkState::new(PhyInterface::Sgmii);
//! pcs::decode_state(&mut state, bmsr, lpa);
//!
//! if state.is_resolved() {
//!     mac.set_speed(state.speed);
//!     mac.set_duplex(state.duplex);
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod hal;
pub mod link;
pub mod pcs;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Error, IoError, IoResult, NegotiationError, NegotiationResult, Result};
pub use hal::MdioBus;
pub use link::{Advertising, Duplex, LinkState, PhyInterface, Speed};
pub use pcs::{
    PauseResolution, decode_state, encode_advertisement, link_timer_ns, resolve_pause,
};

/// Protocol constants.
///
/// Grouped into a dedicated module to keep the top-level facade focused on
/// types and operations.
pub mod constants {
    pub use crate::internal::constants::{BASEX_LINK_TIMER_NS, MAX_PHY_ADDR, SGMII_LINK_TIMER_NS};
}

/// Raw register addresses and bit masks.
///
/// Useful when a caller reads the registers itself and hands the words to
/// [`decode_state`].
pub mod registers {
    pub use crate::internal::phy_regs::{bmcr, bmsr, c37, phy_reg, sgmii};
}
