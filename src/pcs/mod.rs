//! PCS autonegotiation word handling
//!
//! Pure, stateless functions translating between raw PCS register words and
//! [`LinkState`](crate::LinkState):
//!
//! - [`link_timer_ns`]: standard link timer per interface mode
//! - [`decode_state`]: BMSR + LPA into a link state, dispatching to
//!   [`decode_c37_word`] (1000BASE-X, 2500BASE-X) or [`decode_sgmii_word`]
//!   (SGMII, QSGMII)
//! - [`encode_advertisement`]: advertisement set into the ADVERTISE word
//! - [`resolve_pause`]: Annex 28B PAUSE resolution
//!
//! The [`c22`] module wires these to an [`MdioBus`](crate::hal::MdioBus).
//!
//! # Example
//!
//! ```ignore
//! use ph_pcs_autoneg::pcs;
//! use ph_pcs_autoneg::{Advertising, LinkState, PhyInterface};
//!
//! let adv = Advertising::BASEX1000_FULL | Advertising::PAUSE;
//! let word = pcs::encode_advertisement(PhyInterface::BaseX1000, adv)?;
//! // ... write `word`, negotiate, read BMSR and LPA ...
//!
//! let mut state = LinkState::new(PhyInterface::BaseX1000).with_advertising(adv);
//! pcs::decode_state(&mut state, bmsr, lpa);
//! if state.is_resolved() {
//!     let pause = state.resolved_pause();
//! }
//! ```
//!
//! All functions are reentrant; concurrent calls on distinct `LinkState`
//! values need no synchronization.

pub mod c22;
pub mod decode;
pub mod encode;
pub mod pause;
pub mod timer;

pub use decode::{c37_word_abilities, decode_c37_word, decode_sgmii_word, decode_state};
pub use encode::encode_advertisement;
pub use pause::{PauseResolution, resolve_pause};
pub use timer::{link_timer_ns, link_timer_ticks};
