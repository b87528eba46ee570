//! Autonegotiation link timer lookup

use crate::error::{NegotiationError, NegotiationResult};
use crate::internal::constants::{BASEX_LINK_TIMER_NS, SGMII_LINK_TIMER_NS};
use crate::link::PhyInterface;

/// Standard link timer for an interface mode, in nanoseconds
///
/// Returns [`NegotiationError::NotApplicable`] when no timer is defined for
/// the mode; keep the device default in that case.
pub const fn link_timer_ns(interface: PhyInterface) -> NegotiationResult<u32> {
    match interface {
        PhyInterface::Sgmii => Ok(SGMII_LINK_TIMER_NS),
        PhyInterface::BaseX1000 | PhyInterface::BaseX2500 => Ok(BASEX_LINK_TIMER_NS),
        PhyInterface::Mii
        | PhyInterface::Rmii
        | PhyInterface::Rgmii
        | PhyInterface::Qsgmii
        | PhyInterface::Usxgmii
        | PhyInterface::BaseR10G => Err(NegotiationError::NotApplicable),
    }
}

/// Link timer expressed in device counter ticks of `tick_ns` each
///
/// Rounds up so the programmed timer is never shorter than the standard.
pub const fn link_timer_ticks(interface: PhyInterface, tick_ns: u32) -> NegotiationResult<u32> {
    if tick_ns == 0 {
        return Err(NegotiationError::NotApplicable);
    }
    match link_timer_ns(interface) {
        Ok(ns) => Ok(ns.div_ceil(tick_ns)),
        Err(e) => Err(e),
    }
}
