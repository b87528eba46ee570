//! Advertisement word encoding

use crate::error::{NegotiationError, NegotiationResult};
use crate::internal::phy_regs::{c37, sgmii};
use crate::link::{Advertising, PhyInterface};

/// Build the ADVERTISE register value for an interface mode
///
/// BASE-X modes always advertise full duplex and add the PAUSE bits found in
/// `advertising`. The SGMII family writes the fixed MAC-side word whatever
/// `advertising` holds. Other modes have no advertisement register and yield
/// [`NegotiationError::NotApplicable`].
pub fn encode_advertisement(
    interface: PhyInterface,
    advertising: Advertising,
) -> NegotiationResult<u16> {
    match interface {
        PhyInterface::BaseX1000 | PhyInterface::BaseX2500 => {
            let mut adv = c37::FULL_DUPLEX;
            if advertising.pause() {
                adv |= c37::PAUSE;
            }
            if advertising.asym_pause() {
                adv |= c37::PAUSE_ASYM;
            }
            Ok(adv)
        }
        PhyInterface::Sgmii | PhyInterface::Qsgmii => Ok(sgmii::MAC_ADVERTISE),
        PhyInterface::Mii
        | PhyInterface::Rmii
        | PhyInterface::Rgmii
        | PhyInterface::Usxgmii
        | PhyInterface::BaseR10G => Err(NegotiationError::NotApplicable),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
