//! Link parameter types: speed, duplex and MAC-to-PHY interface mode

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// Not resolved
    #[default]
    Unknown,
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    Mbps100,
    /// 1000 Mbps
    Mbps1000,
    /// 2500 Mbps
    Mbps2500,
}

impl Speed {
    /// Data rate in Mbps, `None` when unresolved
    #[must_use]
    pub const fn mbps(self) -> Option<u32> {
        match self {
            Speed::Unknown => None,
            Speed::Mbps10 => Some(10),
            Speed::Mbps100 => Some(100),
            Speed::Mbps1000 => Some(1000),
            Speed::Mbps2500 => Some(2500),
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Not resolved
    #[default]
    Unknown,
    /// Half duplex
    Half,
    /// Full duplex
    Full,
}

/// MAC-to-PHY interface mode
///
/// Only the serial modes with in-band negotiation carry decode/encode
/// semantics here; the rest are representable so that callers can dispatch
/// on any mode their hardware reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Reduced Media Independent Interface
    #[default]
    Rmii,
    /// Reduced Gigabit Media Independent Interface
    Rgmii,
    /// Cisco Serial Gigabit Media Independent Interface
    Sgmii,
    /// Quad SGMII
    Qsgmii,
    /// 1000BASE-X (Clause 36/37)
    BaseX1000,
    /// 2500BASE-X (Clause 37 signalling at 2.5x clock)
    BaseX2500,
    /// Universal Serial 10GE MII
    Usxgmii,
    /// 10GBASE-R
    BaseR10G,
}

impl PhyInterface {
    /// Conventional lowercase name, as used by device trees and ethtool
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PhyInterface::Mii => "mii",
            PhyInterface::Rmii => "rmii",
            PhyInterface::Rgmii => "rgmii",
            PhyInterface::Sgmii => "sgmii",
            PhyInterface::Qsgmii => "qsgmii",
            PhyInterface::BaseX1000 => "1000base-x",
            PhyInterface::BaseX2500 => "2500base-x",
            PhyInterface::Usxgmii => "usxgmii",
            PhyInterface::BaseR10G => "10gbase-r",
        }
    }

    /// Returns `true` for the SGMII family (SGMII, QSGMII)
    #[must_use]
    pub const fn is_sgmii(self) -> bool {
        matches!(self, PhyInterface::Sgmii | PhyInterface::Qsgmii)
    }

    /// Returns `true` for Clause 37 BASE-X modes
    #[must_use]
    pub const fn is_base_x(self) -> bool {
        matches!(self, PhyInterface::BaseX1000 | PhyInterface::BaseX2500)
    }
}

impl core::fmt::Display for PhyInterface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
