//! IEEE 802.3 PCS Register Definitions
//!
//! Register addresses and bit definitions for a Clause 22 register block
//! fronting a PCS. The status register is shared with copper PHYs; the
//! advertisement and link partner registers change meaning with the
//! interface mode.
//!
//! # Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 4 | ADVERTISE | Local advertisement word |
//! | 5 | LPA | Link partner word |
//!
//! # Word Layouts
//!
//! | Bit | Clause 37 (BASE-X) | Cisco SGMII (PHY to MAC) |
//! |-----|--------------------|--------------------------|
//! | 15 | Next page | Link up |
//! | 14 | Acknowledge | Acknowledge |
//! | 13:12 | Remote fault | 12: full duplex |
//! | 11:10 | - | Speed (00=10, 01=100, 10=1000) |
//! | 8 | Asymmetric pause | - |
//! | 7 | Pause | - |
//! | 6 | Half duplex | - |
//! | 5 | Full duplex | - |
//! | 0 | - | Always 1 |

// =============================================================================
// Register Addresses
// =============================================================================

/// Clause 22 register addresses used by the PCS helpers
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Advertisement register
    pub const ADVERTISE: u8 = 4;
    /// Link partner ability register
    pub const LPA: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const EXPANSION: u8 = 6;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// Extended status register present
    pub const ESTATUS: u16 = 1 << 8;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault detected
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (1 = link up, 0 = link down)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// Clause 37 Word (1000BASE-X / 2500BASE-X)
// =============================================================================

/// Clause 37 base page bits, shared by ADVERTISE and LPA in BASE-X modes
pub mod c37 {
    /// Next page
    pub const NEXT_PAGE: u16 = 1 << 15;
    /// Acknowledge
    pub const ACK: u16 = 1 << 14;
    /// Remote fault field mask (RF2:RF1)
    pub const REMOTE_FAULT_MASK: u16 = 0x3000;
    /// Asymmetric pause
    pub const PAUSE_ASYM: u16 = 1 << 8;
    /// Symmetric pause
    pub const PAUSE: u16 = 1 << 7;
    /// Half duplex capable
    pub const HALF_DUPLEX: u16 = 1 << 6;
    /// Full duplex capable
    pub const FULL_DUPLEX: u16 = 1 << 5;
}

// =============================================================================
// Cisco SGMII Word
// =============================================================================

/// SGMII `tx_config_reg` bits as reported by the PHY
pub mod sgmii {
    /// Link up on the media side
    pub const LINK: u16 = 1 << 15;
    /// Acknowledge
    pub const ACK: u16 = 1 << 14;
    /// Full duplex (half duplex when clear)
    pub const FULL_DUPLEX: u16 = 1 << 12;
    /// Speed field mask
    pub const SPEED_MASK: u16 = 0x0C00;
    /// Speed field: 10 Mbps
    pub const SPEED_10: u16 = 0x0000;
    /// Speed field: 100 Mbps
    pub const SPEED_100: u16 = 0x0400;
    /// Speed field: 1000 Mbps
    pub const SPEED_1000: u16 = 0x0800;
    /// Speed field: reserved encoding
    pub const SPEED_RESERVED: u16 = 0x0C00;
    /// Bit 0 is fixed to one in every SGMII word
    pub const SGMII_SELECT: u16 = 1 << 0;
    /// Advertisement value written by the MAC side
    pub const MAC_ADVERTISE: u16 = SGMII_SELECT;
}
