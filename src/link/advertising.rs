//! Capability sets exchanged during autonegotiation
//!
//! [`Advertising`] is used both for what the local end advertises and for
//! what the link partner reported.

use bitflags::bitflags;

bitflags! {
    /// Set of link modes and negotiation features
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Advertising: u32 {
        /// 10BASE-T half duplex
        const TP10_HALF = 1 << 0;
        /// 10BASE-T full duplex
        const TP10_FULL = 1 << 1;
        /// 100BASE-TX half duplex
        const TP100_HALF = 1 << 2;
        /// 100BASE-TX full duplex
        const TP100_FULL = 1 << 3;
        /// 1000BASE-T half duplex
        const TP1000_HALF = 1 << 4;
        /// 1000BASE-T full duplex
        const TP1000_FULL = 1 << 5;
        /// 1000BASE-X full duplex
        const BASEX1000_FULL = 1 << 6;
        /// 2500BASE-X full duplex
        const BASEX2500_FULL = 1 << 7;
        /// Autonegotiation
        const AUTONEG = 1 << 13;
        /// Symmetric PAUSE
        const PAUSE = 1 << 14;
        /// Asymmetric PAUSE
        const ASYM_PAUSE = 1 << 15;
    }
}

impl Advertising {
    /// Both PAUSE bits
    pub const PAUSE_MASK: Self = Self::PAUSE.union(Self::ASYM_PAUSE);

    /// Returns `true` if symmetric PAUSE is in the set
    #[must_use]
    pub const fn pause(self) -> bool {
        self.contains(Self::PAUSE)
    }

    /// Returns `true` if asymmetric PAUSE is in the set
    #[must_use]
    pub const fn asym_pause(self) -> bool {
        self.contains(Self::ASYM_PAUSE)
    }

    /// Builds a set holding only the given PAUSE bits
    #[must_use]
    pub const fn from_pause(pause: bool, asym_pause: bool) -> Self {
        let mut bits = Self::empty().bits();
        if pause {
            bits |= Self::PAUSE.bits();
        }
        if asym_pause {
            bits |= Self::ASYM_PAUSE.bits();
        }
        Self::from_bits_truncate(bits)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Advertising {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "Advertising({=u32:#x})", self.bits());
    }
}
