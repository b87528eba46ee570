//! Hardware access seams
//!
//! - [`mdio`]: the management bus trait implemented outside this crate

pub mod mdio;

pub use mdio::MdioBus;
