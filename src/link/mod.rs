//! Link-level value types
//!
//! Plain `Copy` records passed into and out of the [`pcs`](crate::pcs)
//! functions. None of them is retained by the crate between calls.
//!
//! - [`PhyInterface`]: interface mode, the dispatch key for every operation
//! - [`LinkState`]: normalized link state, partially written by the decoder
//! - [`Advertising`]: local or link partner capability set

pub mod advertising;
pub mod state;
pub mod types;

pub use advertising::Advertising;
pub use state::LinkState;
pub use types::{Duplex, PhyInterface, Speed};
