//! # sc-balance — Symbol economy balancing engine
//!
//! Deterministic derivation of a game's symbol economy: appearance
//! weights, payout tables, and per-reel frequency curves. Every operation
//! is a pure function `(symbols, params) -> symbols'` — no I/O, no shared
//! state, and the output set keeps the input's insertion order.
//!
//! ## Architecture
//!
//! ```text
//! Vec<Symbol> + PayMechanism + reel_count
//!     │
//!     ├── rank                  (wild > scatter > payout-descending)
//!     │     │
//!     │     ├── normalize_weights        (global shares summing to 100)
//!     │     ├── populate_payouts         (rank-scaled paytables)
//!     │     └── distribute_reel_weights  (position-dependent curves)
//!     │
//!     └── auto_balance          (all three, payouts first)
//! ```
//!
//! The UI invokes the operations on explicit user action ("Optimize
//! Weights", "Auto-Populate Payouts", "Auto-Balance Reels") and replaces
//! its symbol list with the returned one.

pub mod engine;
pub mod payouts;
pub mod rank;
pub mod reels;
pub mod weights;

pub use engine::auto_balance;
pub use payouts::populate_payouts;
pub use rank::{RankedSymbol, rank, rank_fraction};
pub use reels::distribute_reel_weights;
pub use weights::{SCATTER_RESERVED_WEIGHT, WILD_RESERVED_WEIGHT, normalize_weights};
