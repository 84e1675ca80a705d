//! Dev-chain test harness
//!
//! Helpers for driving a local test node between test phases:
//! chain-time control, advancing past a safety-module epoch boundary,
//! and named snapshots that reset state cheaply between test cases.
//!
//! ```text
//!   setup: stake once → store.save("after stake")
//!   each test: store.load("after stake") → one operation → balance reads
//! ```

pub mod epoch;
pub mod snapshots;
pub mod time;

#[cfg(test)]
pub mod mock;

pub use epoch::{advance_epoch, advance_to_next_epoch};
pub use snapshots::{SnapshotError, SnapshotStore};
pub use time::{advance_to_timestamp, increase_time, increase_time_and_mine};
