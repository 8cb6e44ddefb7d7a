//! # Points Ledger
//!
//! An in-memory loyalty points ledger: customers earn points, redeem them
//! when their balance allows, and get a warning when a redemption leaves them
//! with a low balance.
//!
//! ## Design Principles
//!
//! - **Non-negative balances**: a redemption larger than the balance is refused, not an error
//! - **Typed boundary**: only the command parser turns strings into point values
//! - **Injected output**: all user-facing messages go through a [`Notifier`]
//!
//! ## Example
//!
//! ```
//! use points_ledger::{MemoryNotifier, PointsStore};
//!
//! let mut store = PointsStore::with_notifier(MemoryNotifier::new());
//! store.earn("user456", 20).unwrap();
//! assert!(store.redeem("user456", 15).unwrap());
//! assert_eq!(store.balance("user456").unwrap(), 5);
//! assert_eq!(
//!     store.notifier().warnings(),
//!     vec!["Warning: Customer user456 has a low balance: 5 points"]
//! );
//! ```

pub mod cli;
pub mod command;
pub mod error;
pub mod notifier;
pub mod store;

pub use command::{parse, Command};
pub use error::{ArgumentError, InvalidArgument, LedgerError, Result};
pub use notifier::{ConsoleNotifier, MemoryNotifier, Notifier, Severity};
pub use store::{PointsStore, LOW_BALANCE_THRESHOLD};
