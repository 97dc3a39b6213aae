//! # cuckoo-table
//!
//! A two-table cuckoo hashing engine over non-negative integer keys:
//! constant-time lookups, bounded-displacement insertion, and a
//! capacity-doubling rehash. See [`table`] for the algorithm details.
//!
//! ```rust
//! use cuckoo_table::{CuckooTable, Error};
//!
//! let mut table = CuckooTable::new();
//! match table.insert(42) {
//!     Ok(()) => assert!(table.lookup(42)),
//!     Err(Error::CycleDetected) => {
//!         table.rehash();
//!         table.insert(42).unwrap();
//!     }
//!     Err(e) => panic!("unexpected: {e}"),
//! }
//! ```

pub mod error;
pub mod table;

pub use error::{Error, Result};
pub use table::{CuckooTable, DEFAULT_CAPACITY};
