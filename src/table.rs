//! # Cuckoo Table Engine
//!
//! This module provides a **two-table cuckoo hashing** engine over non-negative
//! integer keys. Each table has its own hash function, and collisions are
//! resolved by displacing the current occupant to its alternate position,
//! bounded by `size` kicks before a displacement cycle is reported.
//!
//! ## Key Features
//! - **Two tables** of equal length `size`, with `hash1(key) = key % size` and
//!   `hash2(key) = (key / size) % size`.
//! - **Constant-time lookup**: a resident key is always at one of its two
//!   hashed positions, so membership checks touch exactly two slots.
//! - **Bounded insertion** via at most `size` displacement steps; on exhaustion
//!   the insert fails with [`Error::CycleDetected`] and the caller is expected
//!   to [`rehash`](CuckooTable::rehash) and retry.
//! - **Capacity-doubling rehash** that replays every resident key against the
//!   new hash functions and reports any key it could not place.
//! - **Thread Safety**: the engine is **not** thread-safe; every operation
//!   takes `&mut self` and runs to completion. Wrap it in a mutex for
//!   concurrent use.
//!
//! ## Example
//! ```rust
//! use cuckoo_table::CuckooTable;
//!
//! let mut table = CuckooTable::new();
//! table.insert(3).unwrap();
//! table.insert(14).unwrap(); // collides with 3 in table1, displaces it
//! assert!(table.lookup(3));
//! assert!(table.lookup(14));
//! table.remove(3).unwrap();
//! assert!(!table.lookup(3));
//! ```

use log::{debug, warn};

use crate::error::{Error, Result};

/// Default table length when none is specified (one slot array per table).
pub const DEFAULT_CAPACITY: usize = 11;

/// First-table hash: `key mod size`.
fn hash1(key: u64, size: usize) -> usize {
    (key % size as u64) as usize
}

/// Second-table hash: `floor(key / size) mod size`.
fn hash2(key: u64, size: usize) -> usize {
    ((key / size as u64) % size as u64) as usize
}

/// The cuckoo hashing engine: two parallel slot arrays of equal length and
/// the four operations that read and mutate them.
///
/// A slot holds either a key or nothing. No key ever occupies more than one
/// slot across the union of both tables.
#[derive(Debug, Clone)]
pub struct CuckooTable {
    size: usize,
    len: usize,
    table1: Vec<Option<u64>>,
    table2: Vec<Option<u64>>,
}

impl Default for CuckooTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CuckooTable {
    /// Constructs an empty engine with the default capacity of 11 slots per table.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty engine with `size` slots per table.
    ///
    /// A requested capacity of 0 is clamped to 1 so the hash functions are
    /// always well defined.
    pub fn with_capacity(size: usize) -> Self {
        let size = size.max(1);
        CuckooTable {
            size,
            len: 0,
            table1: vec![None; size],
            table2: vec![None; size],
        }
    }

    /// Returns the current length of each table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of keys resident across both tables.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no keys are resident.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only view of the first table, for rendering. Slot `i` holds the
    /// key whose `hash1` is `i`, or `None` if empty.
    pub fn table1(&self) -> &[Option<u64>] {
        &self.table1
    }

    /// Read-only view of the second table, for rendering.
    pub fn table2(&self) -> &[Option<u64>] {
        &self.table2
    }

    /// Attempts to place `key`, displacing occupants between the two tables
    /// for at most `size` steps.
    ///
    /// Inserting a key that is already resident fails with
    /// [`Error::DuplicateKey`] and leaves the tables untouched.
    ///
    /// On [`Error::CycleDetected`] the tables keep the swaps performed during
    /// the failed attempt: the incoming key may be resident and one prior
    /// occupant evicted. Callers should [`rehash`](Self::rehash) and retry.
    pub fn insert(&mut self, key: u64) -> Result<()> {
        if self.lookup(key) {
            return Err(Error::DuplicateKey(key));
        }
        match displace_into(&mut self.table1, &mut self.table2, self.size, key) {
            None => {
                self.len += 1;
                Ok(())
            }
            Some(stuck) => {
                warn!(
                    "insert({}): displacement cycle at size {}, key {} left unplaced",
                    key, self.size, stuck
                );
                Err(Error::CycleDetected)
            }
        }
    }

    /// Removes `key`, checking only its two hashed positions.
    ///
    /// A resident key always sits at `table1[hash1]` or `table2[hash2]`, so
    /// no scan is needed; anything else is [`Error::KeyNotFound`].
    pub fn remove(&mut self, key: u64) -> Result<()> {
        let pos1 = hash1(key, self.size);
        if self.table1[pos1] == Some(key) {
            self.table1[pos1] = None;
            self.len -= 1;
            return Ok(());
        }
        let pos2 = hash2(key, self.size);
        if self.table2[pos2] == Some(key) {
            self.table2[pos2] = None;
            self.len -= 1;
            return Ok(());
        }
        Err(Error::KeyNotFound)
    }

    /// Constant-time membership check against the two hashed slots.
    pub fn lookup(&self, key: u64) -> bool {
        self.table1[hash1(key, self.size)] == Some(key)
            || self.table2[hash2(key, self.size)] == Some(key)
    }

    /// Doubles `size` and replays every resident key of the old `table1`, then
    /// the old `table2`, against the new hash functions.
    ///
    /// Returns the keys that could not be placed within `new_size`
    /// displacement steps. The vector is empty in the expected case; a
    /// non-empty result means those keys are no longer resident and the
    /// caller decides how to recover (e.g. grow again and re-insert).
    pub fn rehash(&mut self) -> Vec<u64> {
        let new_size = self.size * 2;
        debug!("rehash: growing tables from {} to {}", self.size, new_size);
        let mut new_table1 = vec![None; new_size];
        let mut new_table2 = vec![None; new_size];
        let mut dropped = Vec::new();

        let old_table1 = std::mem::take(&mut self.table1);
        let old_table2 = std::mem::take(&mut self.table2);
        for key in old_table1.into_iter().chain(old_table2).flatten() {
            if let Some(stuck) = displace_into(&mut new_table1, &mut new_table2, new_size, key) {
                warn!(
                    "rehash: key {} unplaced after {} displacements, dropping",
                    stuck, new_size
                );
                self.len -= 1;
                dropped.push(stuck);
            }
        }

        self.size = new_size;
        self.table1 = new_table1;
        self.table2 = new_table2;
        dropped
    }
}

// --- internal logic ---

/// The displacement loop shared by insert and rehash.
///
/// Tries `table1[hash1]`, kicking the occupant to `table2[hash2]` and so on,
/// for at most `size` iterations. Returns `None` once a key lands in an empty
/// slot, or `Some(key)` with the key still in hand when the budget is
/// exhausted. Swaps performed along the way are not rolled back.
fn displace_into(
    table1: &mut [Option<u64>],
    table2: &mut [Option<u64>],
    size: usize,
    key: u64,
) -> Option<u64> {
    let mut current = key;
    let mut pos1 = hash1(current, size);
    for _ in 0..size {
        match table1[pos1] {
            None => {
                table1[pos1] = Some(current);
                return None;
            }
            Some(occupant) => {
                table1[pos1] = Some(current);
                current = occupant;
            }
        }
        let pos2 = hash2(current, size);
        match table2[pos2] {
            None => {
                table2[pos2] = Some(current);
                return None;
            }
            Some(occupant) => {
                table2[pos2] = Some(current);
                current = occupant;
            }
        }
        pos1 = hash1(current, size);
    }
    Some(current)
}
