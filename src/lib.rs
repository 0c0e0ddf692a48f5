#![no_std]

//! `StepVec`: a growable vector with caller-chosen, linear capacity growth.
//!
//! `StepVec` keeps its elements in a single contiguous block and offers O(1)
//! indexed access, like `Vec`. Unlike `Vec`, it never picks a growth factor on
//! its own: whenever an insertion finds the vector full, the block grows by
//! exactly the growth increment given at construction. Allocation behavior is
//! therefore fully predictable from the sequence of operations.
//!
//! All checked operations validate their arguments before touching the
//! storage. A returned error means the vector was not changed.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Growth Policy
//!
//! - `push_back()`, `push_front()` and `insert()` grow the block by the growth
//!   increment if, and only if, `len() == capacity()` when they start. They
//!   report whether growth happened.
//! - `ensure_capacity(extra)` grows the block by exactly `extra` slots.
//! - `remove()` shrinks the block by exactly one slot, so `capacity()` drops
//!   together with `len()`.
//!
//! ```
//! # use stepvec::StepVec;
//! let mut v = StepVec::new(5).unwrap();
//!
//! assert!(v.push_back(1));        // full at 0 slots: grows to 5
//! assert!(!v.push_back(2));
//! assert!(!v.push_back(3));
//! assert!(!v.push_front(4));
//! assert_eq!(v.as_slice(), &[4, 1, 2, 3]);
//! assert_eq!(v.capacity(), 5);
//!
//! assert_eq!(v.remove(1), Ok(1));
//! assert_eq!(v.as_slice(), &[4, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//! ```
//!
//! # Time Complexity
//! - `get()`, `set()`, `push_back()` without growth: O(1)
//! - `insert()`, `push_front()`: O(len) without growth, O(capacity) with growth
//! - `remove()`: O(capacity) - the block is reallocated one slot smaller
//! - `ensure_capacity(extra)`: O(capacity + extra)
//!
//! # Indexed Access
//!
//! ```
//! # use stepvec::{StepVec, StepVecError};
//! let mut v = StepVec::from_sequence(vec![1, 2, 3, 4, 5], 5).unwrap();
//!
//! v.set(0, 3).unwrap();
//! *v.get_mut(2).unwrap() = 4;
//! assert_eq!(v.as_slice(), &[3, 2, 4, 4, 5]);
//!
//! assert_eq!(
//!     v.set(5, 10),
//!     Err(StepVecError::IndexOutOfBounds { index: 5, length: 5 })
//! );
//! ```
//!
//! # Live View
//!
//! `live_view()` exposes the live elements as a mutable slice without copying.
//! The slice borrows the vector, so the compiler rejects any growth or shift
//! while it is in use:
//!
//! ```compile_fail
//! # use stepvec::StepVec;
//! let mut v = StepVec::from_sequence(vec![1, 2, 3], 5).unwrap();
//! let view = v.live_view();
//! v.push_back(4);
//! view[0] = 2;
//! ```
//!
//! # Features
//!
//! - `std`: implements `std::error::Error` through `thiserror/std`
//! - `tracing`: emits `trace!` events whenever the backing block is replaced

extern crate alloc;

mod core;
mod error;
mod growth;
mod iter;
mod raw;
mod search;
mod shift;

// Re-export public types
pub use crate::core::StepVec;
pub use error::StepVecError;
pub use iter::IntoIter;
