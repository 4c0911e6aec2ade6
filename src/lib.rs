//! Collections - a growable, bounds-checked sequence container
//!
//! # Overview
//!
//! [`Collection<T>`] is an ordered, index-addressable sequence backed by a
//! buffer with spare capacity. Capacity is part of the public contract: a new
//! collection starts at [`DEFAULT_CAPACITY`] (16) and doubles when an insertion
//! would overflow it, never shrinking.
//!
//! Positional operations return [`Result`] and reject out-of-range indices with
//! [`Error::IndexOutOfRange`] before mutating anything.
//!
//! # Quick Start
//!
//! ```
//! use collections::{Collection, Error, collection};
//!
//! let mut names = collection!["Sam", "Kate", "Peter", "Mia"];
//!
//! assert_eq!(names.remove_at(1), Ok("Kate"));
//! assert_eq!(names.to_string(), "[Sam, Peter, Mia]");
//!
//! names.insert_at(2, "Zaffy").unwrap();
//! names.exchange(0, 3).unwrap();
//! assert_eq!(names.to_string(), "[Mia, Peter, Zaffy, Sam]");
//!
//! assert!(matches!(names.get(4), Err(Error::IndexOutOfRange { index: 4, .. })));
//!
//! let mut nums = Collection::new();
//! nums.add_range(0..100);
//! assert!(nums.capacity() >= nums.count());
//! ```
//!
//! # Index ranges
//!
//! | Operation | Valid indices |
//! |-----------|---------------|
//! | `get`, `set`, `remove_at`, `exchange` | `0..count` |
//! | `insert_at` | `0..=count` |

mod collection;
mod error;
mod macros;

pub use collection::{Collection, DEFAULT_CAPACITY};
pub use error::{Error, Operation, Result};
