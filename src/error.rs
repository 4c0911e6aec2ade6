//! Errors reported by [`Collection`](crate::Collection) operations.

use core::fmt;

use thiserror::Error;

/// The positional operation that rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Set,
    InsertAt,
    RemoveAt,
    Exchange,
}

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::InsertAt => "insert_at",
            Operation::RemoveAt => "remove_at",
            Operation::Exchange => "exchange",
        }
    }

    /// Whether `index == len` is accepted (insertion at the end).
    pub const fn accepts_end(self) -> bool {
        matches!(self, Operation::InsertAt)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index fell outside the range the operation accepts.
    ///
    /// `len` is the element count at the time of the call.
    #[error("index {index} out of range for {operation} (len {len})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        operation: Operation,
    },
}

impl Error {
    pub fn index(&self) -> usize {
        match self {
            Error::IndexOutOfRange { index, .. } => *index,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Error::IndexOutOfRange { operation, .. } => *operation,
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

static_assertions::assert_impl_all!(Error: Copy, Send, Sync, core::error::Error);
