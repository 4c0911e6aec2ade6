//! Shared helpers for collection integration tests.

#![allow(dead_code)]

use collections::Collection;

/// Install a `tracing` subscriber honoring `RUST_LOG`. Safe to call from
/// every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The four-name fixture most scenarios start from.
pub fn names() -> Collection<String> {
    ["Sam", "Kate", "Peter", "Mia"].map(String::from).into()
}

/// Splits `"a, b, c"` into a collection of owned strings. Empty input yields
/// an empty collection.
pub fn split(data: &str) -> Collection<String> {
    data.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Assert that `$result` failed with `IndexOutOfRange` for the given index and
/// operation.
#[macro_export]
macro_rules! assert_out_of_range {
    ($result:expr, $index:expr, $operation:ident) => {
        match $result {
            Err(collections::Error::IndexOutOfRange {
                index,
                operation: collections::Operation::$operation,
                ..
            }) if index == $index => {}
            other => panic!(
                "Expected IndexOutOfRange {{ index: {}, operation: {} }} but got {:?}",
                $index,
                stringify!($operation),
                other
            ),
        }
    };
}
