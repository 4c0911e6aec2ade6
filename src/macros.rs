/// Builds a [`Collection`](crate::Collection) from a list of elements, like `vec!`.
///
/// # Example
///
/// ```
/// use collections::{Collection, collection};
///
/// let empty: Collection<i32> = collection![];
/// assert_eq!(empty.to_string(), "[]");
///
/// let names = collection!["Sam", "Kate", "Peter"];
/// assert_eq!(names.count(), 3);
/// assert_eq!(names.capacity(), 16);
/// assert_eq!(names.to_string(), "[Sam, Kate, Peter]");
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::from([$($item),+])
    };
}
