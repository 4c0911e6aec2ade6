//! `Collection<T>`: a growable, bounds-checked sequence with observable capacity.
//!
//! The backing buffer is a boxed slice of `MaybeUninit<T>` whose length is the
//! capacity. Slots `[0, count)` are initialized, the rest are spare.
//!
//! ```text
//! items: [ e0 | e1 | ... | e(count-1) | ~ | ~ | ... | ~ ]
//!          └──────── live ───────────┘ └──── spare ───┘
//!                                          capacity ──┘
//! ```
//!
//! Every positional operation validates its index before touching the buffer,
//! so a rejected call leaves the collection exactly as it was.

use core::fmt;
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use crate::error::{Error, Operation, Result};

/// Capacity of a freshly constructed collection.
pub const DEFAULT_CAPACITY: usize = 16;

pub struct Collection<T> {
    items: Box<[MaybeUninit<T>]>,
    count: usize,
}

static_assertions::assert_impl_all!(Collection<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Collection<std::rc::Rc<u8>>: Send, Sync);

impl<T> Collection<T> {
    /// Creates an empty collection with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty collection with room for at least `capacity` elements.
    ///
    /// The capacity never starts below [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Box::new_uninit_slice(capacity.max(DEFAULT_CAPACITY)),
            count: 0,
        }
    }

    /// Creates a collection holding `items` in order.
    ///
    /// The buffer grows at most once, when there are more than
    /// [`DEFAULT_CAPACITY`] items.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut collection = Self::new();
        collection.add_range(items);
        collection
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots in the backing buffer, always `>= count()`.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the element at `index`, or `IndexOutOfRange` past the end.
    pub fn get(&self, index: usize) -> Result<&T> {
        let index = self.check_index(index, Operation::Get)?;
        Ok(&self.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.slot_mut(index, Operation::Get)
    }

    /// Overwrites the element at `index`, dropping the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.slot_mut(index, Operation::Set)? = value;
        Ok(())
    }

    /// Appends `value`, doubling the buffer when it is full.
    pub fn add(&mut self, value: T) {
        self.reserve(1);
        self.items[self.count].write(value);
        self.count += 1;
    }

    /// Appends every value from `values`, preserving their order.
    ///
    /// The buffer grows at most once per call. Sources that report an exact
    /// size are reserved for up front; any other source is first drained into
    /// a scratch buffer so its length is known before growing.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        match values.size_hint() {
            (lower, Some(upper)) if lower == upper => self.append_exact(lower, values),
            _ => {
                let pending: Vec<T> = values.collect();
                self.append_exact(pending.len(), pending);
            }
        }
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == count` appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let index = self.check_index(index, Operation::InsertAt)?;
        self.reserve(1);
        // Moves the spare slot at `count` down to `index`.
        self.items[index..=self.count].rotate_right(1);
        self.items[index].write(value);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let index = self.check_index(index, Operation::RemoveAt)?;
        self.items[index..self.count].rotate_left(1);
        self.count -= 1;
        // SAFETY: the rotation parked the removed element at the old last
        // slot, which is initialized and now outside the live prefix.
        Ok(unsafe { self.items[self.count].assume_init_read() })
    }

    /// Swaps the elements at `a` and `b`. Both indices are validated first.
    pub fn exchange(&mut self, a: usize, b: usize) -> Result<()> {
        let a = self.check_index(a, Operation::Exchange)?;
        let b = self.check_index(b, Operation::Exchange)?;
        self.as_mut_slice().swap(a, b);
        Ok(())
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        let len = self.count;
        self.count = 0;
        // SAFETY: the first `len` slots were initialized and, with `count`
        // reset, are no longer reachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.items.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Ensures room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.count.saturating_add(additional);
        if required > self.capacity() {
            self.grow(required);
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, count)` are initialized.
        unsafe { slice::from_raw_parts(self.items.as_ptr().cast::<T>(), self.count) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Appends `values`, which must yield exactly `len` items.
    fn append_exact<I: IntoIterator<Item = T>>(&mut self, len: usize, values: I) {
        self.reserve(len);
        for value in values {
            self.add(value);
        }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots `[0, count)` are initialized.
        unsafe { slice::from_raw_parts_mut(self.items.as_mut_ptr().cast::<T>(), self.count) }
    }

    fn slot_mut(&mut self, index: usize, operation: Operation) -> Result<&mut T> {
        let index = self.check_index(index, operation)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// The single bounds guard for every positional operation.
    ///
    /// Accepts `[0, count)`, or `[0, count]` for operations that may address
    /// the end.
    fn check_index(&self, index: usize, operation: Operation) -> Result<usize> {
        let in_range = if operation.accepts_end() {
            index <= self.count
        } else {
            index < self.count
        };
        if in_range {
            return Ok(index);
        }
        tracing::debug!(index, len = self.count, %operation, "index out of range");
        Err(Error::IndexOutOfRange {
            index,
            len: self.count,
            operation,
        })
    }

    #[cold]
    fn grow(&mut self, required: usize) {
        debug_assert!(required > self.capacity());
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(2).max(required);
        let mut items = Box::new_uninit_slice(new_capacity);
        let count = self.count;
        items[..count].swap_with_slice(&mut self.items[..count]);
        self.items = items;
        tracing::trace!(old_capacity, new_capacity, required, "grew collection buffer");
    }
}

impl<T> Drop for Collection<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.capacity());
        cloned.add_range(self.iter().cloned());
        cloned
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[a, b, c]`; an empty collection renders as `[]`.
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.slot_mut(index, Operation::Set) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_default_capacity() {
        let nums = Collection::<i32>::new();
        assert_eq!(nums.count(), 0);
        assert_eq!(nums.capacity(), DEFAULT_CAPACITY);
        assert!(nums.is_empty());
    }

    #[test]
    fn test_with_capacity_floor() {
        assert_eq!(Collection::<u8>::with_capacity(0).capacity(), 16);
        assert_eq!(Collection::<u8>::with_capacity(5).capacity(), 16);
        assert_eq!(Collection::<u8>::with_capacity(40).capacity(), 40);
    }

    #[test]
    fn test_grow_doubles() {
        let mut nums = Collection::new();
        for i in 0..16 {
            nums.add(i);
        }
        assert_eq!(nums.capacity(), 16);

        nums.add(16);
        assert_eq!(nums.count(), 17);
        assert_eq!(nums.capacity(), 32);
        assert_eq!(nums.as_slice(), (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn test_grow_to_required_when_doubling_is_short() {
        let mut nums = Collection::new();
        nums.add_range(0..100);
        assert_eq!(nums.count(), 100);
        assert_eq!(nums.capacity(), 100);

        nums.reserve(500);
        assert_eq!(nums.capacity(), 600);
    }

    #[test]
    fn test_add_range_unsized_source_grows_once() {
        let mut nums = Collection::new();
        nums.add_range((0..1000).filter(|n| n % 2 == 0));
        assert_eq!(nums.count(), 500);
        // Doubling per element would have stopped at 512.
        assert_eq!(nums.capacity(), 500);
        assert_eq!(nums.as_slice(), (0..1000).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn test_reserve_within_capacity_is_noop() {
        let mut nums = Collection::<i32>::new();
        nums.reserve(16);
        assert_eq!(nums.capacity(), 16);
    }

    #[test]
    fn test_insert_at_full_buffer() {
        let mut nums: Collection<i32> = (1..=16).collect();
        assert_eq!(nums.capacity(), 16);

        nums.insert_at(0, 0).unwrap();
        assert_eq!(nums.capacity(), 32);
        assert_eq!(nums.as_slice(), (0..=16).collect::<Vec<_>>());
    }

    #[test]
    fn test_check_index_bounds() {
        let nums = Collection::from([1, 2]);
        assert_eq!(nums.check_index(1, Operation::Get), Ok(1));
        assert!(nums.check_index(2, Operation::Get).is_err());
        assert_eq!(nums.check_index(2, Operation::InsertAt), Ok(2));
        assert!(nums.check_index(3, Operation::InsertAt).is_err());
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut units = Collection::new();
        for _ in 0..40 {
            units.add(());
        }
        assert_eq!(units.count(), 40);
        assert!(units.capacity() >= 40);
        assert_eq!(units.remove_at(39), Ok(()));
        units.clear();
        assert!(units.is_empty());
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut names = Collection::with_capacity(64);
        names.add_range(["a".to_string(), "b".to_string()]);

        let cloned = names.clone();
        assert_eq!(cloned, names);
        assert_eq!(cloned.capacity(), 64);
    }

    #[test]
    fn test_debug_is_list() {
        let names = Collection::from(["Sam", "Kate"]);
        assert_eq!(format!("{names:?}"), r#"["Sam", "Kate"]"#);
    }

    #[test]
    fn test_display_ignores_width() {
        let nums = Collection::from([1, 2]);
        assert_eq!(format!("{nums:>10}"), "[1, 2]");
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for get (len 2)")]
    fn test_index_out_of_range_panics() {
        let nums = Collection::from([1, 2]);
        let _value = nums[2];
    }

    #[test]
    #[should_panic(expected = "index 0 out of range for set (len 0)")]
    fn test_index_mut_out_of_range_panics() {
        let mut nums = Collection::<i32>::new();
        nums[0] = 1;
    }
}
