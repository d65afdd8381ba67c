//! A [`GrowableDeque`] is a double-ended array that keeps its elements in the middle of one contiguous buffer.
//! Pushing at either end is amortized O(1): when the write lands outside the buffer, the buffer doubles and the elements are re-centered so both sides get the same amount of slack.
//! Writing past the end is allowed and fills the skipped indices with default values.
//! Depending on the [`ReadPolicy`], reading past the end either does the same or just hands back a default value.

use crate::settings::{strategy_of, AutoExtend, DefaultOnMiss, ReadPolicy, ReadStrategy, INITIAL_CAPACITY};
use crate::DequeError;
use std::fmt::{self, Debug, Display};

/// A growable double-ended array backed by a single centered buffer.
///
/// The live elements occupy `origin..end` inside the buffer; whatever sits outside that window is spare capacity holding default values.
/// Logical indices are signed so that negative indices can be reported instead of wrapping.
///
/// # Examples
/// ```
/// use growable_deque::GrowableDeque;
/// let mut deque = GrowableDeque::new();
/// deque.push(2);
/// deque.push_front(1);
/// deque.push(3);
/// assert_eq!(deque.as_slice(), &[1, 2, 3]);
/// ```
///
/// # Sparse writes
/// ```
/// use growable_deque::GrowableDeque;
/// let mut deque = GrowableDeque::new();
/// deque.set(3, 7.5).unwrap();
/// assert_eq!(deque.len(), 4);
/// assert_eq!(deque.as_slice(), &[0.0, 0.0, 0.0, 7.5]);
/// ```
///
/// # Read Policy
/// The default policy ([`AutoExtend`]) makes `get` past the end grow the deque, like a write of `T::default()` would.
/// With [`DefaultOnMiss`] the same read returns `T::default()` by value and leaves the deque alone.
/// `safe_get` rejects out-of-range indices under both policies.
pub struct GrowableDeque<T, Read = AutoExtend>
where
    Read: ReadPolicy,
{
    pub(crate) buffer: Box<[T]>,
    pub(crate) origin: usize,
    pub(crate) end: usize,
    pub(crate) read: Read,
}

/// A snapshot of where the live region sits inside a deque's buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DequeLayout {
    pub capacity: usize,
    pub origin: usize,
    pub end: usize,
    pub len: usize,
    pub policy: ReadStrategy,
}

impl Display for DequeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity: {}\norigin: {}\nend: {}\nsize: {}\npolicy: {:?}",
            self.capacity, self.origin, self.end, self.len, self.policy
        )
    }
}

#[inline]
fn default_buffer<T: Default>(cap: usize) -> Box<[T]> {
    std::iter::repeat_with(T::default).take(cap).collect()
}

impl<T: Default> GrowableDeque<T> {
    /// Creates a new, empty `GrowableDeque` using the [`AutoExtend`] read policy.
    /// The buffer starts at [`INITIAL_CAPACITY`] slots with the empty live region in its middle.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let deque: GrowableDeque<i32> = GrowableDeque::new();
    /// assert_eq!(deque.capacity(), 10);
    /// assert_eq!(deque.origin(), 5);
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        GrowableDeque::default()
    }

    /// Creates a new, empty `GrowableDeque` with the given read policy.
    ///
    /// # Examples
    /// ```
    /// use growable_deque::{GrowableDeque, DefaultOnMiss};
    /// let mut deque = GrowableDeque::<i32>::new_with_read_policy::<DefaultOnMiss>();
    /// deque.push(1);
    /// assert_eq!(deque.get(4), Ok(0));
    /// assert_eq!(deque.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new_with_read_policy<P>() -> GrowableDeque<T, P>
    where
        P: ReadPolicy,
    {
        GrowableDeque::default()
    }
}

impl<T, Read> GrowableDeque<T, Read>
where
    Read: ReadPolicy,
{
    /// Changes the read policy of the `GrowableDeque`, keeping its buffer as is.
    ///
    /// # Examples
    /// ```
    /// use growable_deque::{GrowableDeque, DefaultOnMiss};
    /// let mut deque = GrowableDeque::new();
    /// deque.push(1);
    /// let deque = deque.with_read_policy::<DefaultOnMiss>();
    /// assert_eq!(deque.get(3), Ok(0));
    /// assert_eq!(deque.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_read_policy<P>(self) -> GrowableDeque<T, P>
    where
        P: ReadPolicy,
    {
        GrowableDeque {
            buffer: self.buffer,
            origin: self.origin,
            end: self.end,
            read: P::default(),
        }
    }

    /// Translates a logical index into a buffer offset. The result may lie outside the buffer.
    #[inline]
    pub fn index_to_offset(&self, index: isize) -> isize {
        index + self.origin as isize
    }

    /// Translates a buffer offset back into a logical index; offsets before the origin give negative indices.
    #[inline]
    pub fn offset_to_index(&self, offset: isize) -> isize {
        offset - self.origin as isize
    }

    #[inline]
    pub fn out_of_buffer(&self, offset: isize) -> bool {
        offset < 0 || offset >= self.buffer.len() as isize
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.origin
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.origin
    }

    /// Returns the total number of slots in the buffer, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the buffer offset of logical index 0.
    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Returns the buffer offset one past the last element.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns how many elements can be pushed to the front before the buffer grows.
    #[inline]
    pub fn space_front(&self) -> usize {
        self.origin
    }

    /// Returns how many elements can be pushed to the back before the buffer grows.
    #[inline]
    pub fn space_back(&self) -> usize {
        self.buffer.len() - self.end
    }

    /// Describes the current buffer layout. Meant for diagnostics.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let mut deque = GrowableDeque::new();
    /// deque.push('a');
    /// let layout = deque.layout();
    /// assert_eq!((layout.capacity, layout.origin, layout.end, layout.len), (10, 5, 6, 1));
    /// ```
    #[inline]
    pub fn layout(&self) -> DequeLayout {
        DequeLayout {
            capacity: self.capacity(),
            origin: self.origin,
            end: self.end,
            len: self.len(),
            policy: strategy_of::<Read>(),
        }
    }

    /// Returns a reference to the element at `index`, failing unless `0 <= index < len`.
    /// This never changes the deque, whatever the read policy.
    ///
    /// # Examples
    /// ```
    /// use growable_deque::{GrowableDeque, DequeError};
    /// let mut deque = GrowableDeque::new();
    /// deque.push(10);
    /// assert_eq!(deque.safe_get(0), Ok(&10));
    /// assert_eq!(deque.safe_get(1), Err(DequeError::OutOfRange { index: 1, len: 1 }));
    /// assert_eq!(deque.safe_get(-1), Err(DequeError::OutOfRange { index: -1, len: 1 }));
    /// ```
    #[inline]
    pub fn safe_get(&self, index: isize) -> Result<&T, DequeError> {
        let offset = self.checked_offset(index)?;
        Ok(&self.buffer[offset])
    }

    /// Mutable counterpart of [`safe_get`](GrowableDeque::safe_get), with the same bounds.
    #[inline]
    pub fn safe_get_mut(&mut self, index: isize) -> Result<&mut T, DequeError> {
        let offset = self.checked_offset(index)?;
        Ok(&mut self.buffer[offset])
    }

    #[inline]
    fn checked_offset(&self, index: isize) -> Result<usize, DequeError> {
        if index < 0 || index as usize >= self.len() {
            return Err(DequeError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.index_to_offset(index) as usize)
    }

    /// Returns the first element, or `None` if the deque is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if the deque is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Extracts a slice of the live elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[self.origin..self.end]
    }

    /// Extracts a mutable slice of the live elements.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[self.origin..self.end]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Reverses the order of the elements in place and returns the deque for chaining.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let mut deque = GrowableDeque::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(deque.reverse().as_slice(), &[6, 5, 4, 3, 2, 1]);
    /// ```
    #[inline]
    pub fn reverse(&mut self) -> &mut Self {
        self.as_mut_slice().reverse();
        self
    }
}

impl<T, Read> GrowableDeque<T, Read>
where
    T: Default,
    Read: ReadPolicy,
{
    // Doubles the buffer and re-centers the live region in it, so the slack is split evenly between both ends.
    pub(crate) fn grow(&mut self) {
        let old_cap = self.buffer.len();
        let new_cap = 2 * old_cap;
        let len = self.len();
        // old_cap >= len, so the region fits and keeps at least old_cap / 2 slots on either side
        let new_origin = old_cap - len / 2;

        let mut new_buffer = default_buffer::<T>(new_cap);
        let live = &mut self.buffer[self.origin..self.end];
        for (slot, elem) in new_buffer[new_origin..new_origin + len]
            .iter_mut()
            .zip(live.iter_mut())
        {
            std::mem::swap(slot, elem);
        }

        self.buffer = new_buffer;
        self.origin = new_origin;
        self.end = new_origin + len;
        log::trace!(
            "grew deque buffer from {} to {} slots, origin now {}",
            old_cap,
            new_cap,
            new_origin
        );
    }

    // Stores `value` at logical `index`, growing as many times as needed and extending the end past it.
    fn write_at(&mut self, index: usize, value: T) {
        let index = index as isize;
        while self.out_of_buffer(self.index_to_offset(index)) {
            self.grow();
        }
        let offset = self.index_to_offset(index) as usize;
        self.buffer[offset] = value;
        if offset >= self.end {
            self.end = offset + 1;
        }
    }

    /// Writes `value` at `index`. Writing at or past the end extends the deque, and every skipped index reads as `T::default()`.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidIndex`] if `index` is negative; the deque is left untouched.
    ///
    /// # Examples
    /// ```
    /// use growable_deque::{GrowableDeque, DequeError};
    /// let mut deque = GrowableDeque::new();
    /// deque.set(1000, 1u8).unwrap();
    /// assert_eq!(deque.len(), 1001);
    /// assert_eq!(deque.safe_get(999), Ok(&0));
    /// assert_eq!(deque.set(-1, 2), Err(DequeError::InvalidIndex(-1)));
    /// ```
    #[inline]
    pub fn set(&mut self, index: isize, value: T) -> Result<(), DequeError> {
        if index < 0 {
            return Err(DequeError::InvalidIndex(index));
        }
        self.write_at(index as usize, value);
        Ok(())
    }

    /// Appends an element to the back of the deque.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.write_at(self.len(), value);
    }

    /// Prepends an element to the front of the deque.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let mut deque = GrowableDeque::from([1, 2]);
    /// deque.push_front(0);
    /// assert_eq!(deque.as_slice(), &[0, 1, 2]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, value: T) {
        while self.origin == 0 {
            self.grow();
        }
        self.origin -= 1;
        self.buffer[self.origin] = value;
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use growable_deque::{GrowableDeque, DequeError};
    /// let mut deque = GrowableDeque::from([42, 10]);
    /// assert_eq!(deque.pop(), Ok(10));
    /// assert_eq!(deque.pop(), Ok(42));
    /// assert_eq!(deque.pop(), Err(DequeError::Underflow));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Underflow);
        }
        self.end -= 1;
        Ok(std::mem::take(&mut self.buffer[self.end]))
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Underflow`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use growable_deque::{GrowableDeque, DequeError};
    /// let mut deque = GrowableDeque::from([42, 10]);
    /// assert_eq!(deque.pop_front(), Ok(42));
    /// assert_eq!(deque.pop_front(), Ok(10));
    /// assert_eq!(deque.pop_front(), Err(DequeError::Underflow));
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Underflow);
        }
        let value = std::mem::take(&mut self.buffer[self.origin]);
        self.origin += 1;
        Ok(value)
    }

    /// Removes every element. The capacity is kept and the empty region moves back to the middle of the buffer.
    #[inline]
    pub fn clear(&mut self) {
        for slot in self.as_mut_slice() {
            *slot = T::default();
        }
        self.origin = self.buffer.len() / 2;
        self.end = self.origin;
    }

    /// Builds a new deque holding `f` applied to every element, in order.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let deque = GrowableDeque::from([1, 2, 3]);
    /// let doubled: GrowableDeque<i64> = deque.map(|x| i64::from(*x) * 2);
    /// assert_eq!(doubled.as_slice(), &[2, 4, 6]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> GrowableDeque<U, Read>
    where
        U: Default,
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }
}

impl<T, Read> GrowableDeque<T, Read>
where
    T: Clone + Default,
    Read: ReadPolicy,
{
    /// Returns a new deque with this deque's elements followed by `other`'s. Neither operand changes.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let a = GrowableDeque::from([1, 2]);
    /// let b = GrowableDeque::from([3]);
    /// let c = a.concat(&b);
    /// assert_eq!(c.as_slice(), &[1, 2, 3]);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(b.len(), 1);
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        let mut result = GrowableDeque::default();
        for elem in self.iter().chain(other.iter()) {
            result.push(elem.clone());
        }
        result
    }

    /// Copies the logical indices `start..end` into a new deque.
    /// Indices at or past `len()` come out as `T::default()`.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidRange`] if `end < start`.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let deque = GrowableDeque::from([1, 2, 3]);
    /// let sub = deque.subarray(1, 5).unwrap();
    /// assert_eq!(sub.as_slice(), &[2, 3, 0, 0]);
    /// ```
    pub fn subarray(&self, start: usize, end: usize) -> Result<Self, DequeError> {
        if end < start {
            return Err(DequeError::InvalidRange(format!(
                "subarray end {} is before start {}",
                end, start
            )));
        }
        let live = self.as_slice();
        Ok((start..end)
            .map(|i| live.get(i).cloned().unwrap_or_default())
            .collect())
    }
}

impl<T: Default> GrowableDeque<T, AutoExtend> {
    /// Returns a mutable reference to the element at `index`.
    /// If `index` is at or past the end, `T::default()` is written there first, so the deque grows and the gap is filled with defaults.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidIndex`] if `index` is negative.
    ///
    /// # Examples
    /// ```
    /// # use growable_deque::GrowableDeque;
    /// let mut deque: GrowableDeque<f64> = GrowableDeque::new();
    /// assert_eq!(*deque.get(20).unwrap(), 0.0);
    /// assert_eq!(deque.len(), 21);
    /// *deque.get(0).unwrap() = 1.5;
    /// assert_eq!(deque.safe_get(0), Ok(&1.5));
    /// ```
    #[inline]
    pub fn get(&mut self, index: isize) -> Result<&mut T, DequeError> {
        if index < 0 {
            return Err(DequeError::InvalidIndex(index));
        }
        let index = index as usize;
        if index >= self.len() {
            self.write_at(index, T::default());
        }
        let offset = self.origin + index;
        Ok(&mut self.buffer[offset])
    }
}

impl<T: Default + Clone> GrowableDeque<T, DefaultOnMiss> {
    /// Returns a copy of the element at `index`, or `T::default()` if `index` is at or past the end.
    /// The deque is never modified.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidIndex`] if `index` is negative.
    #[inline]
    pub fn get(&self, index: isize) -> Result<T, DequeError> {
        if index < 0 {
            return Err(DequeError::InvalidIndex(index));
        }
        Ok(self
            .as_slice()
            .get(index as usize)
            .cloned()
            .unwrap_or_default())
    }
}

impl<T: Default, Read: ReadPolicy> Default for GrowableDeque<T, Read> {
    #[inline]
    fn default() -> Self {
        let origin = INITIAL_CAPACITY / 2;
        GrowableDeque {
            buffer: default_buffer(INITIAL_CAPACITY),
            origin,
            end: origin,
            read: Read::default(),
        }
    }
}

impl<T, Read> Clone for GrowableDeque<T, Read>
where
    T: Clone + Default,
    Read: ReadPolicy,
{
    // Same capacity as the source, re-centered, every element cloned into fresh storage.
    fn clone(&self) -> Self {
        let cap = self.capacity();
        let len = self.len();
        let origin = cap / 2 - len / 2;
        let mut buffer = default_buffer::<T>(cap);
        buffer[origin..origin + len].clone_from_slice(self.as_slice());
        GrowableDeque {
            buffer,
            origin,
            end: origin + len,
            read: self.read,
        }
    }
}

impl<T: Debug, Read: ReadPolicy> Debug for GrowableDeque<T, Read> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

/// Renders the elements as `[v1,v2,...]`. This is for humans, not a serialization format.
impl<T: Display, Read: ReadPolicy> Display for GrowableDeque<T, Read> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(elem, f)?;
        }
        f.write_str("]")
    }
}

impl<'a, T, Read> std::ops::Add<&'a GrowableDeque<T, Read>> for &'a GrowableDeque<T, Read>
where
    T: Clone + Default,
    Read: ReadPolicy,
{
    type Output = GrowableDeque<T, Read>;

    #[inline]
    fn add(self, other: &'a GrowableDeque<T, Read>) -> Self::Output {
        self.concat(other)
    }
}

impl<T, Read: ReadPolicy> AsRef<[T]> for GrowableDeque<T, Read> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, Read: ReadPolicy> AsMut<[T]> for GrowableDeque<T, Read> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// An owning iterator over the elements of a [`GrowableDeque`], popping from whichever end is asked for.
pub struct IntoIter<T, Read>
where
    Read: ReadPolicy,
{
    deque: GrowableDeque<T, Read>,
}

impl<T: Default, Read: ReadPolicy> IntoIterator for GrowableDeque<T, Read> {
    type Item = T;
    type IntoIter = IntoIter<T, Read>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T, Read: ReadPolicy> IntoIterator for &'a GrowableDeque<T, Read> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Read: ReadPolicy> IntoIterator for &'a mut GrowableDeque<T, Read> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Default, Read: ReadPolicy> Iterator for IntoIter<T, Read> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T: Default, Read: ReadPolicy> DoubleEndedIterator for IntoIter<T, Read> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop().ok()
    }
}

impl<T: Default, Read: ReadPolicy> ExactSizeIterator for IntoIter<T, Read> {
    #[inline]
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<T: Default, Read: ReadPolicy> std::iter::FusedIterator for IntoIter<T, Read> {}

impl<T: Default, Read: ReadPolicy> FromIterator<T> for GrowableDeque<T, Read> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = GrowableDeque::default();
        deque.extend(iter);
        deque
    }
}

impl<T: Default, Read: ReadPolicy> Extend<T> for GrowableDeque<T, Read> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Default> From<Vec<T>> for GrowableDeque<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Default, const N: usize> From<[T; N]> for GrowableDeque<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

// equality and hashing only ever look at the logical sequence, never at the buffer layout
impl<T: PartialEq, Read: ReadPolicy> PartialEq for GrowableDeque<T, Read> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, Read: ReadPolicy> Eq for GrowableDeque<T, Read> {}

impl<T: PartialEq, Read: ReadPolicy> PartialEq<[T]> for GrowableDeque<T, Read> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, Read: ReadPolicy> PartialEq<Vec<T>> for GrowableDeque<T, Read> {
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, Read: ReadPolicy, const N: usize> PartialEq<[T; N]> for GrowableDeque<T, Read> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: std::hash::Hash, Read: ReadPolicy> std::hash::Hash for GrowableDeque<T, Read> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, Read> Serialize for GrowableDeque<T, Read>
    where
        T: Serialize,
        Read: ReadPolicy,
    {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.as_slice().serialize(serializer)
        }
    }

    impl<'src, T, Read> Deserialize<'src> for GrowableDeque<T, Read>
    where
        T: Deserialize<'src> + Default,
        Read: ReadPolicy,
    {
        #[inline]
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = <Vec<T> as Deserialize<'src>>::deserialize(deserializer)?;
            Ok(vec.into_iter().collect())
        }
    }

}

/// A version of the [`vec!`] macro for [`GrowableDeque`], using the default [`AutoExtend`] read policy.
/// # Examples
/// ```
/// # use growable_deque::deque;
/// let deque = deque![1, 2, 3];
/// assert_eq!(deque.as_slice(), &[1, 2, 3]);
/// ```
/// ```
/// # use growable_deque::deque;
/// let deque = deque!['x'; 4];
/// assert_eq!(deque.as_slice(), &['x'; 4]);
/// ```
/// ```
/// # use growable_deque::{GrowableDeque, deque};
/// let deque: GrowableDeque<i32> = deque![];
/// assert!(deque.is_empty());
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::GrowableDeque::<_>::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::GrowableDeque<_> as ::std::iter::FromIterator<_>>::from_iter(
            ::std::iter::repeat($elem).take($n),
        )
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::GrowableDeque<_> as ::std::convert::From<_>>::from([$($x),+])
    };
}

#[cfg(test)]
mod deque_tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_invariants<T, R: ReadPolicy>(deque: &GrowableDeque<T, R>) {
        assert!(deque.origin <= deque.end);
        assert!(deque.end <= deque.capacity());
        assert_eq!(deque.capacity() % INITIAL_CAPACITY, 0);
        assert!((deque.capacity() / INITIAL_CAPACITY).is_power_of_two());
    }

    #[test]
    fn new_is_centered() {
        let deque: GrowableDeque<i32> = GrowableDeque::new();
        assert_eq!(deque.capacity(), INITIAL_CAPACITY);
        assert_eq!(deque.origin(), INITIAL_CAPACITY / 2);
        assert_eq!(deque.end(), INITIAL_CAPACITY / 2);
        assert_eq!(deque.len(), 0);
    }

    #[test]
    fn offsets_translate_both_ways() {
        let deque: GrowableDeque<i32> = GrowableDeque::new();
        assert_eq!(deque.index_to_offset(3), 8);
        assert_eq!(deque.offset_to_index(8), 3);
        assert_eq!(deque.offset_to_index(0), -5);
        assert!(!deque.out_of_buffer(0));
        assert!(!deque.out_of_buffer(9));
        assert!(deque.out_of_buffer(10));
        assert!(deque.out_of_buffer(-1));
    }

    #[test]
    fn push_increments_len() {
        let mut deque = GrowableDeque::new();
        for i in 0..50 {
            if i % 3 == 0 {
                deque.push_front(i);
            } else {
                deque.push(i);
            }
            assert_eq!(deque.len(), i as usize + 1);
            assert_invariants(&deque);
        }
    }

    #[test]
    fn set_then_safe_get_round_trips() {
        let mut deque = GrowableDeque::new();
        for &i in &[0isize, 7, 3, 64, 12] {
            deque.set(i, i * 10).unwrap();
            assert_eq!(deque.safe_get(i), Ok(&(i * 10)));
        }
        assert_invariants(&deque);
    }

    #[test]
    fn auto_extend_read_fills_defaults() {
        let mut deque: GrowableDeque<f64> = GrowableDeque::new();
        assert_eq!(*deque.get(20).unwrap(), 0.0);
        assert_eq!(*deque.get(0).unwrap(), 0.0);
        assert_eq!(*deque.get(1).unwrap(), 0.0);
        assert_eq!(deque.len(), 21);
        assert_eq!(deque.get(-1).unwrap_err(), DequeError::InvalidIndex(-1));
    }

    #[test]
    fn default_on_miss_read_does_not_grow() {
        let mut deque = GrowableDeque::<f64>::new_with_read_policy::<DefaultOnMiss>();
        deque.push(2.5);
        assert_eq!(deque.get(20), Ok(0.0));
        assert_eq!(deque.get(0), Ok(2.5));
        assert_eq!(deque.len(), 1);
        assert_eq!(deque.get(-2), Err(DequeError::InvalidIndex(-2)));
        assert_eq!(deque.layout().policy, ReadStrategy::DefaultOnMiss);
    }

    #[test]
    fn safe_get_is_strict() {
        let mut deque = GrowableDeque::new();
        assert_eq!(
            deque.safe_get(0),
            Err(DequeError::OutOfRange { index: 0, len: 0 })
        );
        deque.push(1);
        assert!(deque.safe_get(1).is_err());
        assert!(deque.safe_get(-1).is_err());
        *deque.safe_get_mut(0).unwrap() = 5;
        assert_eq!(deque.as_slice(), &[5]);
    }

    #[test]
    fn negative_set_leaves_deque_untouched() {
        let mut deque = GrowableDeque::from([1, 2]);
        let before = deque.layout();
        assert_eq!(deque.set(-4, 9), Err(DequeError::InvalidIndex(-4)));
        assert_eq!(deque.layout(), before);
        assert_eq!(deque, [1, 2]);
    }

    #[test]
    fn stack_queue_duality() {
        let mut deque = GrowableDeque::new();
        deque.push(1);
        deque.push(2);
        deque.push_front(0);
        assert_eq!(deque, [0, 1, 2]);
        assert_eq!(deque.pop(), Ok(2));
        assert_eq!(deque.pop_front(), Ok(0));
        assert_eq!(deque.pop(), Ok(1));
        assert_eq!(deque.len(), 0);
    }

    #[test]
    fn pops_on_empty_underflow() {
        let mut deque: GrowableDeque<i32> = GrowableDeque::new();
        assert_eq!(deque.pop(), Err(DequeError::Underflow));
        assert_eq!(deque.pop_front(), Err(DequeError::Underflow));
        assert_eq!(deque.layout(), GrowableDeque::<i32>::new().layout());
    }

    #[test]
    fn pops_reset_vacated_slots() {
        let mut deque = GrowableDeque::from([7, 8, 9]);
        let front = deque.origin;
        let back = deque.end - 1;
        deque.pop_front().unwrap();
        deque.pop().unwrap();
        assert_eq!(deque.buffer[front], 0);
        assert_eq!(deque.buffer[back], 0);
        // a sparse write over the vacated back slot must see a default there
        deque.set(2, 1).unwrap();
        assert_eq!(deque, [8, 0, 1]);
    }

    #[test]
    fn concat_leaves_operands_alone() {
        let a = GrowableDeque::from([1, 2, 3]);
        let b = GrowableDeque::from([4, 5]);
        let c = a.concat(&b);
        assert_eq!(c, [1, 2, 3, 4, 5]);
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(b, [4, 5]);
        assert_eq!(&a + &b, c);
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut deque = GrowableDeque::from([1, 2, 3, 4, 5, 6]);
        deque.reverse();
        assert_eq!(deque, [6, 5, 4, 3, 2, 1]);
        deque.reverse().reverse();
        assert_eq!(deque, [6, 5, 4, 3, 2, 1]);
        deque.reverse();
        assert_eq!(deque, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn far_write_crosses_several_doublings() {
        init_logging();
        let mut deque = GrowableDeque::new();
        deque.set(1000, 1.0).unwrap();
        assert_eq!(deque.len(), 1001);
        assert!(deque.capacity() > 1000);
        assert_invariants(&deque);
        for i in 0..1000 {
            assert_eq!(deque.safe_get(i), Ok(&0.0));
        }
        assert_eq!(deque.safe_get(1000), Ok(&1.0));
    }

    #[test]
    fn growth_recenters_live_region() {
        init_logging();
        let mut deque = GrowableDeque::new();
        for i in 0..5 {
            deque.push(i);
        }
        for i in 1..=5 {
            deque.push_front(-i);
        }
        assert_eq!(deque.capacity(), 10);
        assert_eq!(deque.space_front(), 0);
        assert_eq!(deque.space_back(), 0);

        deque.push_front(-6);
        assert_eq!(deque.capacity(), 20);
        // the 10 old elements sat in 5..15 before the new front element went in
        assert_eq!(deque.space_front(), 4);
        assert_eq!(deque.space_back(), 5);
        assert_eq!(deque.len(), 11);
        assert_eq!(deque.first(), Some(&-6));
        assert_eq!(deque.last(), Some(&4));
        assert_invariants(&deque);
    }

    #[test]
    fn layout_reports_cursors() {
        let mut deque = GrowableDeque::new();
        deque.push(1.5);
        deque.push_front(0.5);
        let layout = deque.layout();
        assert_eq!(layout.policy, ReadStrategy::AutoExtend);
        assert_eq!(
            layout.to_string(),
            "capacity: 10\norigin: 4\nend: 6\nsize: 2\npolicy: AutoExtend"
        );
    }

    #[test]
    fn clone_is_deep() {
        let mut a: GrowableDeque<GrowableDeque<String>> = GrowableDeque::new();
        a.push(GrowableDeque::from(["x".to_string()]));
        let b = a.clone();
        a.get(0).unwrap().set(0, "y".to_string()).unwrap();
        a.get(0).unwrap().push("z".to_string());
        assert_eq!(b.safe_get(0).unwrap().as_slice(), &["x".to_string()]);

        let mut c = b.clone();
        c.set(0, GrowableDeque::new()).unwrap();
        assert_eq!(b.safe_get(0).unwrap().len(), 1);
        assert_eq!(b.capacity(), c.capacity());
    }

    #[test]
    fn clone_recenters() {
        let mut deque = GrowableDeque::new();
        for i in 0..4 {
            deque.push(i);
        }
        let copy = deque.clone();
        assert_eq!(copy, deque);
        assert_eq!(copy.capacity(), deque.capacity());
        assert_eq!(copy.origin(), 3);
        assert_eq!(copy.end(), 7);
    }

    #[test]
    fn display_and_debug() {
        let deque = GrowableDeque::from([1, 2, 3]);
        assert_eq!(deque.to_string(), "[1,2,3]");
        assert_eq!(format!("{:?}", deque), "[1, 2, 3]");
        let empty: GrowableDeque<u8> = GrowableDeque::new();
        assert_eq!(empty.to_string(), "[]");
    }

    #[test]
    fn equality_ignores_layout() {
        let mut a = GrowableDeque::new();
        a.push(1);
        a.push(2);
        let mut b = GrowableDeque::new();
        b.push_front(2);
        b.push_front(1);
        b.push_front(0);
        b.pop_front().unwrap();
        assert_ne!(a.layout(), b.layout());
        assert_eq!(a, b);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut deque: GrowableDeque<i32> = (0..30).collect();
        let cap = deque.capacity();
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), cap);
        assert_eq!(deque.origin(), cap / 2);
        assert!(deque.buffer.iter().all(|&x| x == 0));
    }

    #[test]
    fn into_iter_both_ends() {
        let deque = GrowableDeque::from([1, 2, 3, 4]);
        let mut iter = deque.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn subarray_pads_with_defaults() {
        let deque = GrowableDeque::from([1.0, 2.0]);
        assert_eq!(deque.subarray(0, 3).unwrap(), [1.0, 2.0, 0.0]);
        assert!(deque.subarray(2, 2).unwrap().is_empty());
        assert!(matches!(
            deque.subarray(3, 1),
            Err(DequeError::InvalidRange(_))
        ));
    }

    #[test]
    fn macro_forms() {
        let a: GrowableDeque<i32> = crate::deque![];
        assert!(a.is_empty());
        let b = crate::deque![1, 2, 3,];
        assert_eq!(b, [1, 2, 3]);
        let c = crate::deque![0u8; 3];
        assert_eq!(c, vec![0, 0, 0]);
    }
}
