//! A caller-owned collection of deques, for code that wants to count live deques or tear them all down at once.
//! Deques are addressed by [`DequeHandle`]s; a handle stops being valid once its deque is released,
//! even if the slot is later reused.

use crate::settings::{AutoExtend, ReadPolicy};
use crate::GrowableDeque;

/// Refers to a deque stored in a [`DequeRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DequeHandle {
    index: usize,
    generation: u32,
}

struct Slot<T, Read: ReadPolicy> {
    generation: u32,
    deque: Option<GrowableDeque<T, Read>>,
}

/// Owns a set of deques and hands out handles to them.
///
/// # Examples
/// ```
/// use growable_deque::DequeRegistry;
/// let mut registry: DequeRegistry<f64> = DequeRegistry::new();
/// let a = registry.create();
/// let b = registry.create();
/// registry.get_mut(a).unwrap().push(1.0);
/// assert_eq!(registry.len(), 2);
///
/// let released = registry.release(a).unwrap();
/// assert_eq!(released.as_slice(), &[1.0]);
/// assert!(!registry.is_valid(a));
/// assert!(registry.is_valid(b));
///
/// registry.release_all();
/// assert!(registry.is_empty());
/// ```
pub struct DequeRegistry<T, Read = AutoExtend>
where
    Read: ReadPolicy,
{
    slots: Vec<Slot<T, Read>>,
    free: Vec<usize>,
    live: usize,
}

impl<T, Read: ReadPolicy> DequeRegistry<T, Read> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        DequeRegistry {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Takes ownership of `deque` and returns a handle to it.
    pub fn insert(&mut self, deque: GrowableDeque<T, Read>) -> DequeHandle {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.deque = Some(deque);
            DequeHandle {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                deque: Some(deque),
            });
            DequeHandle {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    /// Returns `true` while the deque behind `handle` has not been released.
    #[inline]
    pub fn is_valid(&self, handle: DequeHandle) -> bool {
        self.get(handle).is_some()
    }

    #[inline]
    pub fn get(&self, handle: DequeHandle) -> Option<&GrowableDeque<T, Read>> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.deque.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, handle: DequeHandle) -> Option<&mut GrowableDeque<T, Read>> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.deque.as_mut())
    }

    /// Removes the deque behind `handle` and gives it back, or `None` if the handle is stale.
    pub fn release(&mut self, handle: DequeHandle) -> Option<GrowableDeque<T, Read>> {
        let slot = self.slots.get_mut(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        let deque = slot.deque.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.live -= 1;
        log::debug!(
            "released deque {} (len {}), {} still live",
            handle.index,
            deque.len(),
            self.live
        );
        Some(deque)
    }

    /// Drops every deque in the registry. All outstanding handles become invalid.
    pub fn release_all(&mut self) {
        let released = self.live;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.deque.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
        self.live = 0;
        log::debug!("released all {} live deques", released);
    }

    /// Number of deques currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterates over the handles of all live deques.
    pub fn handles(&self) -> impl Iterator<Item = DequeHandle> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.deque.is_some())
            .map(|(index, slot)| DequeHandle {
                index,
                generation: slot.generation,
            })
    }
}

impl<T: Default, Read: ReadPolicy> DequeRegistry<T, Read> {
    /// Creates an empty deque inside the registry.
    #[inline]
    pub fn create(&mut self) -> DequeHandle {
        self.insert(GrowableDeque::default())
    }
}

impl<T, Read: ReadPolicy> Default for DequeRegistry<T, Read> {
    #[inline]
    fn default() -> Self {
        DequeRegistry::new()
    }
}
