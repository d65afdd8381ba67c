//! A growable, double-ended, always-contiguous array.
//!
//! [`GrowableDeque`] keeps its elements in the middle of one buffer and doubles that buffer,
//! re-centering the elements, whenever a write falls off either edge. Pushing and popping at both
//! ends is amortized O(1), and writing past the end fills the skipped indices with default values.
//!
//! ```
//! use growable_deque::GrowableDeque;
//! let mut deque = GrowableDeque::new();
//! deque.push(1);
//! deque.push(2);
//! deque.push_front(0);
//! assert_eq!(deque.to_string(), "[0,1,2]");
//! assert_eq!(deque.pop(), Ok(2));
//! assert_eq!(deque.pop_front(), Ok(0));
//! ```
//!
//! What the unchecked `get` does past the end is picked with a [`ReadPolicy`] type parameter:
//! [`AutoExtend`] (the default) grows the deque, [`DefaultOnMiss`] returns a default without touching it.
//! Deques of `f64` additionally get ranges and summary statistics, and [`DequeRegistry`] lets a caller
//! own a whole set of deques and release them together.

pub mod deque;
pub mod error;
mod numeric;
pub mod registry;
pub mod settings;


pub use deque::{DequeLayout, GrowableDeque, IntoIter};
pub use error::DequeError;
pub use registry::{DequeHandle, DequeRegistry};
pub use settings::{AutoExtend, DefaultOnMiss, ReadPolicy, ReadStrategy, INITIAL_CAPACITY};
