use std::fmt::Debug;

/// Number of slots a fresh [`GrowableDeque`](crate::GrowableDeque) allocates.
/// Every later capacity is this value times a power of two.
pub const INITIAL_CAPACITY: usize = 10;

/// Reading past the end writes a default value there first, so the read always succeeds and the deque grows.
#[derive(Copy, Clone, Debug, Default)]
pub struct AutoExtend;

/// Reading past the end yields a default value and leaves the deque untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultOnMiss;

/// Runtime view of a [`ReadPolicy`], reported by [`DequeLayout`](crate::DequeLayout).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadStrategy {
    AutoExtend,
    DefaultOnMiss,
}

pub(crate) mod seal_read_policy {
    pub trait Sealed {
        const STRATEGY: super::ReadStrategy;
    }
}

/// Selects what the unchecked `get` accessor does with an index at or past the end.
/// `safe_get` is strict regardless of the policy.
pub trait ReadPolicy: seal_read_policy::Sealed + Debug + Copy + Default {}

impl seal_read_policy::Sealed for AutoExtend {
    const STRATEGY: ReadStrategy = ReadStrategy::AutoExtend;
}
impl ReadPolicy for AutoExtend {}

impl seal_read_policy::Sealed for DefaultOnMiss {
    const STRATEGY: ReadStrategy = ReadStrategy::DefaultOnMiss;
}
impl ReadPolicy for DefaultOnMiss {}

/// Returns the strategy selected by a policy type.
#[inline]
pub fn strategy_of<R: ReadPolicy>() -> ReadStrategy {
    <R as seal_read_policy::Sealed>::STRATEGY
}
