#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// Bound for keys stored in an [`crate::ExpansionState`].
///
/// With `std` this is `Hash + Eq`; without it keys must be `Ord`.
#[cfg(feature = "std")]
pub trait ExpansionKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ExpansionKey for K {}

#[cfg(not(feature = "std"))]
pub trait ExpansionKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ExpansionKey for K {}
