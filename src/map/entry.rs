use crate::node::Node;

/// A reference to an entry stored in a [`SkipMap`](crate::SkipMap).
pub struct EntryRef<'a, K, V> {
  node: &'a Node<K, V>,
}

impl<K, V> Clone for EntryRef<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<K, V> Copy for EntryRef<'_, K, V> {}

impl<K: core::fmt::Debug, V: core::fmt::Debug> core::fmt::Debug for EntryRef<'_, K, V> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("EntryRef")
      .field("key", &self.node.key)
      .field("value", &self.node.value)
      .finish()
  }
}

impl<'a, K, V> EntryRef<'a, K, V> {
  #[inline]
  pub(super) fn new(node: &'a Node<K, V>) -> Self {
    Self { node }
  }

  /// Returns the reference to the key
  #[inline]
  pub fn key(&self) -> &'a K {
    &self.node.key
  }

  /// Returns the reference to the value
  #[inline]
  pub fn value(&self) -> &'a V {
    &self.node.value
  }
}
