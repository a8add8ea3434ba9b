/// Error type for the [`SkipMap`](crate::SkipMap).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Indicates that the arena has reached its configured entry capacity and
  /// cannot allocate any more nodes. Only returned when inserting a new key
  /// into a map built with [`Options::with_capacity`](crate::Options::with_capacity);
  /// updating an existing key never allocates and never fails.
  #[error("allocation failed because arena is full (capacity {0})")]
  Full(u32),
}
