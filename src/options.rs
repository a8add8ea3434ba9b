use crate::MAX_HEIGHT;

/// Options for a [`SkipMap`](crate::SkipMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  max_height: u8,
  capacity: Option<u32>,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values: the full tower
  /// height of `32` and no capacity bound.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_height: MAX_HEIGHT as u8,
      capacity: None,
    }
  }

  /// Set the maximum tower height of the skiplist.
  ///
  /// Lowering the maximum height reduces the per-node link overhead at the
  /// cost of slower scans on large maps. The default is `32`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklist::Options;
  ///
  /// let opts = Options::new().with_max_height(12);
  /// assert_eq!(opts.max_height(), 12);
  /// ```
  ///
  /// ## Panics
  ///
  /// Panics if `max_height` is `0` or greater than `32`.
  #[inline]
  pub const fn with_max_height(mut self, max_height: u8) -> Self {
    assert!(
      max_height >= 1 && max_height as usize <= MAX_HEIGHT,
      "max_height must be in 1..=32"
    );
    self.max_height = max_height;
    self
  }

  /// Bound the number of entries the map may hold at once.
  ///
  /// Inserting a new key into a full map returns
  /// [`Error::Full`](crate::Error::Full); updating an existing key or
  /// removing entries is always possible. The default is unbounded.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklist::Options;
  ///
  /// let opts = Options::new().with_capacity(1024);
  /// assert_eq!(opts.capacity(), Some(1024));
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: u32) -> Self {
    self.capacity = Some(capacity);
    self
  }

  /// Returns the maximum tower height of the skiplist.
  #[inline]
  pub const fn max_height(&self) -> u8 {
    self.max_height
  }

  /// Returns the configured entry capacity, or `None` if unbounded.
  #[inline]
  pub const fn capacity(&self) -> Option<u32> {
    self.capacity
  }
}
