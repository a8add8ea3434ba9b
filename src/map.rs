use core::borrow::Borrow;

use crate::{
  arena::{Arena, NodeIndex},
  error::Error,
  node::Node,
  options::Options,
  random_height, MAX_HEIGHT,
};

mod entry;
pub use entry::EntryRef;


/// An ordered map implementation based on skiplist, for single-threaded use.
///
/// Keys are kept in sorted order; insert, lookup and removal run in expected
/// logarithmic time driven purely by the probabilistic tower heights, with no
/// rebalancing. Nodes are stored in a slab-style arena and linked through
/// stable indices, and a tail link plus per-node back-links give O(1) access
/// to the largest entry.
#[derive(Debug)]
pub struct SkipMap<K, V> {
  arena: Arena<K, V>,

  /// The head sentinel: one forward link per level, `head[i]` is the first
  /// node participating at level `i`.
  head: Box<[Option<NodeIndex>]>,
  tail: Option<NodeIndex>,

  /// Current height. 1 <= height <= opts.max_height().
  height: u32,
  len: usize,

  opts: Options,
}

// --------------------------------Public Methods--------------------------------
impl<K, V> SkipMap<K, V> {
  /// Creates an empty map with the default [`Options`].
  #[inline]
  pub fn new() -> Self {
    Self::with_options(Options::new())
  }

  /// Creates an empty map configured by `opts`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklist::{Options, SkipMap};
  ///
  /// let map: SkipMap<u64, u64> = SkipMap::with_options(Options::new().with_max_height(12));
  /// assert_eq!(map.height(), 1);
  /// ```
  pub fn with_options(opts: Options) -> Self {
    Self {
      arena: Arena::new(),
      head: vec![None; opts.max_height() as usize].into_boxed_slice(),
      tail: None,
      height: 1,
      len: 0,
      opts,
    }
  }

  /// Returns the height of the highest tower of any node currently in the
  /// map, in `1..=max_height`.
  #[inline]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// Returns the options the map was built with.
  #[inline]
  pub const fn options(&self) -> Options {
    self.opts
  }

  /// Returns the number of entries in the map.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the map is empty.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl<K, V> Default for SkipMap<K, V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Ord, V> SkipMap<K, V> {
  /// Inserts a key/value pair and returns a handle to the stored entry.
  ///
  /// If the key is already present, its value is replaced in place: the
  /// existing node keeps its links and tower height and `len` is unchanged.
  ///
  /// ## Errors
  ///
  /// Returns [`Error::Full`] when inserting a new key into a map that has
  /// reached the capacity configured via
  /// [`Options::with_capacity`](crate::Options::with_capacity). Updating an
  /// existing key never allocates and never fails.
  pub fn insert(&mut self, key: K, value: V) -> Result<EntryRef<'_, K, V>, Error> {
    let update = self.find_path(&key);

    if let Some(found) = self.next_at(update[0], 0) {
      if self.arena[found].key == key {
        self.arena.get_mut(found).value = value;
        return Ok(EntryRef::new(&self.arena[found]));
      }
    }

    if let Some(capacity) = self.opts.capacity() {
      if self.len >= capacity as usize {
        return Err(Error::Full(capacity));
      }
    }

    let height = random_height(self.opts.max_height());
    if height > self.height {
      // update[self.height..height] is all head links already.
      self.height = height;
      #[cfg(feature = "tracing")]
      tracing::trace!(height, "skiplist height raised");
    }

    let idx = self.arena.alloc(Node::new(key, value, height));
    for level in 0..height as usize {
      let next = self.next_at(update[level], level);
      self.arena.get_mut(idx).set_next(level, next);
      self.set_next_at(update[level], level, Some(idx));
    }

    self.arena.get_mut(idx).prev = update[0];
    match self.arena[idx].next_at(0) {
      Some(succ) => self.arena.get_mut(succ).prev = Some(idx),
      None => self.tail = Some(idx),
    }

    self.len += 1;
    Ok(EntryRef::new(&self.arena[idx]))
  }

  /// Returns a reference to the value associated with `key`, or `None` if
  /// the key is not present.
  pub fn get<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let update = self.find_path(key);
    let found = self.next_at(update[0], 0)?;
    let node = &self.arena[found];
    if node.key.borrow() == key {
      Some(&node.value)
    } else {
      None
    }
  }

  /// Returns `true` if the key exists in the map.
  #[inline]
  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.get(key).is_some()
  }

  /// Removes the entry with the given key and returns its value, or `None`
  /// if the key is not present.
  pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let update = self.find_path(key);
    let found = self.next_at(update[0], 0)?;
    if self.arena[found].key.borrow() != key {
      return None;
    }

    // The victim is the immediate successor of its recorded predecessor at
    // every level it participates in.
    let height = self.arena[found].height();
    for level in 0..height as usize {
      let next = self.arena[found].next_at(level);
      self.set_next_at(update[level], level, next);
    }

    let node = self.arena.dealloc(found);
    match node.next_at(0) {
      Some(succ) => self.arena.get_mut(succ).prev = node.prev,
      None => self.tail = node.prev,
    }

    while self.height > 1 && self.head[self.height as usize - 1].is_none() {
      self.height -= 1;
      #[cfg(feature = "tracing")]
      tracing::trace!(height = self.height, "skiplist height lowered");
    }

    self.len -= 1;
    Some(node.value)
  }

  /// Returns the entry with the smallest key, or `None` if the map is empty.
  #[inline]
  pub fn first(&self) -> Option<EntryRef<'_, K, V>> {
    self.head[0].map(|idx| EntryRef::new(&self.arena[idx]))
  }

  /// Returns the entry with the largest key, or `None` if the map is empty.
  ///
  /// This is O(1) through the maintained tail link.
  #[inline]
  pub fn last(&self) -> Option<EntryRef<'_, K, V>> {
    self.tail.map(|idx| EntryRef::new(&self.arena[idx]))
  }
}

// --------------------------------Private Methods--------------------------------
impl<K: Ord, V> SkipMap<K, V> {
  /// Top-down scan recording, per level, the rightmost position whose next
  /// key is not less than `key`. `None` stands for the head sentinel, so
  /// entries above the current height are head links by construction.
  fn find_path<Q>(&self, key: &Q) -> [Option<NodeIndex>; MAX_HEIGHT]
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let mut update = [None; MAX_HEIGHT];
    let mut pred: Option<NodeIndex> = None;
    for level in (0..self.height as usize).rev() {
      while let Some(next) = self.next_at(pred, level) {
        if self.arena[next].key.borrow() < key {
          pred = Some(next);
        } else {
          break;
        }
      }
      update[level] = pred;
    }
    update
  }

  /// Forward link of `pred` at `level`, where `None` is the head sentinel.
  #[inline]
  fn next_at(&self, pred: Option<NodeIndex>, level: usize) -> Option<NodeIndex> {
    match pred {
      Some(idx) => self.arena[idx].next_at(level),
      None => self.head[level],
    }
  }

  #[inline]
  fn set_next_at(&mut self, pred: Option<NodeIndex>, level: usize, next: Option<NodeIndex>) {
    match pred {
      Some(idx) => self.arena.get_mut(idx).set_next(level, next),
      None => self.head[level] = next,
    }
  }
}
