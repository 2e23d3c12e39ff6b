use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use super::Set;

impl<T, S> Set for HashSet<T, S>
where
  T: Eq + Hash + Clone + Debug,
  S: BuildHasher,
{
  type Element = T;
  fn contains(&self, element: &T) -> bool {
    HashSet::contains(self, element)
  }
  fn elements(&self) -> impl Iterator<Item = &T> {
    self.iter()
  }
  fn len(&self) -> usize {
    HashSet::len(self)
  }
}

impl<T> Set for BTreeSet<T>
where
  T: Ord + Eq + Hash + Clone + Debug,
{
  type Element = T;
  fn contains(&self, element: &T) -> bool {
    BTreeSet::contains(self, element)
  }
  fn elements(&self) -> impl Iterator<Item = &T> {
    self.iter()
  }
  fn len(&self) -> usize {
    BTreeSet::len(self)
  }
}
