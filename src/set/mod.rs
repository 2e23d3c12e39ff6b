use std::fmt::Debug;
use std::hash::Hash;

mod std_sets;

/// The universe a relation is defined over.
///
/// Relations only ever test membership and enumerate; they never build or
/// modify a set. `elements` must be exhaustive and free of duplicates, but
/// its order may differ between calls.
pub trait Set {
  type Element: Eq + Hash + Clone + Debug;
  fn contains(&self, element: &Self::Element) -> bool;
  fn elements(&self) -> impl Iterator<Item = &Self::Element>;
  fn len(&self) -> usize {
    self.elements().count()
  }
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Whether two sets hold exactly the same elements.
pub fn equivalent<A, B>(a: &A, b: &B) -> bool
where
  A: Set,
  B: Set<Element = A::Element>,
{
  a.len() == b.len() && a.elements().all(|e| b.contains(e))
}
