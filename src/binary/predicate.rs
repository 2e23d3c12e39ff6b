use std::fmt;

use super::Relation;
use crate::set::Set;

/// A relation defined by a rule rather than by stored pairs, e.g. `>=` on
/// numbers. Immutable; a different rule means a different relation.
///
/// The predicate is trusted to be defined over the same universe, so
/// `contains_relation` does not validate membership. Use
/// `try_contains_relation` for a checked query.
pub struct PredicateRelation<'u, U: Set, F> {
  universe: &'u U,
  related: F,
}

impl<'u, U, F> PredicateRelation<'u, U, F>
where
  U: Set,
  F: Fn(&U::Element, &U::Element) -> bool,
{
  pub fn new(universe: &'u U, related: F) -> Self {
    Self { universe, related }
  }
}

impl<'u, U, F> Relation for PredicateRelation<'u, U, F>
where
  U: Set,
  F: Fn(&U::Element, &U::Element) -> bool,
{
  type Universe = U;
  fn universe(&self) -> &U {
    self.universe
  }
  fn contains_relation(&self, x: &U::Element, y: &U::Element) -> bool {
    (self.related)(x, y)
  }
}

impl<'u, U: Set, F> fmt::Debug for PredicateRelation<'u, U, F> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("PredicateRelation").field("universe_len", &self.universe.len()).finish_non_exhaustive()
  }
}
