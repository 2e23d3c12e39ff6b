use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use tracing::trace;

use super::{check_pair, violated, MutableRelation, Relation};
use crate::error::PreconditionError;
use crate::set::{equivalent, Set};

/// A relation stored as a table from each source element to the set of
/// targets it is related to.
///
/// A source without an entry relates to nothing. Adding `x -> y` never
/// implies `y -> x` or `x -> x`.
#[derive(Debug)]
pub struct MaterializedRelation<'u, U: Set> {
  universe: &'u U,
  relations: HashMap<U::Element, HashSet<U::Element>>,
}

impl<'u, U: Set> MaterializedRelation<'u, U> {
  /// An empty relation over `universe`.
  pub fn new(universe: &'u U) -> Self {
    Self {
      universe,
      relations: HashMap::new(),
    }
  }

  /// Snapshots `relation` into a table over `universe`. The snapshot only
  /// borrows `universe`, so it may outlive `relation`.
  ///
  /// Panics if `relation` is defined over a universe not equivalent to
  /// `universe`.
  pub fn from_relation<R>(universe: &'u U, relation: &R) -> Self
  where
    R: Relation<Universe = U> + ?Sized,
  {
    match Self::try_from_relation(universe, relation) {
      Ok(snapshot) => snapshot,
      Err(err) => violated(err),
    }
  }

  pub fn try_from_relation<R>(universe: &'u U, relation: &R) -> Result<Self, PreconditionError>
  where
    R: Relation<Universe = U> + ?Sized,
  {
    if !equivalent(universe, relation.universe()) {
      return Err(PreconditionError::UniverseMismatch { operation: "from_relation" });
    }
    let elements = universe.elements().collect_vec();
    let mut relations: HashMap<U::Element, HashSet<U::Element>> = HashMap::new();
    for (&x, &y) in elements.iter().cartesian_product(elements.iter()) {
      if relation.contains_relation(x, y) {
        relations.entry(x.clone()).or_default().insert(y.clone());
      }
    }
    Ok(Self { universe, relations })
  }

  /// All stored pairs, in no particular order.
  pub fn pairs(&self) -> impl Iterator<Item = (&U::Element, &U::Element)> {
    self.relations.iter().flat_map(|(x, targets)| targets.iter().map(move |y| (x, y)))
  }

  /// Number of related pairs.
  pub fn len(&self) -> usize {
    self.relations.values().map(HashSet::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl<'u, U: Set> Relation for MaterializedRelation<'u, U> {
  type Universe = U;
  fn universe(&self) -> &U {
    self.universe
  }
  fn contains_relation(&self, x: &U::Element, y: &U::Element) -> bool {
    if let Err(err) = check_pair(self.universe, "contains_relation", x, y) {
      violated(err);
    }
    self.relations.get(x).is_some_and(|targets| targets.contains(y))
  }
}

impl<'u, U: Set> MutableRelation for MaterializedRelation<'u, U> {
  fn try_add_relation(&mut self, x: &U::Element, y: &U::Element) -> Result<(), PreconditionError> {
    check_pair(self.universe, "add_relation", x, y)?;
    trace!(?x, ?y, "add relation");
    self.relations.entry(x.clone()).or_default().insert(y.clone());
    Ok(())
  }
  fn try_remove_relation(&mut self, x: &U::Element, y: &U::Element) -> Result<(), PreconditionError> {
    check_pair(self.universe, "remove_relation", x, y)?;
    if let Some(targets) = self.relations.get_mut(x) {
      if targets.remove(y) {
        trace!(?x, ?y, "remove relation");
      }
      if targets.is_empty() {
        self.relations.remove(x);
      }
    }
    Ok(())
  }
}
