//! Classical relation properties, checked by exhaustive enumeration of the
//! universe. Every check only uses `universe` and `contains_relation`.

use itertools::{iproduct, Itertools};
use std::fmt::Debug;
use tracing::debug;

use crate::binary::Relation;
use crate::set::{equivalent, Set};

mod orders;
pub use orders::*;
mod reverse;
pub use reverse::*;

fn holds<W: Debug>(property: &'static str, witness: Option<W>) -> bool {
  match witness {
    Some(witness) => {
      debug!(property, ?witness, "property does not hold");
      false
    }
    None => true,
  }
}

/// `xBx` for every `x` in the universe.
pub fn reflexive<R: Relation + ?Sized>(b: &R) -> bool {
  let witness = b.universe().elements().find(|&x| !b.contains_relation(x, x));
  holds("reflexive", witness)
}

/// No `x` in the universe has `xBx`.
pub fn irreflexive<R: Relation + ?Sized>(b: &R) -> bool {
  let witness = b.universe().elements().find(|&x| b.contains_relation(x, x));
  holds("irreflexive", witness)
}

/// `xBy` or `yBx` for every `x, y` in the universe, including `x = y`.
pub fn complete<R: Relation + ?Sized>(b: &R) -> bool {
  let elements = b.universe().elements().collect_vec();
  // n^2
  let witness = iproduct!(elements.iter(), elements.iter())
    .find(|&(&x, &y)| !(b.contains_relation(x, y) || b.contains_relation(y, x)));
  holds("complete", witness)
}

/// `xBy` implies `yBx`.
pub fn symmetric<R: Relation + ?Sized>(b: &R) -> bool {
  let elements = b.universe().elements().collect_vec();
  let witness = iproduct!(elements.iter(), elements.iter())
    .find(|&(&x, &y)| b.contains_relation(x, y) && !b.contains_relation(y, x));
  holds("symmetric", witness)
}

/// `xBy` and `yBx` imply `x = y`.
pub fn antisymmetric<R: Relation + ?Sized>(b: &R) -> bool {
  let elements = b.universe().elements().collect_vec();
  let witness = iproduct!(elements.iter(), elements.iter())
    .find(|&(&x, &y)| x != y && b.contains_relation(x, y) && b.contains_relation(y, x));
  holds("antisymmetric", witness)
}

/// `xBy` and `yBz` imply `xBz`, with no other requirement on `b`.
pub fn chains_compose<R: Relation + ?Sized>(b: &R) -> bool {
  let elements = b.universe().elements().collect_vec();
  // n^3
  let witness = iproduct!(elements.iter(), elements.iter(), elements.iter()).find(|&(&x, &y, &z)| {
    b.contains_relation(x, y) && b.contains_relation(y, z) && !b.contains_relation(x, z)
  });
  holds("chains_compose", witness)
}

/// Complete, and `xBy` and `yBz` imply `xBz`.
///
/// An incomplete relation is never reported as transitive here; use
/// [`chains_compose`] for transitivity on its own.
pub fn transitive<R: Relation + ?Sized>(b: &R) -> bool {
  complete(b) && chains_compose(b)
}

/// Reflexive, symmetric and transitive (without requiring completeness).
pub fn equivalence<R: Relation + ?Sized>(b: &R) -> bool {
  reflexive(b) && symmetric(b) && chains_compose(b)
}

/// Whether all relations are defined over equivalent universes. Vacuously
/// true for no relations.
pub fn composable<'a, R, I>(relations: I) -> bool
where
  R: Relation + ?Sized + 'a,
  I: IntoIterator<Item = &'a R>,
{
  let mut relations = relations.into_iter();
  let Some(first) = relations.next() else {
    return true;
  };
  let universe = first.universe();
  let witness = relations.position(|b| !equivalent(universe, b.universe()));
  holds("composable", witness.map(|i| i + 1))
}
