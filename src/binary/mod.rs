use tracing::{debug, error};

use crate::error::{Position, PreconditionError};
use crate::set::Set;

mod materialized;
pub use materialized::*;
mod predicate;
pub use predicate::*;

/// Element type of the universe a relation is defined over.
pub type Element<R> = <<R as Relation>::Universe as Set>::Element;

/// A binary relation over a finite universe.
pub trait Relation {
  type Universe: Set;
  fn universe(&self) -> &Self::Universe;
  /// Whether `x` is related to `y`, in that order.
  fn contains_relation(&self, x: &Element<Self>, y: &Element<Self>) -> bool;
  /// Like `contains_relation`, but reports elements outside the universe
  /// as an error instead of panicking.
  fn try_contains_relation(&self, x: &Element<Self>, y: &Element<Self>) -> Result<bool, PreconditionError> {
    check_pair(self.universe(), "contains_relation", x, y)?;
    Ok(self.contains_relation(x, y))
  }
}

/// A relation constructed piecewise and stored completely.
pub trait MutableRelation: Relation {
  fn try_add_relation(&mut self, x: &Element<Self>, y: &Element<Self>) -> Result<(), PreconditionError>;
  fn try_remove_relation(&mut self, x: &Element<Self>, y: &Element<Self>) -> Result<(), PreconditionError>;
  /// Records that `x` is related to `y`. Adding a pair twice is the same as
  /// adding it once.
  fn add_relation(&mut self, x: &Element<Self>, y: &Element<Self>) {
    if let Err(err) = self.try_add_relation(x, y) {
      violated(err);
    }
  }
  /// Inverse of `add_relation`; a no-op if the pair is not present.
  fn remove_relation(&mut self, x: &Element<Self>, y: &Element<Self>) {
    if let Err(err) = self.try_remove_relation(x, y) {
      violated(err);
    }
  }
}

pub(crate) fn check_pair<U: Set>(
  universe: &U,
  operation: &'static str,
  x: &U::Element,
  y: &U::Element,
) -> Result<(), PreconditionError> {
  for (position, element) in [(Position::First, x), (Position::Second, y)] {
    if !universe.contains(element) {
      let err = PreconditionError::NotInUniverse {
        operation,
        position,
        element: format!("{:?}", element),
      };
      debug!(%err, "rejected element outside universe");
      return Err(err);
    }
  }
  Ok(())
}

/// Panics on a broken precondition. Only the panicking entry points go
/// through here; `try_` callers handle the error themselves.
pub(crate) fn violated(err: PreconditionError) -> ! {
  error!(%err, "precondition violated");
  panic!("{}", err);
}
