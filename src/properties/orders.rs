use super::{antisymmetric, complete, transitive};
use crate::binary::Relation;

/// Complete and transitive, like `>=` on the naturals.
pub fn weak_order<R: Relation + ?Sized>(b: &R) -> bool {
  complete(b) && transitive(b)
}

/// A weak order that is also antisymmetric.
pub fn strict_order<R: Relation + ?Sized>(b: &R) -> bool {
  weak_order(b) && antisymmetric(b)
}
