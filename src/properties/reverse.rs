use crate::binary::{Element, PredicateRelation, Relation};

/// The relation that holds exactly where `b` does not: `x R y` iff `!(x B y)`.
///
/// Note this is the complement, not the transpose. The reverse of `>=` is
/// `<`; for the transpose (`>=` to `<=`) use [`converse`].
pub fn reverse<R>(b: &R) -> PredicateRelation<'_, R::Universe, impl Fn(&Element<R>, &Element<R>) -> bool + '_>
where
  R: Relation + ?Sized,
{
  complement(b)
}

/// Same as [`reverse`].
pub fn complement<R>(b: &R) -> PredicateRelation<'_, R::Universe, impl Fn(&Element<R>, &Element<R>) -> bool + '_>
where
  R: Relation + ?Sized,
{
  PredicateRelation::new(b.universe(), move |x: &Element<R>, y: &Element<R>| !b.contains_relation(x, y))
}

/// The transpose of `b`: `x R y` iff `y B x`.
pub fn converse<R>(b: &R) -> PredicateRelation<'_, R::Universe, impl Fn(&Element<R>, &Element<R>) -> bool + '_>
where
  R: Relation + ?Sized,
{
  PredicateRelation::new(b.universe(), move |x: &Element<R>, y: &Element<R>| b.contains_relation(y, x))
}
