//! Binary relations over finite sets.
//!
//! A relation is defined over a universe (any [`Set`]) and answers whether an
//! ordered pair of elements is related. Two implementations are provided:
//! [`MaterializedRelation`] stores its pairs and can be mutated piecewise,
//! [`PredicateRelation`] computes relatedness from a closure. The checks in
//! [`properties`] only ever see the [`Relation`] abstraction.

pub mod binary;
pub mod error;
pub mod properties;
pub mod set;

pub use binary::*;
pub use error::*;
pub use properties::*;
pub use set::*;
