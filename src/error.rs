use std::fmt;
use thiserror::Error;

/// Raised when a relation is handed an element outside its universe, or a
/// relation over a different universe.
///
/// The panicking entry points (`add_relation`, `remove_relation`,
/// `contains_relation`, `from_relation`) treat this as a contract breach and
/// panic with the error text. The `try_` variants return it instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
  #[error("{operation}: element {position} ({element}) is not contained in universe")]
  NotInUniverse {
    operation: &'static str,
    position: Position,
    element: String,
  },
  #[error("{operation}: relation is not defined over an equivalent universe")]
  UniverseMismatch { operation: &'static str },
}

/// Which argument of a pair operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
  First,
  Second,
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Position::First => write!(f, "1"),
      Position::Second => write!(f, "2"),
    }
  }
}
