//! Subtype widening between base types.
//!
//! Widening is one-directional and covers exactly three pairs:
//!
//! - Integer -> Float
//! - Integer -> String
//! - Float -> String
//!
//! It is neither reflexive nor transitive beyond these pairs, and it only
//! applies when the two ports' pluralities line up (see
//! [`plurality_matches`]).

use portlink_core::{BaseType, FieldType, Plurality};

/// Returns `true` if a value of base type `from` is accepted where `to` is
/// expected through widening.
pub fn widens_to(from: &BaseType, to: &BaseType) -> bool {
    matches!(
        (from, to),
        (BaseType::Integer, BaseType::Float)
            | (BaseType::Integer, BaseType::String)
            | (BaseType::Float, BaseType::String)
    )
}

/// Returns `true` if a source of plurality `source` may feed a target of
/// plurality `target` under widening.
///
/// Accepted pairings: scalar -> scalar, collection -> collection,
/// collection -> collection-or-scalar, collection-or-scalar ->
/// collection-or-scalar, scalar -> collection-or-scalar.
pub fn plurality_matches(source: Plurality, target: Plurality) -> bool {
    use Plurality::*;
    matches!(
        (source, target),
        (Scalar, Scalar)
            | (Collection, Collection)
            | (Collection, CollectionOrScalar)
            | (CollectionOrScalar, CollectionOrScalar)
            | (Scalar, CollectionOrScalar)
    )
}

/// Plurality match combined with one of the widening pairs.
pub fn is_subtype_match(source: &FieldType, target: &FieldType) -> bool {
    plurality_matches(source.plurality(), target.plurality())
        && widens_to(source.name(), target.name())
}
