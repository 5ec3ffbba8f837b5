//! The named connection rules.
//!
//! Once the exclusion and exact-match fast paths have been applied (see
//! [`super::is_connectable`]), an edge is legal iff at least one of the seven
//! [`ConnectionRule`]s holds. The rules are a pure disjunction: their order
//! never changes the outcome.

use portlink_core::{BaseType, FieldType};
use serde::{Deserialize, Serialize};

use super::widening::is_subtype_match;

/// One of the seven conditions under which differing types may connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionRule {
    /// A collection item source feeds any non-collection target.
    CollectionItemToNonCollection,
    /// A plain scalar source feeds a collection item target.
    NonCollectionToCollectionItem,
    /// Any plurality feeds a collection-or-scalar target of the same base.
    AnythingToCollectionOrScalarOfSameBase,
    /// A generic collection feeds any collection or collection-or-scalar.
    GenericCollectionToCollectionLike,
    /// Any collection feeds a generic collection target.
    CollectionToGenericCollection,
    /// Integer/float/string widening with matching plurality.
    SubtypeWidening,
    /// The target accepts anything.
    TargetAcceptsAny,
}

impl ConnectionRule {
    /// Every rule, in the order they are reported.
    pub const ALL: [ConnectionRule; 7] = [
        ConnectionRule::CollectionItemToNonCollection,
        ConnectionRule::NonCollectionToCollectionItem,
        ConnectionRule::AnythingToCollectionOrScalarOfSameBase,
        ConnectionRule::GenericCollectionToCollectionLike,
        ConnectionRule::CollectionToGenericCollection,
        ConnectionRule::SubtypeWidening,
        ConnectionRule::TargetAcceptsAny,
    ];

    /// Returns `true` if this rule admits an edge from `source` to `target`.
    pub fn holds(self, source: &FieldType, target: &FieldType) -> bool {
        match self {
            ConnectionRule::CollectionItemToNonCollection => {
                is_collection_item_to_non_collection(source, target)
            }
            ConnectionRule::NonCollectionToCollectionItem => {
                is_non_collection_to_collection_item(source, target)
            }
            ConnectionRule::AnythingToCollectionOrScalarOfSameBase => {
                is_anything_to_collection_or_scalar_of_same_base(source, target)
            }
            ConnectionRule::GenericCollectionToCollectionLike => {
                is_generic_collection_to_collection_like(source, target)
            }
            ConnectionRule::CollectionToGenericCollection => {
                is_collection_to_generic_collection(source, target)
            }
            ConnectionRule::SubtypeWidening => is_subtype_match(source, target),
            ConnectionRule::TargetAcceptsAny => is_target_any(target),
        }
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            ConnectionRule::CollectionItemToNonCollection => {
                "collection item connects to any non-collection"
            }
            ConnectionRule::NonCollectionToCollectionItem => {
                "non-collection connects to collection item"
            }
            ConnectionRule::AnythingToCollectionOrScalarOfSameBase => {
                "anything connects to collection-or-scalar of the same base type"
            }
            ConnectionRule::GenericCollectionToCollectionLike => {
                "generic collection connects to any collection or collection-or-scalar"
            }
            ConnectionRule::CollectionToGenericCollection => {
                "any collection connects to generic collection"
            }
            ConnectionRule::SubtypeWidening => "integer/float/string widening with matching plurality",
            ConnectionRule::TargetAcceptsAny => "target accepts any type",
        }
    }
}

/// Returns `true` if any rule admits the edge.
pub fn any_rule_holds(source: &FieldType, target: &FieldType) -> bool {
    ConnectionRule::ALL
        .iter()
        .any(|rule| rule.holds(source, target))
}

/// Evaluates every rule and returns those that hold, in [`ConnectionRule::ALL`]
/// order.
///
/// Does not apply the exclusion or exact-match fast paths.
pub fn matching_rules(source: &FieldType, target: &FieldType) -> Vec<ConnectionRule> {
    ConnectionRule::ALL
        .into_iter()
        .filter(|rule| rule.holds(source, target))
        .collect()
}

fn is_collection_item_to_non_collection(source: &FieldType, target: &FieldType) -> bool {
    *source.name() == BaseType::CollectionItem && !target.is_collection()
}

fn is_non_collection_to_collection_item(source: &FieldType, target: &FieldType) -> bool {
    *target.name() == BaseType::CollectionItem
        && !source.is_collection()
        && !source.is_collection_or_scalar()
}

fn is_anything_to_collection_or_scalar_of_same_base(source: &FieldType, target: &FieldType) -> bool {
    target.is_collection_or_scalar() && source.name() == target.name()
}

fn is_generic_collection_to_collection_like(source: &FieldType, target: &FieldType) -> bool {
    *source.name() == BaseType::Collection
        && (target.is_collection() || target.is_collection_or_scalar())
}

fn is_collection_to_generic_collection(source: &FieldType, target: &FieldType) -> bool {
    *target.name() == BaseType::Collection && source.is_collection()
}

fn is_target_any(target: &FieldType) -> bool {
    *target.name() == BaseType::Any
}
