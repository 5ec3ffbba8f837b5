//! Type compatibility checking for node-graph edges.
//!
//! [`is_connectable`] answers one question: may an edge run from an output
//! port of type `source` to an input port of type `target`? Evaluation order:
//!
//! 1. Hard exclusion: generic collection to generic collection is rejected.
//! 2. Exact match via [`are_types_equal`] is accepted.
//! 3. Otherwise the edge is accepted iff any [`ConnectionRule`] holds.
//!
//! Every function here is pure. Nothing allocates on the
//! [`is_connectable`] path, so it is safe to call once per candidate port
//! while a connection is being dragged.

pub mod diagnostics;
pub mod rules;
pub mod widening;

pub use diagnostics::{suggest_fix, ConnectionError, FixSuggestion};
pub use rules::{matching_rules, ConnectionRule};
pub use widening::{is_subtype_match, plurality_matches, widens_to};

use portlink_core::{BaseType, FieldType, PortRef, TypeCatalog};
use serde::{Deserialize, Serialize};

/// Returns `true` if both descriptors denote the identical type: same base
/// name and same plurality.
pub fn are_types_equal(a: &FieldType, b: &FieldType) -> bool {
    a.name() == b.name()
        && a.is_collection() == b.is_collection()
        && a.is_collection_or_scalar() == b.is_collection_or_scalar()
}

/// Returns `true` if an edge from `source` to `target` is legal.
pub fn is_connectable(source: &FieldType, target: &FieldType) -> bool {
    // TODO: drop once collect -> iterate chains of generic collections work
    // upstream (invoke-ai/InvokeAI#3956).
    if is_generic_collection_loop(source, target) {
        return false;
    }

    if are_types_equal(source, target) {
        return true;
    }

    rules::any_rule_holds(source, target)
}

fn is_generic_collection_loop(source: &FieldType, target: &FieldType) -> bool {
    *source.name() == BaseType::Collection && *target.name() == BaseType::Collection
}

/// How [`check_connection`] reached its decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Verdict {
    /// Rejected by the generic collection exclusion.
    Excluded,
    /// Accepted: the types are identical.
    ExactMatch,
    /// Accepted by one or more rules.
    Rules { rules: Vec<ConnectionRule> },
    /// Rejected: no rule holds.
    Incompatible,
}

impl Verdict {
    pub fn is_connectable(&self) -> bool {
        matches!(self, Verdict::ExactMatch | Verdict::Rules { .. })
    }
}

/// Same decision as [`is_connectable`], reporting which path decided it.
pub fn check_connection(source: &FieldType, target: &FieldType) -> Verdict {
    if is_generic_collection_loop(source, target) {
        return Verdict::Excluded;
    }
    if are_types_equal(source, target) {
        return Verdict::ExactMatch;
    }
    let rules = matching_rules(source, target);
    if rules.is_empty() {
        Verdict::Incompatible
    } else {
        Verdict::Rules { rules }
    }
}

/// Validates a proposed edge, explaining a rejection.
///
/// Call before committing an edge to the graph model.
pub fn validate_connection(source: &FieldType, target: &FieldType) -> Result<(), ConnectionError> {
    let error = match check_connection(source, target) {
        Verdict::ExactMatch | Verdict::Rules { .. } => return Ok(()),
        Verdict::Excluded => ConnectionError::GenericCollectionLoop {
            source_type: source.clone(),
            target_type: target.clone(),
        },
        Verdict::Incompatible => ConnectionError::Incompatible {
            source_type: source.clone(),
            target_type: target.clone(),
            suggestion: suggest_fix(source, target),
        },
    };
    tracing::debug!(source = %source, target = %target, code = error.code(), "connection rejected");
    Err(error)
}

/// Indices of the `candidates` that accept `source`, in input order.
pub fn connectable_targets<'a, I>(source: &FieldType, candidates: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a FieldType>,
{
    candidates
        .into_iter()
        .enumerate()
        .filter(|(_, target)| is_connectable(source, target))
        .map(|(index, _)| index)
        .collect()
}

/// Every input port in `catalog` that accepts `source`, in catalog order.
pub fn connectable_inputs(catalog: &TypeCatalog, source: &FieldType) -> Vec<PortRef> {
    catalog
        .input_ports()
        .filter(|(_, target)| is_connectable(source, target))
        .map(|(port, _)| port)
        .collect()
}
