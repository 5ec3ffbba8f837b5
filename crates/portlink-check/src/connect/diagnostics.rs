//! Connection diagnostics with fix suggestions.
//!
//! [`ConnectionError`] explains why an edge was rejected and carries both
//! port types so the editor can render the message without another lookup.

use portlink_core::{FieldType, Plurality};
use serde::{Deserialize, Serialize};

use super::widening::{plurality_matches, widens_to};

/// Why a proposed edge is not connectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ConnectionError {
    /// Generic collection to generic collection edges are disabled.
    ///
    /// Known limitation around collect -> iterate chains; the restriction
    /// stays until that upstream defect is fixed.
    #[error("cannot connect {source_type} to {target_type}: generic collection to generic collection edges are not supported")]
    GenericCollectionLoop {
        source_type: FieldType,
        target_type: FieldType,
    },

    /// No compatibility rule admits the edge.
    #[error("cannot connect {source_type} to {target_type}: incompatible field types")]
    Incompatible {
        source_type: FieldType,
        target_type: FieldType,
        /// Suggested fix, if one is obvious.
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<FixSuggestion>,
    },
}

/// A suggested fix for a rejected edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FixSuggestion {
    /// Insert a collect node to gather single values into a collection.
    Collect,
    /// Insert an iterate node to emit the items of a collection one by one.
    Iterate,
    /// Insert an explicit conversion node; the types only widen the other way.
    ConvertFrom { from: FieldType, to: FieldType },
}

/// Picks a fix for a rejected `source` -> `target` edge, if one is obvious.
pub fn suggest_fix(source: &FieldType, target: &FieldType) -> Option<FixSuggestion> {
    let same_base = source.name() == target.name();
    match (source.plurality(), target.plurality()) {
        (Plurality::Scalar, Plurality::Collection) if same_base => Some(FixSuggestion::Collect),
        (Plurality::Collection, Plurality::Scalar) if same_base => Some(FixSuggestion::Iterate),
        (s, t) if plurality_matches(s, t) && widens_to(target.name(), source.name()) => {
            Some(FixSuggestion::ConvertFrom {
                from: source.clone(),
                to: target.clone(),
            })
        }
        _ => None,
    }
}

impl ConnectionError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ConnectionError::GenericCollectionLoop { .. } => "GENERIC_COLLECTION_LOOP",
            ConnectionError::Incompatible { .. } => "INCOMPATIBLE_TYPES",
        }
    }

    pub fn suggestion(&self) -> Option<&FixSuggestion> {
        match self {
            ConnectionError::Incompatible { suggestion, .. } => suggestion.as_ref(),
            ConnectionError::GenericCollectionLoop { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portlink_core::BaseType;
    use serde_json::json;

    #[test]
    fn scalar_into_collection_of_same_base_suggests_collect() {
        assert_eq!(
            suggest_fix(
                &FieldType::scalar(BaseType::Integer),
                &FieldType::collection(BaseType::Integer)
            ),
            Some(FixSuggestion::Collect)
        );
    }

    #[test]
    fn collection_into_scalar_of_same_base_suggests_iterate() {
        assert_eq!(
            suggest_fix(
                &FieldType::collection(BaseType::String),
                &FieldType::scalar(BaseType::String)
            ),
            Some(FixSuggestion::Iterate)
        );
    }

    #[test]
    fn narrowing_suggests_convert() {
        let source = FieldType::scalar(BaseType::Float);
        let target = FieldType::scalar(BaseType::Integer);
        assert_eq!(
            suggest_fix(&source, &target),
            Some(FixSuggestion::ConvertFrom {
                from: source.clone(),
                to: target.clone(),
            })
        );
    }

    #[test]
    fn incompatible_fields_and_suggestion_serialize_camel_case() {
        let source = FieldType::scalar(BaseType::String);
        let target = FieldType::scalar(BaseType::Float);
        let err = ConnectionError::Incompatible {
            source_type: source.clone(),
            target_type: target.clone(),
            suggestion: suggest_fix(&source, &target),
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], json!("incompatible"));
        assert_eq!(value["sourceType"]["name"], json!("StringField"));
        assert_eq!(value["targetType"]["isCollectionOrScalar"], json!(false));
        assert_eq!(value["suggestion"]["kind"], json!("convert-from"));
        assert_eq!(value["suggestion"]["from"]["name"], json!("StringField"));
        assert_eq!(value["suggestion"]["to"]["name"], json!("FloatField"));
    }

    #[test]
    fn unrelated_types_have_no_suggestion() {
        let image = BaseType::from_name("ImageField").unwrap();
        assert_eq!(
            suggest_fix(&FieldType::scalar(image), &FieldType::scalar(BaseType::Integer)),
            None
        );
        // Plurality mismatch across different bases: nothing obvious.
        assert_eq!(
            suggest_fix(
                &FieldType::scalar(BaseType::Integer),
                &FieldType::collection(BaseType::Float)
            ),
            None
        );
    }

    #[test]
    fn error_message_uses_text_notation() {
        let err = ConnectionError::Incompatible {
            source_type: FieldType::collection(BaseType::Integer),
            target_type: FieldType::scalar(BaseType::Integer),
            suggestion: Some(FixSuggestion::Iterate),
        };
        assert_eq!(
            err.to_string(),
            "cannot connect IntegerField[] to IntegerField: incompatible field types"
        );
        assert_eq!(err.code(), "INCOMPATIBLE_TYPES");
        assert_eq!(err.suggestion(), Some(&FixSuggestion::Iterate));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let err = ConnectionError::GenericCollectionLoop {
            source_type: FieldType::collection(BaseType::Collection),
            target_type: FieldType::collection(BaseType::Collection),
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], json!("generic-collection-loop"));
        assert_eq!(value["sourceType"]["name"], json!("CollectionField"));
        assert_eq!(value["targetType"]["isCollection"], json!(true));
        assert!(value.get("source_type").is_none());
    }
}
