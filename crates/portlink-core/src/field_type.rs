//! Field type descriptors carried by node ports.
//!
//! A [`FieldType`] pairs a [`BaseType`] with a [`Plurality`]. The reserved
//! base names (generic collection, collection item, integer, float, string,
//! any) are closed enum variants; every other name is an opaque
//! [`CustomName`] compared only by equality.
//!
//! On the wire a descriptor is the editor's flat JSON shape:
//!
//! ```json
//! { "name": "IntegerField", "isCollection": true, "isCollectionOrScalar": false }
//! ```
//!
//! Deserialization is where the plurality invariant is enforced: a
//! descriptor with both flags set is rejected with
//! [`CoreError::ConflictingPlurality`]. Once constructed, a `FieldType`
//! cannot express that state at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Wire name of the generic collection base type.
pub const COLLECTION: &str = "CollectionField";
/// Wire name of the collection item placeholder.
pub const COLLECTION_ITEM: &str = "CollectionItemField";
/// Wire name of the integer base type.
pub const INTEGER: &str = "IntegerField";
/// Wire name of the float base type.
pub const FLOAT: &str = "FloatField";
/// Wire name of the string base type.
pub const STRING: &str = "StringField";
/// Wire name of the universal "any" type.
pub const ANY: &str = "AnyField";

/// Base type of a port, independent of plurality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BaseType {
    /// A collection of unspecified base type.
    Collection,
    /// Element placeholder accepted by collections.
    CollectionItem,
    Integer,
    Float,
    String,
    /// Accepts anything when used as a target.
    Any,
    /// Any other node-defined base type.
    Custom(CustomName),
}

/// A non-reserved base type name.
///
/// Only constructed through [`BaseType::from_name`], so a reserved wire name
/// such as `IntegerField` can never end up as a custom name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomName(String);

impl CustomName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl BaseType {
    /// Resolves a wire name to a base type.
    ///
    /// Reserved names map to their enum variants; any other non-empty name
    /// becomes [`BaseType::Custom`] and is kept verbatim.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        let base = match name {
            "" => return Err(CoreError::EmptyTypeName),
            COLLECTION => BaseType::Collection,
            COLLECTION_ITEM => BaseType::CollectionItem,
            INTEGER => BaseType::Integer,
            FLOAT => BaseType::Float,
            STRING => BaseType::String,
            ANY => BaseType::Any,
            other => BaseType::Custom(CustomName(other.to_string())),
        };
        Ok(base)
    }

    /// Returns the wire name of this base type.
    pub fn as_str(&self) -> &str {
        match self {
            BaseType::Collection => COLLECTION,
            BaseType::CollectionItem => COLLECTION_ITEM,
            BaseType::Integer => INTEGER,
            BaseType::Float => FLOAT,
            BaseType::String => STRING,
            BaseType::Any => ANY,
            BaseType::Custom(name) => name.as_str(),
        }
    }

    /// Returns `true` for the six names with built-in meaning.
    pub fn is_reserved(&self) -> bool {
        !matches!(self, BaseType::Custom(_))
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for BaseType {
    type Error = CoreError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        BaseType::from_name(&name)
    }
}

impl From<BaseType> for String {
    fn from(base: BaseType) -> Self {
        match base {
            BaseType::Custom(CustomName(name)) => name,
            reserved => reserved.as_str().to_string(),
        }
    }
}

/// How many values of the base type a port carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Plurality {
    /// A single value.
    Scalar,
    /// An ordered aggregate.
    Collection,
    /// Either a single value or an ordered aggregate.
    CollectionOrScalar,
}

impl Plurality {
    /// Builds a plurality from the editor's two boolean flags.
    ///
    /// Returns `None` when both flags are set.
    pub fn from_flags(is_collection: bool, is_collection_or_scalar: bool) -> Option<Self> {
        match (is_collection, is_collection_or_scalar) {
            (false, false) => Some(Plurality::Scalar),
            (true, false) => Some(Plurality::Collection),
            (false, true) => Some(Plurality::CollectionOrScalar),
            (true, true) => None,
        }
    }
}

impl fmt::Display for Plurality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Plurality::Scalar => "scalar",
            Plurality::Collection => "collection",
            Plurality::CollectionOrScalar => "collection-or-scalar",
        };
        f.write_str(s)
    }
}

/// The declared type of a node port.
///
/// Immutable value object. Equality is structural over base name and
/// plurality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireFieldType", into = "WireFieldType")]
pub struct FieldType {
    name: BaseType,
    plurality: Plurality,
}

impl FieldType {
    pub fn new(name: BaseType, plurality: Plurality) -> Self {
        FieldType { name, plurality }
    }

    pub fn scalar(name: BaseType) -> Self {
        Self::new(name, Plurality::Scalar)
    }

    pub fn collection(name: BaseType) -> Self {
        Self::new(name, Plurality::Collection)
    }

    pub fn collection_or_scalar(name: BaseType) -> Self {
        Self::new(name, Plurality::CollectionOrScalar)
    }

    pub fn name(&self) -> &BaseType {
        &self.name
    }

    pub fn plurality(&self) -> Plurality {
        self.plurality
    }

    pub fn is_collection(&self) -> bool {
        self.plurality == Plurality::Collection
    }

    pub fn is_collection_or_scalar(&self) -> bool {
        self.plurality == Plurality::CollectionOrScalar
    }

    pub fn is_scalar(&self) -> bool {
        self.plurality == Plurality::Scalar
    }

    /// Returns the same base type with a different plurality.
    pub fn with_plurality(&self, plurality: Plurality) -> Self {
        Self::new(self.name.clone(), plurality)
    }
}

/// Renders `Name`, `Name[]` or `Name|Name[]`.
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.plurality {
            Plurality::Scalar => write!(f, "{}", self.name),
            Plurality::Collection => write!(f, "{}[]", self.name),
            Plurality::CollectionOrScalar => write!(f, "{}|{}[]", self.name, self.name),
        }
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let malformed = |reason: &str| CoreError::MalformedType {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        // Whitespace and `[`, `]`, `|` are notation here, never part of a name.
        let base = |name: &str| match name
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '[' | ']' | '|'))
        {
            Some(bad) => Err(malformed(&format!("invalid character {:?} in type name", bad))),
            None => BaseType::from_name(name),
        };

        if let Some((scalar, collection)) = input.split_once('|') {
            let scalar = scalar.trim();
            let element = collection
                .trim()
                .strip_suffix("[]")
                .ok_or_else(|| malformed("expected 'Name|Name[]'"))?;
            if scalar != element {
                return Err(malformed("both sides of '|' must name the same base type"));
            }
            return Ok(FieldType::collection_or_scalar(base(scalar)?));
        }

        match input.strip_suffix("[]") {
            Some(element) => Ok(FieldType::collection(base(element)?)),
            None => Ok(FieldType::scalar(base(input)?)),
        }
    }
}

/// Flat JSON shape used by the editor.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFieldType {
    name: BaseType,
    #[serde(default)]
    is_collection: bool,
    #[serde(default)]
    is_collection_or_scalar: bool,
}

impl TryFrom<WireFieldType> for FieldType {
    type Error = CoreError;

    fn try_from(wire: WireFieldType) -> Result<Self, Self::Error> {
        let plurality = Plurality::from_flags(wire.is_collection, wire.is_collection_or_scalar)
            .ok_or_else(|| CoreError::ConflictingPlurality {
                name: wire.name.to_string(),
            })?;
        Ok(FieldType::new(wire.name, plurality))
    }
}

impl From<FieldType> for WireFieldType {
    fn from(ty: FieldType) -> Self {
        WireFieldType {
            is_collection: ty.is_collection(),
            is_collection_or_scalar: ty.is_collection_or_scalar(),
            name: ty.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn custom(name: &str) -> BaseType {
        BaseType::from_name(name).unwrap()
    }

    // -----------------------------------------------------------------------
    // BaseType
    // -----------------------------------------------------------------------

    #[test]
    fn reserved_names_resolve_to_variants() {
        assert_eq!(custom("CollectionField"), BaseType::Collection);
        assert_eq!(custom("CollectionItemField"), BaseType::CollectionItem);
        assert_eq!(custom("IntegerField"), BaseType::Integer);
        assert_eq!(custom("FloatField"), BaseType::Float);
        assert_eq!(custom("StringField"), BaseType::String);
        assert_eq!(custom("AnyField"), BaseType::Any);
    }

    #[test]
    fn other_names_are_custom() {
        let image = custom("ImageField");
        assert!(!image.is_reserved());
        assert_eq!(image.as_str(), "ImageField");
        assert!(BaseType::Integer.is_reserved());
    }

    #[test]
    fn reserved_names_are_case_sensitive() {
        assert!(!custom("integerfield").is_reserved());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(BaseType::from_name(""), Err(CoreError::EmptyTypeName)));
    }

    #[test]
    fn notation_characters_in_text_name_are_rejected() {
        for bad in ["Image Field", "Image[]Field", "A|B[]x", "Tab\tField", "Image Field[]"] {
            assert!(
                matches!(bad.parse::<FieldType>(), Err(CoreError::MalformedType { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn wire_names_are_opaque() {
        let spaced = BaseType::from_name("My Field").unwrap();
        assert!(matches!(spaced, BaseType::Custom(ref name) if name.as_str() == "My Field"));
        assert!(!BaseType::from_name("Image[]|Field").unwrap().is_reserved());
    }

    // -----------------------------------------------------------------------
    // Plurality
    // -----------------------------------------------------------------------

    #[test]
    fn plurality_from_flags() {
        assert_eq!(Plurality::from_flags(false, false), Some(Plurality::Scalar));
        assert_eq!(Plurality::from_flags(true, false), Some(Plurality::Collection));
        assert_eq!(
            Plurality::from_flags(false, true),
            Some(Plurality::CollectionOrScalar)
        );
        assert_eq!(Plurality::from_flags(true, true), None);
    }

    #[test]
    fn accessors_follow_plurality() {
        let scalar = FieldType::scalar(BaseType::Integer);
        assert!(scalar.is_scalar() && !scalar.is_collection() && !scalar.is_collection_or_scalar());

        let coll = FieldType::collection(BaseType::Integer);
        assert!(!coll.is_scalar() && coll.is_collection() && !coll.is_collection_or_scalar());

        let cos = FieldType::collection_or_scalar(BaseType::Integer);
        assert!(!cos.is_scalar() && !cos.is_collection() && cos.is_collection_or_scalar());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            FieldType::collection(custom("ImageField")),
            FieldType::collection(custom("ImageField"))
        );
        assert_ne!(
            FieldType::collection(BaseType::Integer),
            FieldType::collection_or_scalar(BaseType::Integer)
        );
        assert_eq!(
            FieldType::scalar(BaseType::Float).with_plurality(Plurality::Collection),
            FieldType::collection(BaseType::Float)
        );
    }

    // -----------------------------------------------------------------------
    // Wire format
    // -----------------------------------------------------------------------

    #[test]
    fn deserializes_editor_shape() {
        let ty: FieldType = serde_json::from_value(json!({
            "name": "IntegerField",
            "isCollection": true,
            "isCollectionOrScalar": false
        }))
        .unwrap();
        assert_eq!(ty, FieldType::collection(BaseType::Integer));
    }

    #[test]
    fn missing_flags_default_to_scalar() {
        let ty: FieldType = serde_json::from_value(json!({ "name": "ImageField" })).unwrap();
        assert_eq!(ty, FieldType::scalar(custom("ImageField")));
    }

    #[test]
    fn name_with_space_deserializes_to_custom() {
        let ty: FieldType = serde_json::from_str(r#"{"name":"My Field"}"#).unwrap();
        assert_eq!(ty, FieldType::scalar(custom("My Field")));
        assert_eq!(ty.name().as_str(), "My Field");
    }

    #[test]
    fn both_flags_set_is_rejected() {
        let err = serde_json::from_value::<FieldType>(json!({
            "name": "IntegerField",
            "isCollection": true,
            "isCollectionOrScalar": true
        }))
        .unwrap_err();
        assert!(err.to_string().contains("cannot be both"), "{err}");
    }

    #[test]
    fn empty_name_on_the_wire_is_rejected() {
        assert!(serde_json::from_value::<FieldType>(json!({ "name": "" })).is_err());
    }

    #[test]
    fn serializes_editor_shape() {
        let value = serde_json::to_value(FieldType::collection_or_scalar(BaseType::String)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "StringField",
                "isCollection": false,
                "isCollectionOrScalar": true
            })
        );
    }

    // -----------------------------------------------------------------------
    // Text notation
    // -----------------------------------------------------------------------

    #[test]
    fn display_notation() {
        insta::assert_snapshot!(FieldType::scalar(BaseType::Integer).to_string(), @"IntegerField");
        insta::assert_snapshot!(FieldType::collection(custom("ImageField")).to_string(), @"ImageField[]");
        insta::assert_snapshot!(
            FieldType::collection_or_scalar(BaseType::Float).to_string(),
            @"FloatField|FloatField[]"
        );
    }

    #[test]
    fn parses_all_pluralities() {
        assert_eq!(
            "IntegerField".parse::<FieldType>().unwrap(),
            FieldType::scalar(BaseType::Integer)
        );
        assert_eq!(
            "ImageField[]".parse::<FieldType>().unwrap(),
            FieldType::collection(custom("ImageField"))
        );
        assert_eq!(
            " FloatField | FloatField[] ".parse::<FieldType>().unwrap(),
            FieldType::collection_or_scalar(BaseType::Float)
        );
    }

    #[test]
    fn collection_or_scalar_halves_must_agree() {
        let err = "FloatField|IntegerField[]".parse::<FieldType>().unwrap_err();
        assert!(matches!(err, CoreError::MalformedType { .. }));

        let err = "FloatField|FloatField".parse::<FieldType>().unwrap_err();
        assert!(matches!(err, CoreError::MalformedType { .. }));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!("".parse::<FieldType>(), Err(CoreError::EmptyTypeName)));
        assert!(matches!("[]".parse::<FieldType>(), Err(CoreError::EmptyTypeName)));
    }

    proptest::proptest! {
        #[test]
        fn custom_names_never_shadow_reserved_names(name in "[A-Za-z]{1,8}(Field)?") {
            if let Ok(BaseType::Custom(custom)) = BaseType::from_name(&name) {
                proptest::prop_assert!(
                    ![COLLECTION, COLLECTION_ITEM, INTEGER, FLOAT, STRING, ANY].contains(&custom.as_str())
                );
            }
        }
    }

    #[test]
    fn nested_collections_are_rejected() {
        assert!(matches!(
            "IntegerField[][]".parse::<FieldType>(),
            Err(CoreError::MalformedType { .. })
        ));
    }
}
