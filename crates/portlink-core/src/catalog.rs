//! TypeCatalog of node templates.
//!
//! The catalog is the registry that resolves port declarations to
//! [`FieldType`] values. Each [`NodeTemplate`] lists its input and output
//! ports in declaration order ([`IndexMap`]), and templates themselves keep
//! registration order so listings are stable.
//!
//! A catalog document on disk looks like:
//!
//! ```json
//! { "templates": [
//!     { "nodeType": "add",
//!       "inputs":  { "a": { "name": "IntegerField" } },
//!       "outputs": { "value": { "name": "IntegerField" } } }
//! ] }
//! ```

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field_type::FieldType;

/// Which side of a node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("input"),
            Direction::Output => f.write_str("output"),
        }
    }
}

/// Addresses a port by node type and port name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    #[serde(rename = "node")]
    pub node_type: String,
    pub port: String,
}

impl PortRef {
    pub fn new(node_type: impl Into<String>, port: impl Into<String>) -> Self {
        PortRef {
            node_type: node_type.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node_type, self.port)
    }
}

/// Port declarations of one node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTemplate {
    pub node_type: String,
    #[serde(default)]
    pub inputs: IndexMap<String, FieldType>,
    #[serde(default)]
    pub outputs: IndexMap<String, FieldType>,
}

impl NodeTemplate {
    pub fn new(node_type: impl Into<String>) -> Self {
        NodeTemplate {
            node_type: node_type.into(),
            inputs: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }

    /// Adds (or replaces) an input port.
    pub fn with_input(mut self, port: impl Into<String>, ty: FieldType) -> Self {
        self.inputs.insert(port.into(), ty);
        self
    }

    /// Adds (or replaces) an output port.
    pub fn with_output(mut self, port: impl Into<String>, ty: FieldType) -> Self {
        self.outputs.insert(port.into(), ty);
        self
    }

    /// Looks up a port on the given side.
    pub fn port(&self, direction: Direction, port: &str) -> Option<&FieldType> {
        match direction {
            Direction::Input => self.inputs.get(port),
            Direction::Output => self.outputs.get(port),
        }
    }
}

/// Registry of node templates, keyed by node type.
///
/// Read-only once loaded; share it behind an `Arc` across threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct TypeCatalog {
    templates: IndexMap<String, NodeTemplate>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template.
    ///
    /// Returns [`CoreError::DuplicateNodeType`] if a template with the same
    /// node type already exists.
    pub fn register_template(&mut self, template: NodeTemplate) -> Result<(), CoreError> {
        if self.templates.contains_key(&template.node_type) {
            return Err(CoreError::DuplicateNodeType {
                node_type: template.node_type,
            });
        }
        self.templates.insert(template.node_type.clone(), template);
        Ok(())
    }

    pub fn template(&self, node_type: &str) -> Option<&NodeTemplate> {
        self.templates.get(node_type)
    }

    pub fn input(&self, node_type: &str, port: &str) -> Option<&FieldType> {
        self.template(node_type)?.port(Direction::Input, port)
    }

    pub fn output(&self, node_type: &str, port: &str) -> Option<&FieldType> {
        self.template(node_type)?.port(Direction::Output, port)
    }

    /// Resolves a port reference to its declared field type.
    pub fn resolve(&self, port: &PortRef, direction: Direction) -> Result<&FieldType, CoreError> {
        let template = self
            .template(&port.node_type)
            .ok_or_else(|| CoreError::UnknownNodeType {
                node_type: port.node_type.clone(),
            })?;
        template
            .port(direction, &port.port)
            .ok_or_else(|| CoreError::UnknownPort {
                node_type: port.node_type.clone(),
                port: port.port.clone(),
                direction,
            })
    }

    /// Templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeTemplate> {
        self.templates.values()
    }

    /// Every input port across all templates, in catalog order.
    pub fn input_ports(&self) -> impl Iterator<Item = (PortRef, &FieldType)> {
        self.iter().flat_map(|template| {
            template
                .inputs
                .iter()
                .map(move |(port, ty)| (PortRef::new(template.node_type.as_str(), port.as_str()), ty))
        })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parses a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// On-disk shape: templates as an ordered list.
#[derive(Serialize, Deserialize)]
struct CatalogDocument {
    templates: Vec<NodeTemplate>,
}

impl TryFrom<CatalogDocument> for TypeCatalog {
    type Error = CoreError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        let mut catalog = TypeCatalog::new();
        for template in doc.templates {
            catalog.register_template(template)?;
        }
        Ok(catalog)
    }
}

impl From<TypeCatalog> for CatalogDocument {
    fn from(catalog: TypeCatalog) -> Self {
        CatalogDocument {
            templates: catalog.templates.into_values().collect(),
        }
    }
}
