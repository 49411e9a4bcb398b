use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Go primitive types a declared type may alias or coerce to.
///
/// Query-parameter coercion relies on the bit width encoded in the integer
/// and float names, so the list is exhaustive rather than pattern-based.
const PRIMITIVE_GO_TYPES: &[&str] = &[
    "string", "bool", "byte", "int", "int8", "int16", "int32", "int64", "uint", "uint8",
    "uint16", "uint32", "uint64", "float32", "float64",
];

/// Whether `go_type` is a Go primitive rather than a declared type name.
pub fn is_primitive_go_type(go_type: &str) -> bool {
    PRIMITIVE_GO_TYPES.contains(&go_type)
}

/// Which declaration shape a [`DataType`] renders to.
///
/// The kind determines which of `fields`/`enum_values` may be populated;
/// exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// A one-line alias to a Go primitive.
    PrimitiveAlias,
    /// A struct with zero or more fields.
    Record,
    /// A string alias with one named constant per enum value.
    EnumeratedString,
}

/// One field of a record [`DataType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Wire name, emitted in the JSON tag.
    pub api_name: String,
    /// Go field name.
    pub go_name: String,
    /// Go type of the field.
    pub go_type: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Required fields render without a pointer and without `,omitempty`;
    /// non-required fields render with both.
    pub required: bool,
}

/// A declared API data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub kind: TypeKind,
    /// Underlying Go primitive for alias kinds. Enumerated strings default
    /// to `string` when absent; records ignore it.
    #[serde(default)]
    pub underlying: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub enum_values: Vec<String>,
}

impl DataType {
    /// A validated one-line alias to a Go primitive.
    pub fn primitive_alias(
        name: impl Into<String>,
        description: Option<String>,
        underlying: impl Into<String>,
    ) -> Result<Self> {
        let d = DataType {
            name: name.into(),
            description,
            kind: TypeKind::PrimitiveAlias,
            underlying: Some(underlying.into()),
            fields: Vec::new(),
            enum_values: Vec::new(),
        };
        d.validate()?;
        Ok(d)
    }

    /// A validated record type. An empty field list is legal and renders as
    /// a collapsed single-line struct.
    pub fn record(
        name: impl Into<String>,
        description: Option<String>,
        fields: Vec<Field>,
    ) -> Result<Self> {
        let d = DataType {
            name: name.into(),
            description,
            kind: TypeKind::Record,
            underlying: None,
            fields,
            enum_values: Vec::new(),
        };
        d.validate()?;
        Ok(d)
    }

    /// A validated enumerated string type.
    pub fn enumerated_string(
        name: impl Into<String>,
        description: Option<String>,
        enum_values: Vec<String>,
    ) -> Result<Self> {
        let d = DataType {
            name: name.into(),
            description,
            kind: TypeKind::EnumeratedString,
            underlying: None,
            fields: Vec::new(),
            enum_values,
        };
        d.validate()?;
        Ok(d)
    }

    /// Underlying Go type for alias kinds (`string` for enumerated strings).
    pub fn underlying_type(&self) -> &str {
        self.underlying.as_deref().unwrap_or("string")
    }

    /// Check the kind/contents invariant.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            TypeKind::PrimitiveAlias => {
                if !self.fields.is_empty() || !self.enum_values.is_empty() {
                    bail!(
                        "primitive alias `{}` must not declare fields or enum values",
                        self.name
                    );
                }
                if !is_primitive_go_type(self.underlying_type()) {
                    bail!(
                        "primitive alias `{}` aliases non-primitive `{}`",
                        self.name,
                        self.underlying_type()
                    );
                }
            }
            TypeKind::Record => {
                if !self.enum_values.is_empty() {
                    bail!("record `{}` must not declare enum values", self.name);
                }
            }
            TypeKind::EnumeratedString => {
                if !self.fields.is_empty() {
                    bail!("enumerated string `{}` must not declare fields", self.name);
                }
                if self.enum_values.is_empty() {
                    bail!("enumerated string `{}` declares no values", self.name);
                }
            }
        }
        Ok(())
    }
}
