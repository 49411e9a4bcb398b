use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::operation::Operation;
use super::types::is_primitive_go_type;

/// A complete, validated API ready for rendering.
///
/// Constructed once by the upstream parsing collaborator via [`Api::new`];
/// the renderers only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    /// Go package name the generated declarations belong to.
    pub package: String,
    /// Shared path prefix applied to every route pattern, without slashes.
    #[serde(default)]
    pub path_prefix: Option<String>,
    /// Operations in declaration order; rendering order follows this order
    /// everywhere.
    pub operations: Vec<Operation>,
    /// Declared type name → underlying Go primitive, used for
    /// query-parameter coercion.
    #[serde(default)]
    pub base_types: BTreeMap<String, String>,
}

impl Api {
    /// Build and validate an API model.
    ///
    /// # Errors
    ///
    /// Fails when any operation violates its invariants or when a base-type
    /// entry maps to something other than a Go primitive.
    pub fn new(
        package: impl Into<String>,
        path_prefix: Option<String>,
        operations: Vec<Operation>,
        base_types: BTreeMap<String, String>,
    ) -> Result<Self> {
        for operation in &operations {
            operation.validate()?;
        }
        for (name, base) in &base_types {
            if !is_primitive_go_type(base) {
                bail!("declared type `{name}` maps to non-primitive base `{base}`");
            }
        }
        Ok(Api {
            package: package.into(),
            path_prefix,
            operations,
            base_types,
        })
    }

    /// Resolve a Go type to its primitive base: primitives resolve to
    /// themselves, declared types through the base-type lookup.
    pub fn primitive_type_for<'a>(&'a self, go_type: &'a str) -> Option<&'a str> {
        if is_primitive_go_type(go_type) {
            Some(go_type)
        } else {
            self.base_types.get(go_type).map(String::as_str)
        }
    }
}
