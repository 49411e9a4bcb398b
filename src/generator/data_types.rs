use tracing::trace;

use crate::lines::{comment_block, indent};
use crate::model::{DataType, Field, TypeKind};

/// Render the Go declaration of one data type.
///
/// Primitive aliases and enumerated strings produce a one-line `type` alias;
/// enumerated strings additionally produce a `const (...)` block with one
/// `<TypeName>_<Value>` constant per value. Records produce a struct whose
/// fields carry JSON tags; an empty record collapses to a single line.
pub fn data_type(d_type: &DataType) -> Vec<String> {
    trace!(name = %d_type.name, kind = ?d_type.kind, "rendering data type");

    let mut lines = match &d_type.description {
        Some(description) => comment_block(description),
        None => Vec::new(),
    };

    match d_type.kind {
        TypeKind::PrimitiveAlias | TypeKind::EnumeratedString => {
            lines.push(format!("type {} {}", d_type.name, d_type.underlying_type()));
        }
        TypeKind::Record => {
            lines.push(format!("type {} struct {{", d_type.name));
            for field in &d_type.fields {
                lines.extend(indent(object_field(field), 1));
                lines.push(String::new());
            }
            if d_type.fields.is_empty() {
                // Collapse `type X struct {` into `type X struct {}`.
                if let Some(last) = lines.last_mut() {
                    last.push('}');
                }
            } else {
                lines.pop();
                lines.push("}".to_string());
            }
        }
    }

    if !d_type.enum_values.is_empty() {
        lines.push("const (".to_string());
        lines.extend(indent(
            d_type
                .enum_values
                .iter()
                .map(|v| format!("{name}_{v} {name} = \"{v}\"", name = d_type.name))
                .collect(),
            1,
        ));
        lines.push(")".to_string());
    }

    lines
}

/// Render one struct field, unindented.
///
/// Required fields render as `Name Type` with a plain JSON tag; non-required
/// fields as `Name *Type` with `,omitempty`.
fn object_field(field: &Field) -> Vec<String> {
    let mut lines = match &field.description {
        Some(description) => comment_block(description),
        None => Vec::new(),
    };
    lines.push(format!(
        "{} {}{} `json:\"{}{}\"`",
        field.go_name,
        if field.required { "" } else { "*" },
        field.go_type,
        field.api_name,
        if field.required { "" } else { ",omitempty" },
    ));
    lines
}
