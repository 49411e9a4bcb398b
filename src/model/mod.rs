//! The normalized API model the generator renders from.
//!
//! Every entity here is an explicit immutable value type, fully populated and
//! validated by the upstream parsing collaborator before rendering starts.
//! The renderers never mutate the model and hold no state across calls, so
//! output order is exactly the declaration order captured in these types.

mod api;
mod operation;
mod types;

pub(crate) use operation::PLACEHOLDER_RE;

pub use api::Api;
pub use operation::{
    go_method_const, AuthOption, Operation, Parameter, Response, SchemeScopes,
};
pub use types::{is_primitive_go_type, DataType, Field, TypeKind};
