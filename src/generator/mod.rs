//! # Generator Module
//!
//! Renders a validated [`Api`](crate::model::Api) model into Go server
//! scaffolding. Five renderers produce five categories of text:
//!
//! - [`data_type`] - type declarations (aliases, structs, enum constants)
//! - [`implementation_interface`] - authorization-policy declarations,
//!   request/response records, and the `Implementation` interface
//! - [`routes`] - one routed handler function per operation, plus the set of
//!   Go packages the emitted code requires
//! - [`routing`] - the fixed-size route table binding compiled path patterns
//!   to handlers
//! - [`example_implementation`] / [`example_router_defs`] - a minimal
//!   starter implementation and router wiring
//!
//! Every renderer is a pure function of its input: output order tracks model
//! declaration order exactly, so repeated runs over an unchanged model are
//! byte-identical. Assembling the emitted line vectors into files, merging
//! import sets into an import block, and persisting the result are the
//! caller's concern.
//!
//! ## Generated handler contract
//!
//! Each handler emitted by [`routes`] always produces exactly one HTTP
//! reply: declared responses are checked in declaration order, the optional
//! auto-500 is checked last, and a fixed-diagnostic 500 is the terminal
//! fallback when the implementation set no response field at all.

mod data_types;
mod example;
mod interface;
mod routes;
mod routing;

pub use data_types::data_type;
pub use example::{example_implementation, example_router_defs};
pub use interface::implementation_interface;
pub use routes::routes;
pub use routing::{route_pattern, routing};
