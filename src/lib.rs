//! # go-server-gen
//!
//! **go-server-gen** turns a normalized HTTP API model into statically-typed
//! Go server scaffolding: data type declarations, a business-logic interface
//! contract, per-operation HTTP handlers, a route table, and a minimal
//! example implementation.
//!
//! ## Overview
//!
//! The crate is the code-synthesis stage of a larger pipeline. Upstream, an
//! OpenAPI document is parsed and normalized into the [`model`] value types
//! (operations, parameters, data types, security requirements); downstream,
//! a thin driver concatenates the rendered fragments into `.gen.go` files
//! and fills package-header templates. Neither stage lives here: this crate
//! is a set of pure renderers over an immutable [`model::Api`].
//!
//! ## Architecture
//!
//! - **[`model`]** - explicit immutable value types for the API description,
//!   validated fully at construction
//! - **[`lines`]** - the line-oriented emission representation: ordered
//!   `Vec<String>` documents plus `comment`/`indent`/import-block transforms
//! - **[`generator`]** - the five renderers: type declarations, the
//!   implementation interface with request/response records and security
//!   policies, routed handlers, the route table, and example scaffolding
//!
//! ## Rendering Flow
//!
//! ```text
//! Api model ─┬─> generator::data_type              ─> type declarations
//!            ├─> generator::implementation_interface ─> interface + records
//!            ├─> generator::routes                 ─> handlers + Go imports
//!            ├─> generator::routing                ─> route table
//!            └─> generator::example_implementation ─> starter code
//! ```
//!
//! All renderers read the same model and may run in any order; none holds
//! state across calls. Output ordering tracks model declaration order
//! exactly, so repeated runs over an unchanged model are byte-identical and
//! diff-stable.
//!
//! ## Generated handler guarantees
//!
//! Every emitted handler produces exactly one HTTP reply. Declared responses
//! are checked in declaration order; when the auto-500 option is enabled a
//! synthesized 500 is appended and checked last; and a fixed-diagnostic 500
//! is written when the implementation set no response field at all.
//! Authorization results are stored on the request and never short-circuit
//! the handler, malformed JSON bodies are captured as data, and absent or
//! unparseable numeric query parameters leave their field unset.
//!
//! ## Example
//!
//! ```
//! use go_server_gen::generator::{implementation_interface, routes, routing};
//! use go_server_gen::model::{Api, Operation, Parameter, Response};
//! use std::collections::BTreeMap;
//!
//! # fn main() -> anyhow::Result<()> {
//! let api = Api::new(
//!     "widgets",
//!     None,
//!     vec![Operation {
//!         interface_name: "GetWidget".to_string(),
//!         request_type_name: "GetWidgetRequest".to_string(),
//!         response_type_name: "GetWidgetResponse".to_string(),
//!         verb: http::Method::GET,
//!         path: "/widgets/{id}".to_string(),
//!         path_parameters: vec![Parameter {
//!             api_name: "id".to_string(),
//!             go_field_name: "Id".to_string(),
//!             go_type: "string".to_string(),
//!             description: None,
//!         }],
//!         query_parameters: vec![],
//!         json_request_body_type: None,
//!         responses: vec![Response {
//!             code: 200,
//!             description: None,
//!             json_body_type: Some("WidgetBody".to_string()),
//!             field_name: "Response200".to_string(),
//!         }],
//!         security: vec![],
//!         summary: None,
//!         description: None,
//!     }],
//!     BTreeMap::new(),
//! )?;
//!
//! let interface = implementation_interface(&api, "api", true);
//! let (handlers, imports) = routes(&api, "api", true)?;
//! let table = routing(&api, "api");
//!
//! assert!(interface.iter().any(|l| l.contains("type Implementation interface {")));
//! assert!(imports.contains("net/http"));
//! assert_eq!(table[0], "router := APIRouter{Implementation: impl, Authorizer: auth, Routes: make([]*api.Route, 1)}");
//! # Ok(())
//! # }
//! ```

pub mod generator;
pub mod lines;
pub mod model;

pub use generator::{
    data_type, example_implementation, example_router_defs, implementation_interface,
    route_pattern, routes, routing,
};
pub use model::{
    go_method_const, Api, AuthOption, DataType, Field, Operation, Parameter, Response,
    SchemeScopes, TypeKind,
};
