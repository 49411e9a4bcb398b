use anyhow::{bail, Result};
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// `{name}` placeholders in a path template.
pub(crate) static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]*)\}").expect("placeholder regex is valid"));

/// One operation parameter, either path or query depending on which list of
/// the [`Operation`] it appears in.
///
/// Path parameters are always present at request time and render as plain
/// fields; query parameters may be absent and render as pointer fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Wire name, as it appears in the path template or query string.
    pub api_name: String,
    /// Go field name on the request record.
    pub go_field_name: String,
    /// Go type of the parameter.
    pub go_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One declared response of an operation.
///
/// Declaration order determines dispatch precedence: the first non-nil
/// response field becomes the HTTP reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub code: u16,
    #[serde(default)]
    pub description: Option<String>,
    /// Go type of the JSON body, if any. `None` renders the shared
    /// `EmptyResponseBody` type.
    #[serde(default)]
    pub json_body_type: Option<String>,
    /// Response-record field checked during dispatch, unique per operation.
    pub field_name: String,
}

/// Scopes required from one named authorization scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeScopes {
    pub scheme: String,
    pub scopes: Vec<String>,
}

/// One satisfying combination of authorization schemes and scopes.
///
/// An operation's policy is satisfied when any single option is fully
/// satisfied: OR across options, AND within an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthOption {
    pub schemes: Vec<SchemeScopes>,
}

/// One API endpoint: verb + path with its parameters, body, responses, and
/// authorization policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Method name on the generated `Implementation` interface.
    pub interface_name: String,
    pub request_type_name: String,
    pub response_type_name: String,
    #[serde(with = "verb_serde")]
    pub verb: Method,
    /// Path template, possibly containing `{name}` placeholders.
    pub path: String,
    /// Must match the left-to-right placeholder order of `path`.
    pub path_parameters: Vec<Parameter>,
    pub query_parameters: Vec<Parameter>,
    /// Go type of the JSON request body, when the operation declares one.
    #[serde(default)]
    pub json_request_body_type: Option<String>,
    pub responses: Vec<Response>,
    /// OR-of-ANDs authorization policy, in declaration order.
    #[serde(default)]
    pub security: Vec<AuthOption>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Operation {
    /// Check the operation invariants: path-parameter order tracks the
    /// placeholder order of the template, at least one response is declared,
    /// and response field names are unique.
    pub fn validate(&self) -> Result<()> {
        let placeholders: Vec<&str> = PLACEHOLDER_RE
            .captures_iter(&self.path)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        let declared: Vec<&str> = self.path_parameters.iter().map(|p| p.api_name.as_str()).collect();
        if placeholders != declared {
            bail!(
                "operation `{}`: path parameters {:?} do not match template placeholders {:?} in `{}`",
                self.interface_name,
                declared,
                placeholders,
                self.path
            );
        }
        if self.responses.is_empty() {
            bail!("operation `{}` declares no responses", self.interface_name);
        }
        let mut seen = HashSet::new();
        for response in &self.responses {
            if !seen.insert(response.field_name.as_str()) {
                bail!(
                    "operation `{}`: duplicate response field `{}`",
                    self.interface_name,
                    response.field_name
                );
            }
        }
        Ok(())
    }
}

/// Go expression naming an HTTP verb: the `net/http` method constant for
/// standard verbs, a quoted literal otherwise.
pub fn go_method_const(method: &Method) -> String {
    let name = match method.as_str() {
        "GET" => "http.MethodGet",
        "HEAD" => "http.MethodHead",
        "POST" => "http.MethodPost",
        "PUT" => "http.MethodPut",
        "PATCH" => "http.MethodPatch",
        "DELETE" => "http.MethodDelete",
        "CONNECT" => "http.MethodConnect",
        "OPTIONS" => "http.MethodOptions",
        "TRACE" => "http.MethodTrace",
        other => return format!("\"{other}\""),
    };
    name.to_string()
}

mod verb_serde {
    use http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
        let s = String::deserialize(deserializer)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
