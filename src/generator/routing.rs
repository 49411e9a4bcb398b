use tracing::debug;

use crate::model::{go_method_const, Api};

/// Anchored route pattern for one operation path.
///
/// Every `{name}` placeholder becomes a named capture matching a run of
/// non-separator characters, the shared prefix (when present) is prepended,
/// and the whole pattern is anchored at both ends:
/// `/widgets/{id}` → `^/widgets/(?P<id>[^/]*)$`.
pub fn route_pattern(path_prefix: Option<&str>, path: &str) -> String {
    let prefix = match path_prefix {
        Some(p) => format!("/{p}"),
        None => String::new(),
    };
    let expanded = crate::model::PLACEHOLDER_RE.replace_all(path, "(?P<${1}>[^/]*)");
    format!("^{prefix}{expanded}$")
}

/// Render the body of the `MakeAPIRouter` function: a route table sized
/// exactly to the operation count, populated in declaration order with
/// (verb, compiled pattern, handler) triples.
///
/// The first pattern assignment declares the variable (`:=`), subsequent
/// ones reassign it; a cosmetic convention of the emitted code.
pub fn routing(api: &Api, api_package: &str) -> Vec<String> {
    debug!(package = %api.package, operations = api.operations.len(), "rendering route table");
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "router := APIRouter{{Implementation: impl, Authorizer: auth, Routes: make([]*{}.Route, {})}}",
        api_package,
        api.operations.len()
    ));
    lines.push(String::new());
    for (i, operation) in api.operations.iter().enumerate() {
        lines.push(format!(
            "pattern {}= regexp.MustCompile(\"{}\")",
            if i == 0 { ":" } else { "" },
            route_pattern(api.path_prefix.as_deref(), &operation.path)
        ));
        lines.push(format!(
            "router.Routes[{i}] = &{}.Route{{Method: {}, Pattern: pattern, Handler: router.{}}}",
            api_package,
            go_method_const(&operation.verb),
            operation.interface_name
        ));
        lines.push(String::new());
    }
    lines.push("return router".to_string());
    lines
}
