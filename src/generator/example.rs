use tracing::debug;

use crate::lines::indent;
use crate::model::Api;

/// Render a minimal concrete implementation of the generated interface.
///
/// Each method builds a zero-value response, populates the field of the
/// first declared response with a zero-value body (`EmptyResponseBody` when
/// the response declares none), and returns it.
///
/// This output is a one-time starting point: regenerating an updated API
/// overwrites the type/interface/route declarations, while these methods
/// are expected to be hand-edited rather than regenerated.
pub fn example_implementation(api: &Api, implementation_name: &str) -> Vec<String> {
    debug!(
        package = %api.package,
        implementation = implementation_name,
        "rendering example implementation"
    );
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("type {implementation_name} struct {{}}"));
    lines.push(String::new());
    for operation in &api.operations {
        lines.push(format!(
            "func (*{implementation_name}) {}(ctx context.Context, req *{pkg}.{}) {pkg}.{} {{",
            operation.interface_name,
            operation.request_type_name,
            operation.response_type_name,
            pkg = api.package
        ));

        let mut body: Vec<String> = Vec::new();
        body.push(format!(
            "response := {}.{}{{}}",
            api.package, operation.response_type_name
        ));
        // Model validation guarantees at least one declared response.
        if let Some(first) = operation.responses.first() {
            let response_type = first.json_body_type.as_deref().unwrap_or("EmptyResponseBody");
            body.push(format!(
                "response.{} = &{}.{response_type}{{}}",
                first.field_name, api.package
            ));
        }
        body.push("return response".to_string());
        lines.extend(indent(body, 1));

        lines.push("}".to_string());
        lines.push(String::new());
    }

    lines
}

/// Render the router wiring for a set of example implementations.
///
/// `implementations` pairs each API name with the struct implementing its
/// interface, in declaration order: one `MakeAPIRouter` call per pair,
/// combined into a single `MultiRouter`.
pub fn example_router_defs(implementations: &[(String, String)], api_package: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for (api_name, implementation) in implementations {
        lines.push(format!(
            "{api_name}Router := {api_name}.MakeAPIRouter(&{implementation}{{}}, &authorizer)"
        ));
    }
    let router_list = implementations
        .iter()
        .map(|(api_name, _)| format!("&{api_name}Router"))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(
        "multiRouter := {api_package}.MultiRouter{{Routers: []{api_package}.PartialRouter{{{router_list}}}}}"
    ));

    lines
}
