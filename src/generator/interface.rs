use tracing::debug;

use crate::lines::{comment, comment_block, indent};
use crate::model::{Api, Operation, Response};

/// Declared responses plus the synthesized 500, appended last when
/// `ensure_500` is set and the operation declares no 500 of its own.
pub(crate) fn responses_with_fallback(
    operation: &Operation,
    api_package: &str,
    ensure_500: bool,
) -> Vec<Response> {
    let mut responses = operation.responses.clone();
    if ensure_500 && !responses.iter().any(|r| r.code == 500) {
        responses.push(Response {
            code: 500,
            description: Some("Auto-generated internal server error response".to_string()),
            json_body_type: Some(format!("{api_package}.InternalServerErrorBody")),
            field_name: "Response500".to_string(),
        });
    }
    responses
}

/// Render the Go interface an API implementation must satisfy, together with
/// the per-operation security policies and request/response records.
///
/// Emitted in order: one `<InterfaceName>Security` authorization-policy
/// variable per operation (OR across options, AND within an option), then
/// per operation a request record (path parameters plain, query parameters
/// as pointers, optional body + parse-error pair, mandatory `Auth` field)
/// and a response record (one pointer field per response, auto-500 last),
/// then the `Implementation` interface itself.
///
/// `api_package` names the shared base-type package providing
/// `AuthorizationOption`, `AuthorizationResult`, `EmptyResponseBody`, and
/// `InternalServerErrorBody`.
pub fn implementation_interface(api: &Api, api_package: &str, ensure_500: bool) -> Vec<String> {
    debug!(
        package = %api.package,
        operations = api.operations.len(),
        ensure_500,
        "rendering implementation interface"
    );
    let mut lines: Vec<String> = Vec::new();

    // Security policy declarations, read at runtime by the authorizer.
    lines.push("var (".to_string());
    let mut var_body: Vec<String> = Vec::new();
    for operation in &api.operations {
        var_body.push(format!(
            "{}Security = []{}.AuthorizationOption{{",
            operation.interface_name, api_package
        ));
        let mut init_body: Vec<String> = Vec::new();
        for auth_option in &operation.security {
            init_body.push("{".to_string());
            for entry in &auth_option.schemes {
                let scopes = entry
                    .scopes
                    .iter()
                    .map(|scope| format!("\"{scope}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                init_body.extend(indent(
                    vec![format!("\"{}\": {{{scopes}}},", entry.scheme)],
                    1,
                ));
            }
            init_body.push("},".to_string());
        }
        var_body.extend(indent(init_body, 1));
        var_body.push("}".to_string());
    }
    lines.extend(indent(var_body, 1));
    lines.push(")".to_string());

    // Request and response records for every operation.
    for operation in &api.operations {
        lines.push(String::new());

        lines.push(format!("type {} struct {{", operation.request_type_name));
        let mut body: Vec<String> = Vec::new();
        for p in &operation.path_parameters {
            if let Some(description) = &p.description {
                body.extend(comment_block(description));
            }
            body.push(format!("{} {}", p.go_field_name, p.go_type));
            body.push(String::new());
        }
        for q in &operation.query_parameters {
            if let Some(description) = &q.description {
                body.extend(comment_block(description));
            }
            body.push(format!("{} *{}", q.go_field_name, q.go_type));
            body.push(String::new());
        }
        if let Some(body_type) = &operation.json_request_body_type {
            body.extend(comment(&[
                "The data contained in the body of this request, if it parsed correctly",
            ]));
            body.push(format!("Body *{body_type}"));
            body.push(String::new());
            body.extend(comment(&[
                "The error encountered when attempting to parse the body of this request",
            ]));
            body.push("BodyParseError error".to_string());
            body.push(String::new());
        }
        body.extend(comment(&["The result of attempting to authorize this request"]));
        body.push(format!("Auth {api_package}.AuthorizationResult"));
        lines.extend(indent(body, 1));
        lines.push("}".to_string());

        lines.push(format!("type {} struct {{", operation.response_type_name));
        let mut body: Vec<String> = Vec::new();
        for response in responses_with_fallback(operation, api_package, ensure_500) {
            if let Some(description) = &response.description {
                body.extend(comment_block(description));
            }
            let body_type = response
                .json_body_type
                .clone()
                .unwrap_or_else(|| format!("{api_package}.EmptyResponseBody"));
            body.push(format!("{} *{body_type}", response.field_name));
            body.push(String::new());
        }
        body.pop();
        lines.extend(indent(body, 1));
        lines.push("}".to_string());
    }

    lines.push(String::new());
    lines.push("type Implementation interface {".to_string());
    let mut body: Vec<String> = Vec::new();
    for operation in &api.operations {
        body.extend(comment(&operation_comments(operation)));
        body.push(format!(
            "{}(ctx context.Context, req *{}) {}",
            operation.interface_name, operation.request_type_name, operation.response_type_name
        ));
        body.push(String::new());
    }
    if !body.is_empty() {
        body.pop();
    }
    lines.extend(indent(body, 1));
    lines.push("}".to_string());

    lines
}

/// Interface-method comment from summary and description: both appear,
/// separated by a `---` divider, only when both exist and differ.
fn operation_comments(operation: &Operation) -> Vec<String> {
    let summary = operation.summary.as_deref().unwrap_or("");
    let description = operation.description.as_deref().unwrap_or("");
    let mut comments: Vec<String> = Vec::new();
    if !summary.is_empty() && summary != description {
        comments.extend(summary.split('\n').map(String::from));
    }
    if !summary.is_empty() && !description.is_empty() && summary != description {
        comments.push("---".to_string());
    }
    if !description.is_empty() {
        comments.extend(description.split('\n').map(String::from));
    }
    comments
}
