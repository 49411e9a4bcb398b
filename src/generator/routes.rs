use anyhow::{bail, Result};
use std::collections::BTreeSet;
use tracing::{debug, trace};

use super::interface::responses_with_fallback;
use crate::lines::{comment, indent};
use crate::model::{Api, Parameter};

/// Render one routed handler function per operation.
///
/// Returns the handler lines and the set of Go packages the emitted code
/// requires. The set contains exactly the packages referenced by the emitted
/// lines: `regexp` and `net/http` always (handler signature), `context`
/// always (implementation invocation), `strconv` only when a numeric query
/// parameter is coerced, `encoding/json` only when a request body is
/// decoded.
///
/// Each handler follows a fixed contract: zero-value request, unconditional
/// authorization-result store, positional path-capture assignment,
/// presence-guarded query coercion, optional body decode capturing both
/// value and error, a derived cancellable context with deferred cancel, the
/// implementation call, then first-non-nil response dispatch in declaration
/// order with a terminal synthesized 500.
///
/// # Errors
///
/// Fails when a query parameter's primitive base type is neither
/// string-like, integer-like, nor float-like, or when a non-primitive query
/// type has no declared base type. Both signal a defect in the upstream
/// model.
pub fn routes(api: &Api, api_package: &str, ensure_500: bool) -> Result<(Vec<String>, BTreeSet<String>)> {
    debug!(
        package = %api.package,
        operations = api.operations.len(),
        ensure_500,
        "rendering operation handlers"
    );
    let mut lines: Vec<String> = Vec::new();
    let mut imports: BTreeSet<String> = BTreeSet::new();

    for operation in &api.operations {
        trace!(operation = %operation.interface_name, "rendering handler");
        imports.insert("regexp".to_string());
        imports.insert("net/http".to_string());
        lines.push(format!(
            "func (s *APIRouter) {}(exp *regexp.Regexp, w http.ResponseWriter, r *http.Request) {{",
            operation.interface_name
        ));

        let mut body: Vec<String> = Vec::new();

        body.push(format!("var req {}", operation.request_type_name));
        body.push(String::new());

        // Authorization failure handling is deferred to the implementation;
        // the handler stores whatever result comes back and continues.
        body.extend(comment(&["Authorize request"]));
        body.push(format!(
            "req.Auth = s.Authorizer.Authorize(w, r, {}Security)",
            operation.interface_name
        ));
        body.push(String::new());

        if !operation.path_parameters.is_empty() {
            body.extend(comment(&["Parse path parameters"]));
            body.push("pathMatch := exp.FindStringSubmatch(r.URL.Path)".to_string());
            for (i, p) in operation.path_parameters.iter().enumerate() {
                if p.go_type == "string" {
                    body.push(format!("req.{} = pathMatch[{}]", p.go_field_name, i + 1));
                } else {
                    // Unguarded conversion: a malformed capture fails at
                    // request time. Kept for output compatibility.
                    body.push(format!(
                        "req.{} = {}(pathMatch[{}])",
                        p.go_field_name,
                        p.go_type,
                        i + 1
                    ));
                }
            }
            body.push(String::new());
        }

        if !operation.query_parameters.is_empty() {
            body.extend(comment(&["Copy query parameters"]));
            body.push("query := r.URL.Query()".to_string());
            body.extend(comment(&["TODO: Change to query.Has after Go 1.17"]));
            for q in &operation.query_parameters {
                body.push(format!("if query.Get(\"{}\") != \"\" {{", q.api_name));
                body.extend(indent(query_coercion(api, q, &mut imports)?, 1));
                body.push("}".to_string());
            }
            body.push(String::new());
        }

        if let Some(body_type) = &operation.json_request_body_type {
            imports.insert("encoding/json".to_string());
            body.extend(comment(&["Parse request body"]));
            body.push(format!("req.Body = new({body_type})"));
            body.push("defer r.Body.Close()".to_string());
            body.push("req.BodyParseError = json.NewDecoder(r.Body).Decode(req.Body)".to_string());
            body.push(String::new());
        }

        imports.insert("context".to_string());
        body.extend(comment(&["Call implementation"]));
        body.push("ctx, cancel := context.WithCancel(r.Context())".to_string());
        body.push("defer cancel()".to_string());
        body.push(format!(
            "response := s.Implementation.{}(ctx, &req)",
            operation.interface_name
        ));
        body.push(String::new());

        body.extend(comment(&["Write response to client"]));
        for response in responses_with_fallback(operation, api_package, ensure_500) {
            body.push(format!("if response.{} != nil {{", response.field_name));
            body.extend(indent(
                vec![format!(
                    "{api_package}.WriteJSON(w, {}, response.{})",
                    response.code, response.field_name
                )],
                1,
            ));
            body.extend(indent(vec!["return".to_string()], 1));
            body.push("}".to_string());
        }
        body.push(format!(
            "{api_package}.WriteJSON(w, 500, {api_package}.InternalServerErrorBody{{ErrorMessage: \"Handler implementation did not set a response\"}})"
        ));

        lines.extend(indent(body, 1));
        lines.push("}".to_string());
        lines.push(String::new());
    }
    if !lines.is_empty() {
        lines.pop();
    }

    Ok((lines, imports))
}

/// Lines assigning one query parameter inside its presence guard.
///
/// String-like types copy or construct from the raw value; numeric types
/// parse with the bit width encoded in their primitive base and leave the
/// field unset when parsing fails. Numeric coercion adds `strconv` to the
/// import set.
fn query_coercion(api: &Api, q: &Parameter, imports: &mut BTreeSet<String>) -> Result<Vec<String>> {
    let mut if_body: Vec<String> = Vec::new();
    if q.go_type == "string" {
        if_body.push(format!("v := query.Get(\"{}\")", q.api_name));
        if_body.push(format!("req.{} = &v", q.go_field_name));
        return Ok(if_body);
    }
    let Some(primitive_type) = api.primitive_type_for(&q.go_type) else {
        bail!(
            "query parameter `{}` has type `{}` with no declared primitive base",
            q.api_name,
            q.go_type
        );
    };
    if primitive_type == "string" {
        if_body.push(format!("v := {}(query.Get(\"{}\"))", q.go_type, q.api_name));
        if_body.push(format!("req.{} = &v", q.go_field_name));
    } else if primitive_type.starts_with("int") || primitive_type.starts_with("float") {
        imports.insert("strconv".to_string());
        let (parse_func, parse_params, no_conversion_type) = if primitive_type.starts_with("int") {
            (
                "ParseInt",
                format!("10, {}", &primitive_type["int".len()..]),
                "int64",
            )
        } else {
            (
                "ParseFloat",
                primitive_type["float".len()..].to_string(),
                "float64",
            )
        };
        if_body.push(format!(
            "i, err := strconv.{parse_func}(query.Get(\"{}\"), {parse_params})",
            q.api_name
        ));
        if_body.push("if err == nil {".to_string());
        if q.go_type == no_conversion_type {
            if_body.push(format!("req.{} = &i", q.go_field_name));
        } else {
            if_body.extend(indent(
                vec![
                    format!("v := {}(i)", q.go_type),
                    format!("req.{} = &v", q.go_field_name),
                ],
                1,
            ));
        }
        if_body.push("}".to_string());
    } else {
        bail!(
            "query parameter `{}` has unsupported primitive base `{primitive_type}`",
            q.api_name
        );
    }
    Ok(if_body)
}
