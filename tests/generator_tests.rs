//! End-to-end rendering scenario: one API, all five renderers, checked
//! against the behavior a hosting runtime would observe.

use go_server_gen::generator::{
    data_type, example_implementation, implementation_interface, route_pattern, routes, routing,
};
use go_server_gen::model::{
    Api, AuthOption, DataType, Field, Operation, Parameter, Response, SchemeScopes,
};
use http::Method;
use regex::Regex;
use std::collections::BTreeMap;

/// `GET /widgets/{id}` with a required string path parameter, an optional
/// 32-bit integer query parameter, and declared 200/404 responses.
fn widget_api() -> Api {
    let operation = Operation {
        interface_name: "GetWidget".to_string(),
        request_type_name: "GetWidgetRequest".to_string(),
        response_type_name: "GetWidgetResponse".to_string(),
        verb: Method::GET,
        path: "/widgets/{id}".to_string(),
        path_parameters: vec![Parameter {
            api_name: "id".to_string(),
            go_field_name: "Id".to_string(),
            go_type: "string".to_string(),
            description: None,
        }],
        query_parameters: vec![Parameter {
            api_name: "limit".to_string(),
            go_field_name: "Limit".to_string(),
            go_type: "Limit".to_string(),
            description: None,
        }],
        json_request_body_type: None,
        responses: vec![
            Response {
                code: 200,
                description: None,
                json_body_type: Some("WidgetBody".to_string()),
                field_name: "Response200".to_string(),
            },
            Response {
                code: 404,
                description: None,
                json_body_type: None,
                field_name: "Response404".to_string(),
            },
        ],
        security: vec![AuthOption {
            schemes: vec![SchemeScopes {
                scheme: "Auth".to_string(),
                scopes: vec!["widgets.read".to_string()],
            }],
        }],
        summary: Some("Get a widget".to_string()),
        description: None,
    };
    let mut base_types = BTreeMap::new();
    base_types.insert("Limit".to_string(), "int32".to_string());
    Api::new("widgets", None, vec![operation], base_types).expect("model is valid")
}

#[test]
fn response_record_orders_fields_200_404_500() {
    let lines = implementation_interface(&widget_api(), "api", true);
    let r200 = lines
        .iter()
        .position(|l| l == "  Response200 *WidgetBody")
        .expect("200 field");
    let r404 = lines
        .iter()
        .position(|l| l == "  Response404 *api.EmptyResponseBody")
        .expect("404 field");
    let r500 = lines
        .iter()
        .position(|l| l == "  Response500 *api.InternalServerErrorBody")
        .expect("500 field");
    assert!(r200 < r404 && r404 < r500);
}

#[test]
fn compiled_pattern_captures_path_parameter() {
    let api = widget_api();
    let pattern = route_pattern(api.path_prefix.as_deref(), &api.operations[0].path);
    let compiled = Regex::new(&pattern).expect("pattern compiles");

    // Same number of named captures as path parameters, in declared order.
    let names: Vec<&str> = compiled.capture_names().flatten().collect();
    assert_eq!(names, vec!["id"]);

    // A request path with a non-numeric id still matches; the capture is
    // copied verbatim into the request field.
    let captures = compiled.captures("/widgets/abc").expect("path matches");
    assert_eq!(&captures["id"], "abc");
}

#[test]
fn unparseable_limit_stays_unset_in_emitted_handler() {
    let (lines, imports) = routes(&widget_api(), "api", true).expect("render handlers");

    // The assignment happens only inside both guards: key present, parse ok.
    let guard = lines
        .iter()
        .position(|l| l == "  if query.Get(\"limit\") != \"\" {")
        .expect("presence guard");
    assert_eq!(
        &lines[guard + 1..guard + 6],
        &[
            "    i, err := strconv.ParseInt(query.Get(\"limit\"), 10, 32)",
            "    if err == nil {",
            "      v := Limit(i)",
            "      req.Limit = &v",
            "    }",
        ]
    );
    // No other assignment to the field exists, so a failed parse leaves it
    // unset rather than zero-valued, and no error is surfaced.
    assert_eq!(
        lines.iter().filter(|l| l.contains("req.Limit")).count(),
        1
    );
    assert!(imports.contains("strconv"));
}

#[test]
fn dispatch_stops_at_first_set_response() {
    let (lines, _) = routes(&widget_api(), "api", true).expect("render handlers");
    let d404 = lines
        .iter()
        .position(|l| l == "  if response.Response404 != nil {")
        .expect("404 dispatch");
    assert_eq!(lines[d404 + 1], "    api.WriteJSON(w, 404, response.Response404)");
    assert_eq!(lines[d404 + 2], "    return");

    // The synthesized 500 is checked after the 404, and the terminal
    // fallback comes after every declared check.
    let d500 = lines
        .iter()
        .position(|l| l == "  if response.Response500 != nil {")
        .expect("500 dispatch");
    let fallback = lines
        .iter()
        .position(|l| {
            l == "  api.WriteJSON(w, 500, api.InternalServerErrorBody{ErrorMessage: \"Handler implementation did not set a response\"})"
        })
        .expect("terminal fallback");
    assert!(d404 < d500 && d500 < fallback);
}

#[test]
fn route_table_binds_one_entry_per_operation() {
    let api = widget_api();
    let lines = routing(&api, "api");
    assert_eq!(
        lines[0],
        "router := APIRouter{Implementation: impl, Authorizer: auth, Routes: make([]*api.Route, 1)}"
    );
    assert!(lines
        .iter()
        .any(|l| l == "pattern := regexp.MustCompile(\"^/widgets/(?P<id>[^/]*)$\")"));
    assert!(lines.iter().any(|l| {
        l == "router.Routes[0] = &api.Route{Method: http.MethodGet, Pattern: pattern, Handler: router.GetWidget}"
    }));
}

#[test]
fn example_scaffold_returns_first_declared_response() {
    let lines = example_implementation(&widget_api(), "ExampleImplementation");
    assert!(lines
        .iter()
        .any(|l| l == "  response.Response200 = &widgets.WidgetBody{}"));
    assert!(lines.iter().any(|l| l == "  return response"));
}

#[test]
fn declarations_render_for_every_type_kind() {
    let types = vec![
        DataType::primitive_alias("WidgetId", None, "string").expect("alias"),
        DataType::record(
            "WidgetBody",
            Some("One widget.".to_string()),
            vec![Field {
                api_name: "id".to_string(),
                go_name: "Id".to_string(),
                go_type: "WidgetId".to_string(),
                description: None,
                required: true,
            }],
        )
        .expect("record"),
        DataType::enumerated_string("WidgetState", None, vec!["ON".to_string()]).expect("enum"),
    ];
    let rendered: Vec<String> = types.iter().flat_map(data_type).collect();
    assert!(rendered.contains(&"type WidgetId string".to_string()));
    assert!(rendered.contains(&"  Id WidgetId `json:\"id\"`".to_string()));
    assert!(rendered.contains(&"  WidgetState_ON WidgetState = \"ON\"".to_string()));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let api = widget_api();
    let first = (
        implementation_interface(&api, "api", true),
        routes(&api, "api", true).expect("render"),
        routing(&api, "api"),
    );
    let second = (
        implementation_interface(&api, "api", true),
        routes(&api, "api", true).expect("render"),
        routing(&api, "api"),
    );
    assert_eq!(first, second);
}
