use maskrouter::manifest::{parse_manifest, ManifestFormat};
use maskrouter::{RequestTarget, RouteMatch, Router, RouterError};

use http::Method;

mod common;
use common::manifests::SHOP_YAML;

fn shop_router() -> Router<String> {
    parse_manifest(SHOP_YAML, ManifestFormat::Yaml)
        .expect("failed to parse manifest")
        .into_router()
        .expect("failed to build router")
}

fn assert_route_match(router: &Router<String>, method: Method, path: &str, expected_handler: &str, expected_params: &[&str]) {
    let result = router.resolve(&method, path).expect("lookup failed");
    match result {
        Some(RouteMatch { handler, params, .. }) => {
            assert_eq!(
                handler, expected_handler,
                "Handler mismatch for {} {}: expected '{}', got '{}'",
                method, path, expected_handler, handler
            );
            assert_eq!(params.as_slice(), expected_params, "Params mismatch for {} {}", method, path);
        }
        None => {
            assert_eq!(
                expected_handler, "<none>",
                "Expected route to match for {} {}",
                method, path
            );
        }
    }
}

#[test]
fn test_router_root_path() {
    let router = shop_router();
    assert_route_match(&router, Method::GET, "/", "root_handler", &[]);
}

#[test]
fn test_router_get_items() {
    let router = shop_router();
    assert_route_match(&router, Method::GET, "/items", "items", &[]);
}

#[test]
fn test_router_post_items() {
    let router = shop_router();
    assert_route_match(&router, Method::POST, "/items", "items", &[]);
}

#[test]
fn test_router_item_by_id() {
    let router = shop_router();
    assert_route_match(&router, Method::GET, "/items/123", "item", &["123"]);
    assert_route_match(&router, Method::PUT, "/items/123", "item", &["123"]);
    assert_route_match(&router, Method::DELETE, "/items/123", "item", &["123"]);
}

#[test]
fn test_router_item_rejects_non_integer() {
    let router = shop_router();
    assert_route_match(&router, Method::GET, "/items/abc", "<none>", &[]);
    assert_route_match(&router, Method::GET, "/items/12/extra", "<none>", &[]);
}

#[test]
fn test_router_category_item() {
    let router = shop_router();
    assert_route_match(&router, Method::GET, "/shop/garden-tools/items/7", "category_item", &["garden-tools", "7"]);
    assert_route_match(&router, Method::GET, "/shop/garden.tools/items/7", "<none>", &[]);
}

#[test]
fn test_router_files_catch_all() {
    let router = shop_router();
    assert_route_match(&router, Method::GET, "/files/a/b/c", "files", &["a/b/c"]);
}

#[test]
fn test_router_method_not_registered() {
    let router = shop_router();
    assert_route_match(&router, Method::PATCH, "/items", "<none>", &[]);
    assert_route_match(&router, Method::POST, "/ping", "<none>", &[]);
}

#[test]
fn test_router_unknown_path() {
    let router = shop_router();
    assert_route_match(&router, Method::GET, "/nope", "<none>", &[]);
    assert_eq!(router.generate("missing", &[]), None);
}

#[test]
fn test_router_request_target() {
    let router = shop_router();
    let target = RequestTarget::from_uri("GET", "http://shop.example/items/5?expand=true").unwrap();
    let matched = router.route(&target).unwrap().unwrap();
    assert_eq!(matched.handler, "item");
    assert_eq!(matched.params(), ["5"]);
}

#[test]
fn test_generate_every_named_route() {
    let router = shop_router();
    let cases: [(&str, &[&str], &str); 6] = [
        ("root", &[], "/"),
        ("ping", &[], "/ping"),
        ("items", &[], "/items"),
        ("item", &["42"], "/items/42"),
        ("category", &["books", "3"], "/shop/books/items/3"),
        ("files", &["docs/readme.md"], "/files/docs/readme.md"),
    ];
    for (name, params, expected) in cases {
        assert_eq!(router.generate(name, params).as_deref(), Some(expected), "route {name}");
    }
}

#[test]
fn test_generate_then_resolve_round_trip() {
    let router = shop_router();
    let path = router.generate_strict("category", &["books", "3"]).unwrap().unwrap();
    assert_route_match(&router, Method::GET, &path, "category_item", &["books", "3"]);
}

#[test]
fn test_registration_errors_propagate() {
    let mut router = shop_router();

    let err = router
        .register("GET", "/another", "x".to_string(), "ping")
        .unwrap_err();
    assert!(matches!(err, RouterError::DuplicateName { .. }));

    let err = router
        .register("GET", "/items/[:i]", "x".to_string(), "item_again")
        .unwrap_err();
    assert!(matches!(err, RouterError::DuplicateRoute { .. }));
    assert_route_match(&router, Method::GET, "/items/9", "item", &["9"]);
}

#[test]
fn test_exact_route_registered_after_masked_still_wins() {
    let mut router = shop_router();
    router
        .register("GET", "/files/index", "files_index".to_string(), "files_index")
        .unwrap();
    assert_route_match(&router, Method::GET, "/files/index", "files_index", &[]);
    assert_route_match(&router, Method::GET, "/files/other", "files", &["other"]);
}
