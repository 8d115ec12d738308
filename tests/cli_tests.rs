use clap::Parser;
use maskrouter::cli::{execute, Cli};
use maskrouter::RouterConfig;
use std::path::Path;

mod common;
use common::manifests::SHOP_YAML;
use common::temp_files;

fn run(manifest: &Path, args: &[&str], config: RouterConfig) -> (bool, String) {
    let manifest = manifest.to_str().unwrap();
    let argv = ["maskrouter", "--manifest", manifest]
        .into_iter()
        .chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("parse cli");
    let mut out = Vec::new();
    let ok = execute(&cli, &config, &mut out).expect("execute");
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn test_cli_routes_lists_everything() {
    let file = temp_files::create_temp_yaml(SHOP_YAML);
    let (ok, out) = run(file.path(), &["routes"], RouterConfig::default());

    assert!(ok);
    assert_eq!(out.lines().count(), 9);
    assert!(out.lines().next().unwrap().starts_with("GET"));
    assert!(out.contains("/shop/[:s]/items/[:i]"));
}

#[test]
fn test_cli_resolve() {
    let file = temp_files::create_temp_yaml(SHOP_YAML);
    let (ok, out) = run(
        file.path(),
        &["resolve", "GET", "/shop/books/items/3?x=1"],
        RouterConfig::default(),
    );

    assert!(ok);
    assert!(out.contains("handler: category_item"));
    assert!(out.contains(r#"params:  ["books", "3"]"#));
}

#[test]
fn test_cli_resolve_no_match() {
    let file = temp_files::create_temp_yaml(SHOP_YAML);
    let (ok, out) = run(file.path(), &["resolve", "GET", "/nope"], RouterConfig::default());

    assert!(!ok);
    assert!(out.contains("no match for GET /nope"));
}

#[test]
fn test_cli_generate_permissive_and_strict() {
    let file = temp_files::create_temp_yaml(SHOP_YAML);

    let (ok, out) = run(file.path(), &["generate", "item", "abc"], RouterConfig::default());
    assert!(ok);
    assert_eq!(out.trim(), "/items/abc");

    let cli = Cli::try_parse_from([
        "maskrouter",
        "--manifest",
        file.path().to_str().unwrap(),
        "generate",
        "item",
        "abc",
        "--strict",
    ])
    .unwrap();
    let err = execute(&cli, &RouterConfig::default(), &mut Vec::<u8>::new()).unwrap_err();
    assert!(format!("{err:#}").contains("does not match placeholder [:i]"));

    let strict_env = RouterConfig {
        strict_generation: true,
        ..RouterConfig::default()
    };
    let (ok, out) = run(file.path(), &["generate", "item", "12"], strict_env);
    assert!(ok);
    assert_eq!(out.trim(), "/items/12");
}

#[test]
fn test_cli_generate_unknown_name() {
    let file = temp_files::create_temp_yaml(SHOP_YAML);
    let (ok, out) = run(file.path(), &["generate", "missing"], RouterConfig::default());

    assert!(!ok);
    assert!(out.contains("no route named \"missing\""));
}

#[test]
fn test_cli_check() {
    let good = temp_files::create_temp_yaml(SHOP_YAML);
    let (ok, out) = run(good.path(), &["check"], RouterConfig::default());
    assert!(ok);
    assert!(out.contains("9 routes, 0 invalid templates"));

    let bad = temp_files::create_temp_yaml(
        r#"
routes:
  - { name: a, methods: GET|POST, path: "/a/[:hex]", handler: a }
"#,
    );
    let eager = RouterConfig {
        precompile: true,
        ..RouterConfig::default()
    };
    let (ok, out) = run(bad.path(), &["check"], eager);
    assert!(!ok);
    assert!(out.contains("error: unknown placeholder kind `hex`"));
    assert!(out.contains("2 routes, 2 invalid templates"));
}
