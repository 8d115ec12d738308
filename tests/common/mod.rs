#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Creates a temporary manifest file with the given extension. The file is
    /// removed when the returned handle is dropped.
    pub fn create_temp_manifest(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("maskr_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    /// Creates a temporary manifest file with yaml extension
    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_manifest(content, "yaml")
    }

    /// Creates a temporary manifest file with json extension
    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_manifest(content, "json")
    }

    /// Creates a temporary manifest file with toml extension
    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_manifest(content, "toml")
    }
}

pub mod manifests {
    /// A small shop API covering every placeholder kind.
    pub const SHOP_YAML: &str = r#"
routes:
  - name: root
    methods: GET
    path: /
    handler: root_handler
  - name: ping
    methods: GET
    path: /ping
    handler: ping
  - name: items
    methods: GET|POST
    path: /items
    handler: items
  - name: item
    methods: GET | PUT | DELETE
    path: /items/[:i]
    handler: item
  - name: category
    methods: GET
    path: /shop/[:s]/items/[:i]
    handler: category_item
  - name: files
    methods: GET
    path: /files/[:all]
    handler: files
"#;
}
