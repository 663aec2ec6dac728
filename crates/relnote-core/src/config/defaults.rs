//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relnote.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relnote.yaml";

/// Default repository owner
pub const DEFAULT_OWNER: &str = "electron";

/// Default repository name
pub const DEFAULT_REPO: &str = "electron";

/// Repositories whose backports are tracked out of the box
pub const DEFAULT_FOLLOW_REPOS: [&str; 3] = [
    "electron/electron",
    "electron/libchromiumcontent",
    "electron/node",
];

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".relnote.toml",
        ".relnote.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# relnote configuration

[repository]
owner = "electron"
repo = "electron"

[parser]
follow_repos = [
    "electron/electron",
    "electron/libchromiumcontent",
    "electron/node",
]
"#;
