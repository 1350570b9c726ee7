use serde::{
    Deserialize,
    Serialize,
};

/// Terms that mark a project as something other code builds on.
pub const LIBRARY_KEYWORDS: &[&str] = &[
    "library",
    "sdk",
    "framework",
    "toolkit",
    "plugin",
    "module",
    "api",
    "standard",
    "spec",
    "protocol",
    "connector",
    "driver",
];

/// Terms that mark a project as something people run directly.
pub const APP_KEYWORDS: &[&str] = &[
    "platform",
    "application",
    "server",
    "client",
    "dashboard",
    "system",
    "database",
    "service",
    "desktop",
    "mobile",
    "app",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default = "default_library_keywords")]
    pub library_keywords: Vec<String>,
    #[serde(default = "default_app_keywords")]
    pub app_keywords: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            library_keywords: default_library_keywords(),
            app_keywords: default_app_keywords(),
        }
    }
}

fn default_library_keywords() -> Vec<String> {
    LIBRARY_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_app_keywords() -> Vec<String> {
    APP_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
