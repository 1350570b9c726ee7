#[macro_use]
extern crate tracing;

mod app_config;
mod args;
mod classification;

use app_config::AppConfig;
pub use app_config::get_config_dir;
pub use args::{
    version,
    Args,
};
pub use classification::{
    ClassificationConfig,
    APP_KEYWORDS,
    LIBRARY_KEYWORDS,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::path::{
    Path,
    PathBuf,
};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten, skip_serializing)]
    pub app_config: AppConfig,
    pub api_url: Url,
    pub dataset_dir: PathBuf,
    pub report_path: PathBuf,
    pub top_rank: u32,
    #[serde(default)]
    pub classification: ClassificationConfig,
}

const DEFAULT_CONFIG: &str = include_str!("default-config.yaml");

impl Default for Config {
    fn default() -> Self {
        serde_yml::from_str(DEFAULT_CONFIG).expect("Failed to parse default config")
    }
}

impl Config {
    pub fn new(args: Args) -> Result<Self, config::ConfigError> {
        Self::load(args, &get_config_dir())
    }

    /// Layers the embedded defaults, `{config_dir}/config.yaml` and the
    /// command-line arguments, in that order.
    #[instrument(level = "debug", skip(args))]
    pub fn load(args: Args, config_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Yaml));

        let config_files = [("config.yaml", config::FileFormat::Yaml)];

        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
        }

        builder = builder.add_source(args);

        let cfg: Self = builder.build()?.try_deserialize()?;
        debug!(api_url = %cfg.api_url, dataset_dir = ?cfg.dataset_dir, report_path = ?cfg.report_path, "Configuration loaded");

        Ok(cfg)
    }

    pub fn config_dir(&self) -> &Path {
        &self.app_config.config_dir
    }
}
