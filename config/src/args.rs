use std::path::PathBuf;

/// Options shared by every subcommand. Anything given here overrides the
/// configuration files.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Args {
    /// Leaderboard API endpoint.
    #[clap(long, value_name = "URL", env = "LFX_INSIGHTS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory where leaderboard datasets are stored.
    #[clap(long, value_name = "DIR", env = "LFX_INSIGHTS_DATASET_DIR", global = true)]
    pub dataset_dir: Option<PathBuf>,

    /// Path of the generated JSON report.
    #[clap(long, value_name = "FILE", env = "LFX_INSIGHTS_REPORT_PATH", global = true)]
    pub report_path: Option<PathBuf>,

    /// Enables debug logging.
    #[clap(short, long, action, global = true)]
    pub verbose: bool,
}

mod config_ext {
    use super::*;
    use config::{
        Map,
        Source,
        Value,
    };
    use std::collections::HashMap;

    impl Source for Args {
        fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
            Box::new((*self).clone())
        }

        fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
            let mut cache = HashMap::<String, Value>::new();
            if let Some(api_url) = &self.api_url {
                cache.insert("api_url".to_string(), api_url.clone().into());
            }
            if let Some(dataset_dir) = &self.dataset_dir {
                cache.insert(
                    "dataset_dir".to_string(),
                    dataset_dir.to_string_lossy().to_string().into(),
                );
            }
            if let Some(report_path) = &self.report_path {
                cache.insert(
                    "report_path".to_string(),
                    report_path.to_string_lossy().to_string().into(),
                );
            }
            Ok(cache)
        }
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let config_dir_path = crate::get_config_dir().display().to_string();

    format!(
        "\
{version}

Authors: {author}

Config directory: {config_dir_path}",
        version = clap::crate_version!(),
    )
}
