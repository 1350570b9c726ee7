use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env,
    path::PathBuf,
};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub(crate) config_dir: PathBuf,
}

pub(crate) const PROJECT_NAME: &str = "LFX_INSIGHTS";

lazy_static::lazy_static! {
    static ref CONFIG_FOLDER: Option<PathBuf> = env::var(config_dir_env_var()).ok().map(PathBuf::from);
}

/// Environment variable that overrides the config directory.
pub(crate) fn config_dir_env_var() -> String {
    format!("{PROJECT_NAME}_CONFIG")
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "lfx", "lfx-insights")
}
