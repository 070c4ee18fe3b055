use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::cli::Cli;
use crate::error::Result;
use crate::state::StoreKey;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "meal-calendar";

/// Runtime settings resolved from flags, environment and platform defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding stored catalogs.
    pub data_dir: PathBuf,

    /// Which catalog to read and write.
    pub key: StoreKey,

    /// Most verbose log level to emit.
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
        let key = StoreKey::for_user(cli.user.as_deref())?;

        Ok(Self {
            data_dir,
            key,
            log_level: log_level(cli.verbose),
        })
    }
}

/// `<platform data dir>/meal-calendar`, or the current directory when the
/// platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
