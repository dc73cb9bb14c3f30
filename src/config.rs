use crate::cli::Args;
use crate::errors::AppError;
use crate::filter::ExtensionFilter;
use crate::render::OutputFormat;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_EXTENSION: &str = ".png";
pub const DEFAULT_DIRECTORY: &str = ".";

/// Values read from a configuration file; every key is optional
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileConfig {
    pub extension: Option<Vec<String>>,
    pub directory: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, AppError> {
        let value: toml::Value =
            toml::from_str(content).map_err(|e| AppError::config(path, e.to_string()))?;
        let Some(table) = value.as_table() else {
            return Err(AppError::config(path, "expected a table at top level"));
        };

        let mut config = FileConfig::default();

        if let Some(ext) = table.get("extension") {
            let list = match ext {
                toml::Value::String(s) => vec![s.clone()],
                toml::Value::Array(items) => items
                    .iter()
                    .map(|item| {
                        item.as_str().map(str::to_string).ok_or_else(|| {
                            AppError::config(path, "'extension' entries must be strings")
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                _ => {
                    return Err(AppError::config(
                        path,
                        "'extension' must be a string or an array of strings",
                    ))
                }
            };
            ExtensionFilter::new(&list).map_err(|e| match e {
                AppError::InvalidArgument(msg) => AppError::config(path, msg),
                other => other,
            })?;
            config.extension = Some(list);
        }

        if let Some(dir) = table.get("directory") {
            let dir = dir
                .as_str()
                .ok_or_else(|| AppError::config(path, "'directory' must be a string"))?;
            config.directory = Some(PathBuf::from(dir));
        }

        if let Some(format) = table.get("format") {
            let name = format
                .as_str()
                .ok_or_else(|| AppError::config(path, "'format' must be a string"))?;
            let format = OutputFormat::from_name(name).ok_or_else(|| {
                AppError::config(path, format!("unknown format '{}' (expected list or lines)", name))
            })?;
            config.format = Some(format);
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(path, e.to_string()))?;
        Self::from_toml_str(&content, path)
    }
}

/// `<config dir>/extls/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("extls").join("config.toml"))
}

/// Load the configuration file selected by `args`, if any.
///
/// An explicit `--config` must exist. The default location is optional.
pub fn load_config(args: &Args) -> Result<Option<FileConfig>, AppError> {
    if args.no_config {
        return Ok(None);
    }

    if let Some(path) = &args.config {
        debug!(path = %path.display(), "loading explicit config");
        return FileConfig::load(path).map(Some);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "loading user config");
            FileConfig::load(&path).map(Some)
        }
        _ => Ok(None),
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub directory: PathBuf,
    pub filter: ExtensionFilter,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge command line, config file and built-in defaults, in that order
    pub fn resolve(args: &Args, file: Option<FileConfig>) -> Result<Self, AppError> {
        let file = file.unwrap_or_default();

        let filter = match (&args.ext, file.extension) {
            (Some(ext), _) => ExtensionFilter::parse(ext)?,
            (None, Some(list)) => ExtensionFilter::new(list)?,
            (None, None) => ExtensionFilter::parse(DEFAULT_EXTENSION)?,
        };

        let directory = args
            .target_dir()
            .cloned()
            .or(file.directory)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY));

        let format = args.format.or(file.format).unwrap_or_default();

        Ok(Settings {
            directory,
            filter,
            format,
        })
    }
}
