//! Runtime configuration: defaults, then the JSON config file, then environment, then CLI flags.
//! The file lives at $XDG_CONFIG_HOME/sysdash/config.json (fallback ~/.config/sysdash/config.json).

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_REFRESH_MS: u64 = 1000;
pub const DEFAULT_SAMPLE_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("unexpected argument: {0}")]
    UnknownArgument(String),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What may appear in config.json. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub refresh_ms: Option<u64>,
    pub sample_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub help: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Redraw cadence.
    pub refresh_ms: u64,
    /// Sampler period.
    pub sample_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_ms: DEFAULT_REFRESH_MS,
            sample_ms: DEFAULT_SAMPLE_MS,
            log_file: None,
        }
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("sysdash")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sysdash")
    }
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// A missing file is the same as an empty one.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str(&s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--refresh MS|-r MS] [--sample MS|-s MS] [--log FILE]\n\
         \n\
         Keys: q / Ctrl-C quit, s pause/resume\n\
         Env:  SYSDASH_REFRESH_MS, SYSDASH_SAMPLE_MS, SYSDASH_LOG, RUST_LOG\n\
         File: {}",
        config_path().display()
    )
}

fn parse_ms(flag: &str, value: Option<String>) -> Result<u64, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            flag: flag.to_string(),
            value,
        })
}

/// Parse argv (program name first).
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, ConfigError> {
    let mut it = args.into_iter();
    let _ = it.next(); // program name
    let mut out = CliArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => out.help = true,
            "--refresh" | "-r" => out.refresh_ms = Some(parse_ms("--refresh", it.next())?),
            "--sample" | "-s" => out.sample_ms = Some(parse_ms("--sample", it.next())?),
            "--log" => {
                let v = it
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue("--log".into()))?;
                out.log_file = Some(PathBuf::from(v));
            }
            _ if arg.starts_with("--refresh=") => {
                let v = arg.split_once('=').map(|(_, v)| v.to_string());
                out.refresh_ms = Some(parse_ms("--refresh", v)?);
            }
            _ if arg.starts_with("--sample=") => {
                let v = arg.split_once('=').map(|(_, v)| v.to_string());
                out.sample_ms = Some(parse_ms("--sample", v)?);
            }
            _ if arg.starts_with("--log=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        out.log_file = Some(PathBuf::from(v));
                    }
                }
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }
    Ok(out)
}

impl Config {
    /// Layer the sources. `env` looks up an environment variable by name.
    pub fn resolve<F>(file: FileConfig, env: F, cli: CliArgs) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(v) = file.refresh_ms {
            cfg.refresh_ms = v;
        }
        if let Some(v) = file.sample_ms {
            cfg.sample_ms = v;
        }
        if file.log_file.is_some() {
            cfg.log_file = file.log_file;
        }

        if let Some(v) = env("SYSDASH_REFRESH_MS").filter(|v| !v.is_empty()) {
            cfg.refresh_ms = parse_ms("SYSDASH_REFRESH_MS", Some(v))?;
        }
        if let Some(v) = env("SYSDASH_SAMPLE_MS").filter(|v| !v.is_empty()) {
            cfg.sample_ms = parse_ms("SYSDASH_SAMPLE_MS", Some(v))?;
        }
        if let Some(v) = env("SYSDASH_LOG").filter(|v| !v.is_empty()) {
            cfg.log_file = Some(PathBuf::from(v));
        }

        if let Some(v) = cli.refresh_ms {
            cfg.refresh_ms = v;
        }
        if let Some(v) = cli.sample_ms {
            cfg.sample_ms = v;
        }
        if cli.log_file.is_some() {
            cfg.log_file = cli.log_file;
        }

        if cfg.refresh_ms == 0 {
            return Err(ConfigError::ZeroInterval("refresh interval"));
        }
        if cfg.sample_ms == 0 {
            return Err(ConfigError::ZeroInterval("sample interval"));
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        std::iter::once("sysdash")
            .chain(v.iter().copied())
            .map(String::from)
            .collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn refresh_long_short_and_assign() {
        assert_eq!(parse_args(args(&["--refresh", "250"])).unwrap().refresh_ms, Some(250));
        assert_eq!(parse_args(args(&["-r", "300"])).unwrap().refresh_ms, Some(300));
        assert_eq!(parse_args(args(&["--refresh=400"])).unwrap().refresh_ms, Some(400));
        assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(matches!(
            parse_args(args(&["--refresh", "fast"])),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_args(args(&["-r"])),
            Err(ConfigError::MissingValue(_))
        ));
        assert!(matches!(
            parse_args(args(&["--frobnicate"])),
            Err(ConfigError::UnknownArgument(_))
        ));
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = FileConfig {
            refresh_ms: Some(100),
            sample_ms: Some(100),
            log_file: Some(PathBuf::from("/tmp/file.log")),
        };
        let env = |k: &str| match k {
            "SYSDASH_REFRESH_MS" => Some("200".to_string()),
            "SYSDASH_LOG" => Some("/tmp/env.log".to_string()),
            _ => None,
        };
        let cli = CliArgs {
            refresh_ms: Some(300),
            ..CliArgs::default()
        };
        let cfg = Config::resolve(file, env, cli).unwrap();
        assert_eq!(cfg.refresh_ms, 300);
        assert_eq!(cfg.sample_ms, 100);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/env.log")));
    }

    #[test]
    fn zero_interval_rejected() {
        let cli = CliArgs {
            refresh_ms: Some(0),
            ..CliArgs::default()
        };
        assert!(matches!(
            Config::resolve(FileConfig::default(), no_env, cli),
            Err(ConfigError::ZeroInterval(_))
        ));
    }

    #[test]
    fn defaults_without_any_source() {
        let cfg = Config::resolve(FileConfig::default(), no_env, CliArgs::default()).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
