use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use serde_yaml;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "verkstad")]
#[command(about = "Runs the verkstad service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,

    /// Overrides the configured port. The service probes upward from here
    /// when the port is already taken.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".verkstad")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

fn default_port() -> u16 {
    8000
}

fn default_public_dir() -> String {
    "public".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_public_dir")]
    public_dir: String,
}

impl Default for App {
    fn default() -> Self {
        App {
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

impl App {
    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn get_public_dir(&self) -> PathBuf {
        PathBuf::from(&self.public_dir)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: App,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let cfg = Config::load_config(path)?;
        Ok(cfg)
    }

    /// Loads the config file when it exists; the service runs fine on
    /// defaults without one.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Config::new(path.to_str().unwrap_or_default())
        } else {
            tracing::info!(path = ?path, "no config file found, using defaults");
            Ok(Config::default())
        }
    }

    fn load_config(path: &str) -> Result<Config> {
        let yaml_str = fs::read_to_string(path)?;
        let yaml_with_env = Config::substitute_env_vars(&yaml_str);
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    // Expands ${VAR} and ${VAR:-default} references before the yaml parse.
    fn substitute_env_vars(yaml_str: &str) -> String {
        let mut out = String::with_capacity(yaml_str.len());
        let mut rest = yaml_str;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            match rest[start..].find('}') {
                Some(end) => {
                    let token = &rest[start + 2..start + end];
                    let value = match token.split_once(":-") {
                        Some((var, default)) => {
                            env::var(var).unwrap_or_else(|_| default.to_string())
                        }
                        None => env::var(token).unwrap_or_else(|_| {
                            tracing::warn!(variable = token, "environment variable not set");
                            String::new()
                        }),
                    };
                    out.push_str(&value);
                    rest = &rest[start + end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
