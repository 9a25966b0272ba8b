// File: config.rs
// Description: run configuration of the `auc` workflow.
// Defaults < TOML config file < command line flags.

use toml::map::Map;

use crate::utils::error::{BenchError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.0;
// Zero lets the pool use every available core
pub const DEFAULT_NUM_THREADS: usize = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub threshold: f64,
    pub threads: usize,
    pub cath_dir: Option<String>,
    pub verbose: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            threads: DEFAULT_NUM_THREADS,
            cath_dir: None,
            verbose: false,
        }
    }
}

fn type_error(key: &str, expected: &str) -> BenchError {
    BenchError::Config(format!("`{}` must be {}", key, expected))
}

impl BenchmarkConfig {
    /// Read a config table. Missing keys keep their defaults; unknown keys
    /// and wrongly typed values are errors.
    pub fn from_toml(toml: &toml::Value) -> Result<Self> {
        let table = toml
            .as_table()
            .ok_or_else(|| BenchError::Config("config must be a table".to_string()))?;
        let mut config = Self::default();
        for (key, value) in table {
            match key.as_str() {
                "threshold" => {
                    config.threshold = match value {
                        toml::Value::Float(f) => *f,
                        toml::Value::Integer(i) => *i as f64,
                        _ => return Err(type_error(key, "a number")),
                    };
                }
                "threads" => {
                    let threads = value.as_integer().ok_or_else(|| type_error(key, "an integer"))?;
                    if threads < 0 {
                        return Err(type_error(key, "zero or positive"));
                    }
                    config.threads = threads as usize;
                }
                "cath_dir" => {
                    let dir = value.as_str().ok_or_else(|| type_error(key, "a string"))?;
                    config.cath_dir = Some(dir.to_string());
                }
                "verbose" => {
                    config.verbose = value.as_bool().ok_or_else(|| type_error(key, "a boolean"))?;
                }
                _ => return Err(BenchError::Config(format!("unknown key `{}`", key))),
            }
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> toml::Value {
        let mut map = Map::new();
        map.insert("threshold".to_string(), toml::Value::Float(self.threshold));
        map.insert("threads".to_string(), toml::Value::Integer(self.threads as i64));
        if let Some(cath_dir) = &self.cath_dir {
            map.insert("cath_dir".to_string(), toml::Value::String(cath_dir.clone()));
        }
        map.insert("verbose".to_string(), toml::Value::Boolean(self.verbose));
        toml::Value::Table(map)
    }

    /// Apply command line flags on top of this config.
    pub fn with_overrides(
        mut self, threshold: Option<f64>, threads: Option<usize>, cath_dir: Option<String>, verbose: bool,
    ) -> Self {
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }
        if let Some(threads) = threads {
            self.threads = threads;
        }
        if cath_dir.is_some() {
            self.cath_dir = cath_dir;
        }
        self.verbose |= verbose;
        self
    }
}

pub fn read_config_from_file(path: &str) -> Result<BenchmarkConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    let toml: toml::Value = toml::from_str(&content)
        .map_err(|e| BenchError::Config(format!("{}: {}", path, e)))?;
    BenchmarkConfig::from_toml(&toml)
}

/// TOML text of `config`, as accepted by `read_config_from_file`.
pub fn config_to_string(config: &BenchmarkConfig) -> Result<String> {
    toml::to_string(&config.to_toml()).map_err(|e| BenchError::Config(e.to_string()))
}
