//! Conversion configuration.
//!
//! Defaults reproduce the classic invocation: read `reps.json` from the
//! working directory and keep catalog order. Environment variables (optionally
//! from a `.env` file) override the defaults; command-line flags override both.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ConfigError, ConvertResult};

/// Default catalog path, relative to the working directory.
pub const DEFAULT_INPUT: &str = "reps.json";

/// Environment variable overriding the catalog path.
pub const ENV_INPUT: &str = "REPEATERS_INPUT";

/// Environment variable overriding the row order.
pub const ENV_ORDER: &str = "REPEATERS_ORDER";

/// Order of the emitted rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RowOrder {
    /// Catalog document order.
    #[default]
    Insertion,
    /// Sorted by repeater name.
    Name,
}

impl FromStr for RowOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" => Ok(Self::Insertion),
            "name" => Ok(Self::Name),
            _ => Err(ConfigError::InvalidOrder(s.to_string())),
        }
    }
}

/// Constant columns of every row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvProfile {
    pub group_no: u32,
    pub group_name: String,
    pub position: String,
    pub utc_offset: String,
}

impl Default for CsvProfile {
    fn default() -> Self {
        Self {
            group_no: 1,
            group_name: "LZ".to_string(),
            position: "Approximate".to_string(),
            utc_offset: "+3:00".to_string(),
        }
    }
}

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Catalog file
    pub input: PathBuf,

    /// Row order
    pub order: RowOrder,

    /// Constant columns
    pub profile: CsvProfile,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            order: RowOrder::default(),
            profile: CsvProfile::default(),
        }
    }
}

impl ConvertOptions {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> ConvertResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> ConvertResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(input) = lookup(ENV_INPUT).filter(|v| !v.is_empty()) {
            options.input = PathBuf::from(input);
        }
        if let Some(order) = lookup(ENV_ORDER).filter(|v| !v.is_empty()) {
            options.order = order.parse::<RowOrder>()?;
        }

        Ok(options)
    }

    /// Apply command-line values on top of these options.
    pub fn with_overrides(mut self, input: Option<PathBuf>, order: Option<RowOrder>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(order) = order {
            self.order = order;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use std::collections::HashMap;

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.input, PathBuf::from("reps.json"));
        assert_eq!(opts.order, RowOrder::Insertion);
        assert_eq!(opts.profile.group_no, 1);
        assert_eq!(opts.profile.group_name, "LZ");
        assert_eq!(opts.profile.position, "Approximate");
        assert_eq!(opts.profile.utc_offset, "+3:00");
    }

    #[test]
    fn test_row_order_parse() {
        assert_eq!("name".parse::<RowOrder>(), Ok(RowOrder::Name));
        assert_eq!(" Insertion ".parse::<RowOrder>(), Ok(RowOrder::Insertion));
        assert_eq!(
            "alphabetical".parse::<RowOrder>(),
            Err(ConfigError::InvalidOrder("alphabetical".into()))
        );
    }

    #[test]
    fn test_environment_overrides() {
        let env = HashMap::from([
            (ENV_INPUT, "data/lz.json".to_string()),
            (ENV_ORDER, "name".to_string()),
        ]);
        let opts = ConvertOptions::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(opts.input, PathBuf::from("data/lz.json"));
        assert_eq!(opts.order, RowOrder::Name);
    }

    #[test]
    fn test_empty_environment_keeps_defaults() {
        let opts = ConvertOptions::from_lookup(|_| Some(String::new())).unwrap();
        assert_eq!(opts, ConvertOptions::default());
    }

    #[test]
    fn test_invalid_order_in_environment() {
        let err = ConvertOptions::from_lookup(|k| (k == ENV_ORDER).then(|| "random".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Config(ConfigError::InvalidOrder(ref order)) if order == "random"
        ));
        assert!(err.to_string().contains("random"));
    }

    #[test]
    fn test_flags_override_environment() {
        let env = HashMap::from([
            (ENV_INPUT, "data/lz.json".to_string()),
            (ENV_ORDER, "name".to_string()),
        ]);
        let opts = ConvertOptions::from_lookup(|k| env.get(k).cloned())
            .unwrap()
            .with_overrides(Some(PathBuf::from("zs.json")), Some(RowOrder::Insertion));
        assert_eq!(opts.input, PathBuf::from("zs.json"));
        assert_eq!(opts.order, RowOrder::Insertion);
    }

    #[test]
    fn test_absent_flags_keep_environment() {
        let env = HashMap::from([(ENV_ORDER, "name".to_string())]);
        let opts = ConvertOptions::from_lookup(|k| env.get(k).cloned())
            .unwrap()
            .with_overrides(None, None);
        assert_eq!(opts.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(opts.order, RowOrder::Name);
    }
}
