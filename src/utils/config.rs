use super::{BorderPolicy, GridError};
use crate::Grid;
use anyhow::{Context, Result};

/// Parameters of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub border: BorderPolicy,
    /// Seed of the grid's generator (if `None`, then it is taken from entropy)
    pub seed: Option<u64>,
    /// Probability of a cell being alive after the initial randomization
    pub fill_rate: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            border: BorderPolicy::Wrap,
            seed: None,
            fill_rate: 0.5,
        }
    }
}

impl GridConfig {
    pub const ENV_WIDTH: &'static str = "LIFE_WIDTH";
    pub const ENV_HEIGHT: &'static str = "LIFE_HEIGHT";
    pub const ENV_BORDER: &'static str = "LIFE_BORDER";
    pub const ENV_SEED: &'static str = "LIFE_SEED";

    /// Defaults overridden by the `LIFE_*` environment variables that are set.
    ///
    /// Meant for the `bench_soup` binary; library users should fill the
    /// struct directly. Only the dimensions describe the grid itself, while
    /// `LIFE_BORDER` and `LIFE_SEED` only steer the benchmark run.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GridConfig::from_env`], but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup(Self::ENV_WIDTH) {
            config.width = v
                .trim()
                .parse()
                .with_context(|| format!("{}={:?}", Self::ENV_WIDTH, v))?;
        }
        if let Some(v) = lookup(Self::ENV_HEIGHT) {
            config.height = v
                .trim()
                .parse()
                .with_context(|| format!("{}={:?}", Self::ENV_HEIGHT, v))?;
        }
        if let Some(v) = lookup(Self::ENV_BORDER) {
            config.border = v.trim().parse()?;
        }
        if let Some(v) = lookup(Self::ENV_SEED) {
            config.seed = Some(
                v.trim()
                    .parse()
                    .with_context(|| format!("{}={:?}", Self::ENV_SEED, v))?,
            );
        }
        Ok(config)
    }

    /// Creates the grid and fills it with random cells.
    pub fn build(&self) -> Result<Grid, GridError> {
        let mut grid = match self.seed {
            Some(seed) => Grid::with_seed(self.width, self.height, seed)?,
            None => Grid::new(self.width, self.height)?,
        };
        grid.randomize_with_rate(self.fill_rate)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GridConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn overrides() {
        let config = GridConfig::from_lookup(lookup(&[
            ("LIFE_WIDTH", "64"),
            ("LIFE_HEIGHT", " 32 "),
            ("LIFE_BORDER", "nowrap"),
            ("LIFE_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.border, BorderPolicy::NoWrap);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(GridConfig::from_lookup(lookup(&[("LIFE_WIDTH", "-3")])).is_err());
        assert!(GridConfig::from_lookup(lookup(&[("LIFE_SEED", "abc")])).is_err());
        let err = GridConfig::from_lookup(lookup(&[("LIFE_BORDER", "torus")])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::UnknownBorderPolicy("torus".to_owned()))
        );
    }

    #[test]
    fn build_is_reproducible_with_seed() {
        let config = GridConfig {
            width: 40,
            height: 30,
            seed: Some(7),
            ..GridConfig::default()
        };
        let (a, b) = (config.build().unwrap(), config.build().unwrap());
        assert_eq!(a.size(), (40, 30));
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn build_validates() {
        let zero = GridConfig {
            width: 0,
            ..GridConfig::default()
        };
        assert_eq!(
            zero.build().unwrap_err(),
            GridError::InvalidDimension {
                width: 0,
                height: 256
            }
        );
        let dense = GridConfig {
            fill_rate: 1.5,
            ..GridConfig::default()
        };
        assert_eq!(dense.build().unwrap_err(), GridError::InvalidFillRate(1.5));
    }
}
