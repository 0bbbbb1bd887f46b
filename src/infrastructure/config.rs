//! Server configuration read from the environment (and `.env`)

use crate::domain::services::DEFAULT_BFS_DEPTH;
use crate::domain::value_objects::{
    default_piles, is_valid_start, Piles, MAX_PILES, MAX_PILE_STONES,
};

/// Runtime options
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP port
    pub port: u16,
    /// AI-move budget of the breadth-first engine
    pub bfs_max_depth: usize,
    /// Fixed seed for reproducible games; entropy when unset
    pub rng_seed: Option<u64>,
    /// Piles every game starts from
    pub initial_piles: Piles,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            bfs_max_depth: DEFAULT_BFS_DEPTH,
            rng_seed: None,
            initial_piles: default_piles(),
        }
    }
}

impl AppConfig {
    /// Read `PORT`, `NIM_BFS_MAX_DEPTH`, `NIM_RNG_SEED` and `NIM_INITIAL_PILES`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let bfs_max_depth = std::env::var("NIM_BFS_MAX_DEPTH")
            .ok()
            .and_then(|d| d.parse().ok())
            .unwrap_or(defaults.bfs_max_depth);

        let rng_seed = std::env::var("NIM_RNG_SEED")
            .ok()
            .and_then(|s| s.parse().ok());

        let initial_piles = match std::env::var("NIM_INITIAL_PILES") {
            Ok(raw) => parse_piles(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    max_piles = MAX_PILES,
                    max_stones = MAX_PILE_STONES,
                    "Ignoring invalid NIM_INITIAL_PILES '{}', using defaults",
                    raw
                );
                defaults.initial_piles.clone()
            }),
            Err(_) => defaults.initial_piles,
        };

        Self {
            port,
            bfs_max_depth,
            rng_seed,
            initial_piles,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Parse a comma-separated pile list such as `3,5,2`.
///
/// Rejects non-numbers, boards without a single stone and boards beyond
/// `MAX_PILES` piles or `MAX_PILE_STONES` stones per pile.
pub fn parse_piles(raw: &str) -> Option<Piles> {
    let piles = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>().ok())
        .collect::<Option<Piles>>()?;

    is_valid_start(&piles).then_some(piles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_piles() {
        assert_eq!(parse_piles("3,5,2").unwrap().as_slice(), &[3, 5, 2]);
        assert_eq!(parse_piles(" 1, 4 ").unwrap().as_slice(), &[1, 4]);
        assert_eq!(parse_piles(""), None);
        assert_eq!(parse_piles("3,x"), None);
        assert_eq!(parse_piles("-1,2"), None);
        assert_eq!(parse_piles("0,0"), None);
    }

    #[test]
    fn test_parse_piles_limits() {
        assert_eq!(parse_piles("4294967295,1"), None);
        assert_eq!(parse_piles("1000,1000,1000"), None);
        assert_eq!(parse_piles("11,1"), None);
        assert_eq!(parse_piles("1,1,1,1,1,1"), None);
        assert_eq!(
            parse_piles("10,10,10,10,10").unwrap().as_slice(),
            &[10, 10, 10, 10, 10]
        );
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bfs_max_depth, 4);
        assert_eq!(config.initial_piles.as_slice(), &[3, 5, 2]);
        assert_eq!(config.with_seed(9).rng_seed, Some(9));
    }
}
