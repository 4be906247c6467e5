//! Runtime settings read from the environment.

use std::time::Duration;

use life_core::Seed;
use tracing::warn;

pub const DEFAULT_TICK_MS: u64 = 70;
pub const DEFAULT_SCALE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Delay between generations.
    pub tick_delay: Duration,
    /// Initial window pixels per cell.
    pub scale: u32,
    /// Fixed seed; `None` seeds from the clock.
    pub seed: Option<Seed>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_delay: Duration::from_millis(DEFAULT_TICK_MS),
            scale: DEFAULT_SCALE,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Unparseable values are logged and
    /// replaced by their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = parse_var(&lookup, "LIFE_TICK_MS").unwrap_or(DEFAULT_TICK_MS);

        let scale = match parse_var::<u32>(&lookup, "LIFE_SCALE") {
            Some(0) => {
                warn!("LIFE_SCALE must be at least 1, using {}", DEFAULT_SCALE);
                DEFAULT_SCALE
            }
            Some(scale) => scale,
            None => DEFAULT_SCALE,
        };

        let seed = parse_var::<u64>(&lookup, "LIFE_SEED").map(Seed::new);

        Self {
            tick_delay: Duration::from_millis(tick_ms),
            scale,
            seed,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(config(&[]).tick_delay, Duration::from_millis(70));
        assert_eq!(config(&[]).scale, 8);
        assert_eq!(config(&[]).seed, None);
    }

    #[test]
    fn reads_values() {
        let cfg = config(&[
            ("LIFE_TICK_MS", "16"),
            ("LIFE_SCALE", " 4 "),
            ("LIFE_SEED", "12345"),
        ]);
        assert_eq!(cfg.tick_delay, Duration::from_millis(16));
        assert_eq!(cfg.scale, 4);
        assert_eq!(cfg.seed, Some(Seed::new(12345)));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[
            ("LIFE_TICK_MS", "fast"),
            ("LIFE_SCALE", "0"),
            ("LIFE_SEED", "-1"),
        ]);
        assert_eq!(cfg, AppConfig::default());
    }
}
