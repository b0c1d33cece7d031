use crate::{
    repository::point::StoreLatency,
    service::point::{DEFAULT_MAX_BALANCE, PointPolicy},
};
use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub is_dev: bool,
    pub point: PointConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let point = PointConfig::parse(
            std::env::var("POINT_MAX_BALANCE").ok().as_deref(),
            std::env::var("POINT_STORE_LATENCY_MS").ok().as_deref(),
        )?;

        Ok(Self {
            port,
            is_dev,
            point,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointConfig {
    pub max_balance: Option<i64>,
    pub store_latency_ms: u64,
}

impl Default for PointConfig {
    fn default() -> Self {
        Self {
            max_balance: Some(DEFAULT_MAX_BALANCE),
            store_latency_ms: 0,
        }
    }
}

impl PointConfig {
    /// `max_balance`: unset keeps the default ceiling, `none` disables it.
    pub fn parse(max_balance: Option<&str>, store_latency_ms: Option<&str>) -> Result<Self> {
        let max_balance = match max_balance.map(str::trim) {
            None | Some("") => Some(DEFAULT_MAX_BALANCE),
            Some(v) if v.eq_ignore_ascii_case("none") => None,
            Some(v) => {
                let max = v
                    .parse::<i64>()
                    .context("POINT_MAX_BALANCE must be a valid i64 integer or 'none'")?;
                if max <= 0 {
                    return Err(anyhow!(
                        "POINT_MAX_BALANCE must be greater than zero, got '{max}'",
                    ));
                }
                Some(max)
            }
        };

        let store_latency_ms = match store_latency_ms.map(str::trim) {
            None | Some("") => 0,
            Some(v) => v
                .parse::<u64>()
                .context("POINT_STORE_LATENCY_MS must be a valid u64 integer")?,
        };

        Ok(Self {
            max_balance,
            store_latency_ms,
        })
    }

    pub fn policy(&self) -> PointPolicy {
        PointPolicy {
            max_balance: self.max_balance,
        }
    }

    pub fn latency(&self) -> StoreLatency {
        StoreLatency::from_millis(self.store_latency_ms)
    }
}
