use std::net::SocketAddr;

use chrono_tz::Tz;
use serde::Deserialize;
use wpgauge_core::error::{GaugeError, Result};
use wpgauge_core::GaugeRules;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,

    pub gauges: GaugesSection,

    #[serde(default)]
    pub log: LogSection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GaugeError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.store.validate()?;
        self.gauges.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            GaugeError::Config(format!("server.listen must be a socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Hold a lock across each load/mutate/save sequence.
    #[serde(default = "default_true")]
    pub serialize_writes: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            serialize_writes: true,
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(GaugeError::Config("store.path must not be empty".into()));
        }
        Ok(())
    }
}

fn default_store_path() -> String {
    "data/gauges.json".into()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaugesSection {
    /// IANA zone name, e.g. "Europe/Berlin".
    pub timezone: String,
    pub max_value: i64,
    #[serde(default = "default_step")]
    pub increase_step: i64,
    #[serde(default = "default_step")]
    pub decrease_step: i64,

    /// Abort the daily cycle when the store fails to load instead of
    /// writing back an empty collection.
    #[serde(default)]
    pub strict_daily_cycle: bool,
}

impl GaugesSection {
    pub fn validate(&self) -> Result<()> {
        self.timezone()?;
        if self.max_value < 0 {
            return Err(GaugeError::Config("gauges.max_value must be >= 0".into()));
        }
        if self.increase_step < 0 || self.decrease_step < 0 {
            return Err(GaugeError::Config(
                "gauges.increase_step and gauges.decrease_step must be >= 0".into(),
            ));
        }
        Ok(())
    }

    pub fn timezone(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            GaugeError::Config(format!("gauges.timezone {:?}: {e}", self.timezone))
        })
    }

    /// Compile into the immutable rules handed to the service.
    pub fn rules(&self) -> Result<GaugeRules> {
        Ok(GaugeRules {
            timezone: self.timezone()?,
            max_value: self.max_value,
            increase_step: self.increase_step,
            decrease_step: self.decrease_step,
        })
    }
}

fn default_step() -> i64 {
    1
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Append log lines to this file instead of stdout.
    #[serde(default)]
    pub file: Option<String>,
}
