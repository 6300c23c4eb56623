use std::net::SocketAddr;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;


pub static CONFIG_FILE: &str = "banners.toml";
pub static ENV_PREFIX: &str = "BANNERS_";

#[derive(Deserialize)]
pub struct Config {
	pub address: SocketAddr,
	#[serde(default)]
	pub log_level: LogLevel,
	pub database_url: String,
	#[serde(default = "default_max_connections")]
	pub max_connections: u32,
	/// Bearer token granting access to the administrative `/banner` routes.
	pub admin_token: String,
	/// Bearer token granting access to `/user_banner` only.
	pub user_token: String,
}

/// Levels for events from this crate (`internal`) and from dependencies (`external`).
///
/// Accepts either a single level for both or a table with either key.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "RawLogLevel")]
pub struct LogLevel {
	pub internal: LevelFilter,
	pub external: LevelFilter,
}

impl Default for LogLevel {
	fn default() -> Self {
		Self {
			internal: LevelFilter::INFO,
			external: LevelFilter::WARN,
		}
	}
}

/// `LevelFilter` parsed from names such as `"debug"` or `"off"`.
struct Level(LevelFilter);

impl<'de> Deserialize<'de> for Level {
	fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
		let name = String::deserialize(d)?;
		name.parse().map(Self).map_err(serde::de::Error::custom)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLogLevel {
	Both(Level),
	Split {
		internal: Option<Level>,
		external: Option<Level>,
	},
}

impl From<RawLogLevel> for LogLevel {
	fn from(raw: RawLogLevel) -> Self {
		let default = Self::default();
		match raw {
			RawLogLevel::Both(Level(level)) => Self {
				internal: level,
				external: level,
			},
			RawLogLevel::Split { internal, external } => Self {
				internal: internal.map_or(default.internal, |Level(level)| level),
				external: external.map_or(default.external, |Level(level)| level),
			},
		}
	}
}

const fn default_max_connections() -> u32 {
	5
}

pub fn config() -> Result<Config, figment::Error> {
	use figment::providers::Format as _;

	figment::Figment::new()
		.merge(figment::providers::Toml::file(CONFIG_FILE))
		.merge(figment::providers::Env::prefixed(ENV_PREFIX))
		.extract()
}
