use serde::Deserialize;

pub const DEFAULT_MONGO_HOST: &str = "localhost:27017";
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_SERVER_KEEPALIVE: u64 = 75;
pub const DEFAULT_MONGO_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub mongo_host:                 String,
	pub mongo_connect_timeout_secs: u64,
	pub server_host:                String,
	pub server_port:                u16,
	pub server_keepalive:           u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("mongo_host", DEFAULT_MONGO_HOST)?
			.set_default(
				"mongo_connect_timeout_secs",
				DEFAULT_MONGO_CONNECT_TIMEOUT_SECS,
			)?
			.set_default("server_host", DEFAULT_SERVER_HOST)?
			.set_default("server_port", DEFAULT_SERVER_PORT)?
			.set_default("server_keepalive", DEFAULT_SERVER_KEEPALIVE)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn mongo_url(&self) -> String {
		format!("mongodb://{}", self.mongo_host)
	}
}
