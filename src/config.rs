use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_server_port")]
    pub server_port: u16,

    // TTL header sent with each delivery, in seconds
    #[serde(default = "default_push_ttl_seconds")]
    pub push_ttl_seconds: u64,
}

fn default_server_port() -> u16 {
    3000
}

fn default_push_ttl_seconds() -> u64 {
    60
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid environmental variable"))?;
        Ok(config)
    }
}
