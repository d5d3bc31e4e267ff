use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Serves the world happiness dashboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "happiness_dashboard", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// CSV file with one row per country
    #[arg(long, env = "APP_DATA_PATH", default_value = "data/2022.csv")]
    pub data_path: PathBuf,

    /// Log at debug level, including every dispatched selection change
    #[arg(long, env = "APP_DEBUG")]
    pub debug: bool,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn log_directive(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
