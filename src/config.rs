//! Server configuration, read from the command line or the environment.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "bookshelf",
    version,
    about = "In-memory bookstore catalog served over HTTP"
)]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log filter used when RUST_LOG is not set (e.g. `info`, `bookshelf=debug`).
    #[arg(long, env = "BOOKSHELF_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// `host:port` for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
