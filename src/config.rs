use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Simulated response delay in milliseconds
    #[arg(long, env = "RESPONDER_DELAY_MS")]
    pub responder_delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub responder: ResponderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResponderConfig {
    /// Delay before the simulated answer is produced.
    pub delay_ms: u64,
}

impl ResponderConfig {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration with the precedence: CLI flag > env var > config
    /// file > built-in default.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("responder.delay_ms", 1500)?;

        // Optional config file: explicit path via --config/CONFIG_FILE,
        // otherwise ./config.{yaml,toml,...} when present.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else {
            builder = builder.add_source(File::with_name("config").required(false));
        }

        // Environment variables prefixed with LEXI_, e.g. LEXI_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("LEXI")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags win over everything. clap also resolves the HOST/PORT/
        // RESPONDER_DELAY_MS env vars declared on the Cli struct, so those
        // arrive through the same overrides.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(delay) = cli.responder_delay_ms {
            builder = builder.set_override("responder.delay_ms", delay)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
