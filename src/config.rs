use clap::Parser;

pub const DEFAULT_LOG_FILTER: &str = "memtodo=debug,tower_http=info";

/// Runtime settings; each flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "memtodo", version, about = "In-memory todo list server")]
pub struct AppConfig {
    /// Interface to bind
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// tracing-subscriber filter directives
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl AppConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
