use clap::Parser;

/// Listener settings. Database settings are read by
/// [`checklist_db::DatabaseConfig::from_env`].
#[derive(Debug, Clone, Parser)]
#[command(name = "checklist-server", version, about = "Checklist items REST API")]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "CHECKLIST_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CHECKLIST_PORT", default_value_t = 8000)]
    pub port: u16,
}

impl ServerArgs {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
