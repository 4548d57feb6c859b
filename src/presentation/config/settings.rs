/// Immutable process configuration, read once from the environment at
/// startup and passed explicitly into the components that need it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub llm: LlmSettings,
    pub frontend: StaticSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct StaticSettings {
    pub dir: String,
}

impl Settings {
    /// A missing API key is deliberately not an error here: requests will
    /// simply fail against the upstream service.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            database: DatabaseSettings {
                url: env_or("DATABASE_URL", "postgres://localhost/qonun"),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            llm: LlmSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: env_or("GEMINI_MODEL", "gemini-1.5-flash"),
            },
            frontend: StaticSettings {
                dir: env_or("FRONTEND_DIR", "frontend_build"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
