/// Configuration loading/parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {message}")]
    Parse { message: String },

    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },
}
