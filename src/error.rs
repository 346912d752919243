use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Scraping error: {0}")]
    Scraper(#[from] ScraperError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(#[from] rquest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required configuration: {0}")]
    MissingField(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build client: {0}")]
    BuildError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response error {status_code}")]
    ResponseError { status_code: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Selector error: {0}")]
    SelectorError(String),

    /// The expected container was found `found` times instead of exactly once.
    #[error("Expected one `{selector}` container, found {found}")]
    ContainerMismatch { selector: String, found: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;
