use std::{fmt, io};

use crate::model::{champion::ChampionCollection, ids::LanguageCode, item::ItemCollection};

use parsing::ParsingError;

pub mod api_client;
pub mod parsing;
pub mod response_store;

/// Anything that can produce the champion collection for a language.
pub trait ChampionSource: Send + Sync + 'static {
    fn fetch(&self, language: Option<&LanguageCode>) -> Result<ChampionCollection, LoadError>;
}

/// Anything that can produce the item collection for a language.
pub trait ItemSource: Send + Sync + 'static {
    fn fetch_items(&self, language: Option<&LanguageCode>) -> Result<ItemCollection, LoadError>;
}

/// The data sets served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Champions,
    Items,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Champions => "/api/champions",
            Endpoint::Items => "/api/items",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Champions => write!(f, "champions"),
            Endpoint::Items => write!(f, "items"),
        }
    }
}

/// The single fetch/parse failure kind. Variants only feed the log message.
#[derive(Debug)]
pub enum LoadError {
    NetworkError(reqwest::Error),
    InvalidResponse(u16, String),
    JsonParseError(json::Error),
    ShapeError(ParsingError),
    LocalFileError(io::Error),
    WorkerPanicked(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::NetworkError(e) => write!(f, "Network error: {}", e),
            LoadError::InvalidResponse(status, body) => {
                write!(f, "Server returned error {}: {}", status, body)
            }
            LoadError::JsonParseError(e) => write!(f, "Failed to parse JSON response: {}", e),
            LoadError::ShapeError(e) => write!(f, "Unexpected response data: {}", e),
            LoadError::LocalFileError(e) => write!(f, "Local file error: {}", e),
            LoadError::WorkerPanicked(msg) => write!(f, "Load worker panicked: {}", msg),
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error)
    }
}

impl From<json::Error> for LoadError {
    fn from(error: json::Error) -> Self {
        Self::JsonParseError(error)
    }
}

impl From<ParsingError> for LoadError {
    fn from(error: ParsingError) -> Self {
        Self::ShapeError(error)
    }
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        Self::LocalFileError(error)
    }
}
