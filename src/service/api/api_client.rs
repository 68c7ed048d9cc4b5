use std::{fmt, time::Duration};

use json::JsonValue;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::model::{champion::ChampionCollection, ids::LanguageCode, item::ItemCollection};

use super::{
    parsing::{champion::parse_champions, item::parse_items},
    response_store::ResponseStore,
    ChampionSource, Endpoint, ItemSource, LoadError,
};

pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Option<ResponseStore>,
    load_local: bool,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiClientInitError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store: None,
            load_local: false,
        })
    }

    /// Keep every successful response in `store`, or serve from it when `load_local` is set.
    pub fn with_store(mut self, store: ResponseStore, load_local: bool) -> Self {
        self.store = Some(store);
        self.load_local = load_local;
        self
    }

    pub fn url(base_url: &str, endpoint: Endpoint, language: Option<&LanguageCode>) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), endpoint.path());
        if let Some(lang) = language {
            url.push_str(&format!("?lang={}", urlencoding::encode(lang.as_str())));
        }
        url
    }

    fn request(&self, endpoint: Endpoint, language: Option<&LanguageCode>) -> Result<JsonValue, LoadError> {
        if self.load_local {
            if let Some(store) = &self.store {
                debug!(path = %store.path_for(endpoint, language).display(), "reading stored response");
                return store.load(endpoint, language);
            }
        }

        let url = Self::url(&self.base_url, endpoint, language);
        debug!(%url, "requesting {}", endpoint);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(LoadError::InvalidResponse(
                response.status().as_u16(),
                response.text().unwrap_or_else(|_| "Unknown error".to_string()),
            ));
        }

        let text = response.text()?;
        let json = json::parse(&text)?;

        if let Some(store) = &self.store {
            if let Err(error) = store.save(endpoint, language, &json) {
                warn!(%error, "could not store {} response", endpoint);
            }
        }

        Ok(json)
    }
}

impl ChampionSource for ApiClient {
    fn fetch(&self, language: Option<&LanguageCode>) -> Result<ChampionCollection, LoadError> {
        let json = self.request(Endpoint::Champions, language)?;
        Ok(parse_champions(&json)?)
    }
}

impl ItemSource for ApiClient {
    fn fetch_items(&self, language: Option<&LanguageCode>) -> Result<ItemCollection, LoadError> {
        let json = self.request(Endpoint::Items, language)?;
        Ok(parse_items(&json)?)
    }
}

#[derive(Debug)]
pub enum ApiClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for ApiClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiClientInitError::HttpClientCreation(e) => {
                write!(f, "Failed to create HTTP client: {}", e)
            }
        }
    }
}

impl From<reqwest::Error> for ApiClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}
