use std::{fmt, path::PathBuf, time::Duration};

use clap::Parser;
use reqwest::Url;

use crate::{model::ids::LanguageCode, service::render::DEFAULT_IMAGE_HOST};

/// League of Legends champion browser
#[derive(Parser, Debug)]
#[command(name = "champgrid")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the server providing /api/champions
    #[arg(long, env = "CHAMPGRID_BASE_URL", default_value = "http://localhost:10000")]
    pub base_url: String,

    /// Host serving champion images
    #[arg(long, env = "CHAMPGRID_IMAGE_HOST", default_value = DEFAULT_IMAGE_HOST)]
    pub image_host: String,

    /// Language to load first; the server default is used when omitted
    #[arg(short = 'L', long, env = "CHAMPGRID_LANGUAGE")]
    pub language: Option<String>,

    /// Languages offered by the selector
    #[arg(long, env = "CHAMPGRID_LANGUAGES", value_delimiter = ',', default_value = "en_US,pl_PL")]
    pub languages: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, env = "CHAMPGRID_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Directory for stored responses
    #[arg(short = 'd', long, env = "CHAMPGRID_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Load champions from stored JSON files instead of the server
    #[arg(short = 'l', long = "load-local")]
    pub load_local: bool,

    /// Store server responses as JSON files
    #[arg(short = 's', long = "store-responses")]
    pub store_responses: bool,

    /// File receiving the log output
    #[arg(long, env = "CHAMPGRID_LOG_FILE", default_value = "champgrid.log")]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub image_host: String,
    pub language: Option<LanguageCode>,
    pub languages: Vec<LanguageCode>,
    pub timeout: Duration,
    pub data_dir: PathBuf,
    pub load_local: bool,
    pub store_responses: bool,
    pub log_file: PathBuf,
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let url = Url::parse(&args.base_url).map_err(|_| ConfigError::InvalidBaseUrl(args.base_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(args.base_url));
        }

        let languages = args
            .languages
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(LanguageCode::from)
            .collect::<Vec<_>>();
        if languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }

        if args.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            base_url: args.base_url,
            image_host: args.image_host,
            language: args
                .language
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .map(LanguageCode::from),
            languages,
            timeout: Duration::from_secs(args.timeout_secs),
            data_dir: args.data_dir,
            load_local: args.load_local,
            store_responses: args.store_responses,
            log_file: args.log_file,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl(String),
    NoLanguages,
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl(url) => write!(f, "Invalid base URL: {}", url),
            ConfigError::NoLanguages => write!(f, "At least one language code is required"),
            ConfigError::InvalidTimeout => write!(f, "Timeout must be at least one second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(argv: &[&str]) -> Result<Settings, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("champgrid").chain(argv.iter().copied())).unwrap();
        Settings::try_from(args)
    }

    #[test]
    fn defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.base_url, "http://localhost:10000");
        assert_eq!(settings.image_host, "ddragon.leagueoflegends.com");
        assert_eq!(settings.language, None);
        assert_eq!(settings.languages, vec![LanguageCode::from("en_US"), LanguageCode::from("pl_PL")]);
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(!settings.load_local);
    }

    #[test]
    fn language_list_is_split_and_trimmed() {
        let settings = settings(&["--languages", "ko_KR, en_US,,", "-L", "ko_KR"]).unwrap();
        assert_eq!(settings.languages, vec![LanguageCode::from("ko_KR"), LanguageCode::from("en_US")]);
        assert_eq!(settings.language, Some(LanguageCode::from("ko_KR")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            settings(&["--base-url", "localhost"]),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            settings(&["--base-url", "ftp://example.org"]),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(settings(&["--languages", " "]), Err(ConfigError::NoLanguages)));
        assert!(matches!(settings(&["--timeout-secs", "0"]), Err(ConfigError::InvalidTimeout)));
    }
}
