use std::{fmt, process::ExitCode, sync::Arc};

use clap::Parser;
use tracing::info;

use crate::{
    config::{Args, ConfigError, Settings},
    logging::LoggingInitError,
    service::{
        api::{
            api_client::{ApiClient, ApiClientInitError},
            response_store::ResponseStore,
        },
        browser::Browser,
        item_browser::ItemBrowser,
        loader::Loader,
        render::ImageTemplate,
    },
    ui::{
        grid::TerminalGrid,
        repl::{self, App},
        ReplError,
    },
};

mod config;
mod logging;
mod model;
mod service;
mod ui;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error occured while running champgrid:\n{}\n", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), StartupError> {
    let settings = Settings::try_from(args)?;
    logging::init(&settings.log_file)?;
    info!(base_url = %settings.base_url, languages = ?settings.languages, "starting champgrid");

    let mut client = ApiClient::new(&settings.base_url, settings.timeout)?;
    if settings.load_local || settings.store_responses {
        client = client.with_store(ResponseStore::new(&settings.data_dir), settings.load_local);
    }
    let client = Arc::new(client);
    let images = ImageTemplate::new(&settings.image_host);

    let browser = Browser::new(Loader::new(client.clone()), TerminalGrid::default(), images.clone());
    let items = ItemBrowser::new(Loader::items(client), TerminalGrid::default(), images);
    let app = App::new(browser, items, settings.languages, settings.language);

    repl::run(app)?;
    info!("champgrid exited");
    Ok(())
}

#[derive(Debug)]
enum StartupError {
    Config(ConfigError),
    Logging(LoggingInitError),
    Client(ApiClientInitError),
    Repl(ReplError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StartupError::Config(err) => write!(f, "Config error: {}", err),
            StartupError::Logging(err) => write!(f, "Logging error: {}", err),
            StartupError::Client(err) => write!(f, "Client error: {}", err),
            StartupError::Repl(err) => write!(f, "REPL error: {}", err),
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(error: ConfigError) -> Self {
        StartupError::Config(error)
    }
}

impl From<LoggingInitError> for StartupError {
    fn from(error: LoggingInitError) -> Self {
        StartupError::Logging(error)
    }
}

impl From<ApiClientInitError> for StartupError {
    fn from(error: ApiClientInitError) -> Self {
        StartupError::Client(error)
    }
}

impl From<ReplError> for StartupError {
    fn from(error: ReplError) -> Self {
        StartupError::Repl(error)
    }
}
