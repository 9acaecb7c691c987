use std::{fmt, io::stdin};

use config::AppConfig;
use service::{
    assets::{store::AssetStoreError, AssetStore},
    lcu::{client::LcuClient, locator::ProcessScanLocator},
    riot::client::{ApiInitError, RiotApiClient},
};
use ui::app::{self, Services};

mod config;
mod model;
mod service;
mod ui;

fn main() {
    let config = AppConfig::from_env();

    match init_services(&config) {
        Ok(services) => {
            if let Err(error) = app::run(services) {
                println!("Error occured while running UI:\n{}\n", error);
                wait_for_exit();
            }
        }
        Err(error) => {
            println!("Error occured while initializing:\n{}\n", error);
            wait_for_exit();
        }
    }
}

fn init_services(config: &AppConfig) -> Result<Services<ProcessScanLocator>, InitError> {
    let assets = AssetStore::open(&config.assets_dir)?;
    let riot = RiotApiClient::new(config)?;
    let lcu = LcuClient::new(ProcessScanLocator);
    Ok(Services { riot, assets, lcu })
}

fn wait_for_exit() {
    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}

#[derive(Debug)]
enum InitError {
    Assets(AssetStoreError),
    Riot(ApiInitError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InitError::Assets(err) => write!(f, "Asset store failed: {}", err),
            InitError::Riot(err) => write!(f, "Riot API client failed: {}", err),
        }
    }
}

impl From<AssetStoreError> for InitError {
    fn from(error: AssetStoreError) -> Self {
        InitError::Assets(error)
    }
}

impl From<ApiInitError> for InitError {
    fn from(error: ApiInitError) -> Self {
        InitError::Riot(error)
    }
}
