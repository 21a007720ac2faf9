pub mod menu;
pub mod recipe;
pub mod shopping;

use cookbook::{Config, Store};

pub(crate) fn open_store(config: &Config) -> anyhow::Result<Store> {
    Ok(Store::open(&config.storage.path)?)
}
