use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use cookbook_menu::Menu;
use cookbook_recipe::Catalog;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

pub const RECIPES: &str = "recipes";
pub const FAVORITES: &str = "favorites";
pub const RATINGS: &str = "ratings";
pub const MENU: &str = "menu";
pub const SHOPPING_CHECKED: &str = "shopping-checked";

/// Key-value store backed by a single JSON object on disk.
///
/// Every key holds one JSON document. Changes stay in memory until
/// [`Store::save`] rewrites the file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    documents: Map<String, Value>,
}

impl Store {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let documents = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "store file not found, starting empty");
                Map::new()
            }
            Err(e) => return Err(AppError::store(path, e)),
        };

        Ok(Self { path, documents })
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.documents.get(key) {
            Some(value) => Ok(Some(T::deserialize(value)?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        self.documents
            .insert(key.to_owned(), serde_json::to_value(value)?);

        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.documents.remove(key).is_some()
    }

    /// Write all documents back, replacing the file in one rename.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::store(parent, e))?;
        }

        let content = serde_json::to_string_pretty(&self.documents)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, content).map_err(|e| AppError::store(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| AppError::store(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), keys = self.documents.len(), "store saved");

        Ok(())
    }

    pub fn catalog(&self) -> AppResult<Catalog> {
        Ok(Catalog::new(
            self.get(RECIPES)?.unwrap_or_default(),
            self.get(FAVORITES)?.unwrap_or_default(),
            self.get::<BTreeMap<String, u8>>(RATINGS)?.unwrap_or_default(),
        ))
    }

    pub fn put_catalog(&mut self, catalog: &Catalog) -> AppResult<()> {
        self.set(RECIPES, catalog.recipes())?;
        self.set(FAVORITES, catalog.favorite_keys())?;
        self.set(RATINGS, catalog.ratings())
    }

    pub fn menu(&self) -> AppResult<Menu> {
        Ok(self.get(MENU)?.unwrap_or_default())
    }

    /// Store the menu. The shopping list is rebuilt from the new menu, so
    /// checked marks from the previous list are dropped.
    pub fn put_menu(&mut self, menu: &Menu) -> AppResult<()> {
        self.remove(SHOPPING_CHECKED);
        self.set(MENU, menu)
    }

    pub fn checked(&self) -> AppResult<Vec<String>> {
        Ok(self.get(SHOPPING_CHECKED)?.unwrap_or_default())
    }

    pub fn put_checked(&mut self, keys: &[String]) -> AppResult<()> {
        self.set(SHOPPING_CHECKED, keys)
    }
}
