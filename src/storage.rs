use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::models::{CartLine, Order, Product};
use crate::state::StoreState;

const STATE_FILE: &str = "htech-store.json";

/// On-disk layout: one JSON document holding the `cart`, `orders` and
/// `products` keys.
#[derive(Debug, Deserialize)]
struct PersistedState {
    cart: Vec<CartLine>,
    orders: Vec<Order>,
    products: Vec<Product>,
}

#[derive(Serialize)]
struct PersistedStateRef<'a> {
    cart: &'a [CartLine],
    orders: &'a [Order],
    products: &'a [Product],
}

/// Repository adapter over a local data directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STATE_FILE),
        }
    }

    /// Load the persisted snapshot, or `None` when nothing has been written yet.
    pub fn load(&self) -> StoreResult<Option<StoreState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let persisted: PersistedState = serde_json::from_str(&raw)?;
        Ok(Some(StoreState::from_parts(
            persisted.products,
            persisted.cart,
            persisted.orders,
        )))
    }

    /// Write the snapshot to a sibling temp file, sync it, then rename over
    /// the target so readers never see a half-written document.
    pub fn save(&self, state: &StoreState) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let persisted = PersistedStateRef {
            cart: &state.cart,
            orders: &state.orders,
            products: &state.products,
        };
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(serde_json::to_string_pretty(&persisted)?.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
