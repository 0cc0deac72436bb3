//! Store payloads.

use serde::{Deserialize, Serialize};

use super::inventory::Price;

/// A store product, from `Mercantile.GetAllProducts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub product_type: String,
    pub prices: Vec<Price>,
    pub purchase_limit: Option<u32>,
}

/// Store availability, from `Mercantile.GetStoreStatus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreStatus {
    pub store_enabled: bool,
    pub daily_reset: Option<String>,
    pub weekly_reset: Option<String>,
}
