//! Statistics record produced by the external upload parser.
//!
//! The slideshow consumes this record once at startup to build the scene
//! list; it never validates or reshapes the data beyond tolerating missing
//! fields. A partially missing field degrades one scene, never the show.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One ranked item with how many times it was ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub item: String,
    pub count: u32,
}

/// A single line item on a receipt. The parser only extracts names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub name: Option<String>,
}

/// One parsed receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Formatted as `YYYY-MM-DD H:MM AM/PM` by the parser.
    #[serde(default)]
    pub order_time: Option<String>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// The clock portion of `order_time`, e.g. `7:05 AM`.
    pub fn time_of_day(&self) -> Option<&str> {
        let ts = self.order_time.as_deref()?;
        let (_, time) = ts.split_once(' ')?;
        Some(time.trim())
    }

    /// The calendar portion of `order_time`, e.g. `2024-10-03`.
    pub fn date(&self) -> Option<&str> {
        let ts = self.order_time.as_deref()?;
        Some(ts.split_once(' ').map_or(ts, |(date, _)| date))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusiestDay {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub order_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopRestaurant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: u32,
}

/// The full record, as serialized by the backend `/api/upload` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiningStats {
    /// Ranked most-ordered items, already sorted descending by the parser.
    pub item_counts: Vec<ItemCount>,
    /// Visits per restaurant, unordered.
    pub restaurant_counts: HashMap<String, u32>,
    pub total_items_ordered: u32,
    pub total_unique_items: u32,
    pub busiest_day: BusiestDay,
    pub busiest_day_orders: Vec<Order>,
    pub earliest_order_by_time: Option<Order>,
    pub latest_order_by_time: Option<Order>,
    pub most_expensive_order: Option<Order>,
    pub unique_restaurants: u32,
    pub top_restaurant: TopRestaurant,
    pub recipient_name: Option<String>,
}

impl DiningStats {
    /// Restaurants ranked by visit count, descending, name as tiebreaker so
    /// the ordering is stable across runs.
    pub fn ranked_restaurants(&self) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .restaurant_counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

/// Load and parse a statistics JSON file.
pub fn load_stats(path: &Path) -> Result<DiningStats> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read stats file {}", path.display()))?;
    let stats: DiningStats = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse stats file {}", path.display()))?;
    Ok(stats)
}
