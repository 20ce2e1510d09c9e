// ============================================================================
// Menu Core - Menu Record Entity
// File: crates/menu-core/src/domain/record.rs
// Description: One validated row of the published menu export
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dietary marker carried in the export's `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Veg,
    NonVeg,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
        }
    }

    /// Badge text shown next to an item
    pub fn label(&self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-veg",
        }
    }
}

impl FromStr for DietType {
    type Err = String;

    /// Accepts surrounding whitespace and any letter case, nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" => Ok(Self::Veg),
            "non-veg" => Ok(Self::NonVeg),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu item as read from the sheet export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub diet: DietType,
    pub image: Option<String>,
    /// Language tag exactly as exported; `None` when the cell was blank
    pub language: Option<String>,
}

impl MenuRecord {
    /// Text for the detail view: the long description, or the short one when
    /// the long one is empty.
    pub fn detail_text(&self) -> &str {
        if self.long_description.is_empty() {
            &self.description
        } else {
            &self.long_description
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Items with nothing extra to show get no details button
    pub fn has_details(&self) -> bool {
        self.has_image() || !self.long_description.is_empty()
    }

    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    pub fn matches_category(&self, sub_category_id: &str) -> bool {
        self.category.to_lowercase() == sub_category_id.trim().to_lowercase()
    }
}

/// Rupee price with two decimals, e.g. `₹20.00`
pub fn format_price(price: f64) -> String {
    format!("₹{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> MenuRecord {
        MenuRecord {
            id: "1".into(),
            name: "Tea".into(),
            description: "Hot tea".into(),
            long_description: String::new(),
            price: 20.0,
            category: "Hot Coffee".into(),
            diet: DietType::Veg,
            image: None,
            language: Some("English".into()),
        }
    }

    #[test]
    fn test_diet_type_parsing() {
        assert_eq!(" VEG ".parse::<DietType>(), Ok(DietType::Veg));
        assert_eq!("Non-Veg".parse::<DietType>(), Ok(DietType::NonVeg));
        assert!("vegan".parse::<DietType>().is_err());
        assert!("non veg".parse::<DietType>().is_err());
    }

    #[test]
    fn test_detail_text_falls_back_to_description() {
        let mut item = tea();
        assert_eq!(item.detail_text(), "Hot tea");
        assert!(!item.has_details());

        item.long_description = "Brewed with cardamom".into();
        assert_eq!(item.detail_text(), "Brewed with cardamom");
        assert!(item.has_details());
    }

    #[test]
    fn test_price_display_round_trip() {
        for price in [0.0, 20.0, 99.5, 149.99, 1200.0] {
            let shown = format_price(price);
            let reparsed: f64 = shown.trim_start_matches('₹').parse().unwrap();
            assert!((reparsed - price).abs() < 0.005, "{} -> {}", price, shown);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(tea()).unwrap();
        assert_eq!(json["type"], "veg");
        assert_eq!(json["longDescription"], "");
        assert_eq!(json["language"], "English");
        assert!(json["image"].is_null());
    }
}
