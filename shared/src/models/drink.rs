//! Drink catalog types
//!
//! Read-only catalog data: the engine never mutates drinks, it only
//! resolves selections against them when pricing batch orders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Drink category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DrinkCategory {
    Coffee,
    Kopi,
    Tea,
    BubbleTea,
    MilkTea,
    FruitTea,
    CheeseTea,
    Juice,
    SoftDrink,
    OtherLocalDrinks,
    Alcohol,
}

/// One selectable option within a customization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOption {
    pub id: String,
    pub name: String,
    /// Additional cost in SGD, may be zero or negative
    pub price_modifier: f64,
}

/// A customization category (sweetness, temperature, size, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkCustomization {
    pub id: String,
    pub name: String,
    pub options: Vec<CustomizationOption>,
    pub is_required: bool,
}

/// Catalog drink with base price and available customizations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub category: DrinkCategory,
    /// Base price in SGD
    pub price: f64,
    pub customizations: Vec<DrinkCustomization>,
}

impl Drink {
    /// Price modifier for a chosen option, if both ids resolve
    pub fn option_modifier(&self, customization_id: &str, option_id: &str) -> Option<f64> {
        self.customizations
            .iter()
            .find(|c| c.id == customization_id)?
            .options
            .iter()
            .find(|o| o.id == option_id)
            .map(|o| o.price_modifier)
    }
}

/// One drink line in a batch order request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkSelection {
    pub drink_id: String,
    /// Customization-category id -> chosen option id
    pub customizations: BTreeMap<String, String>,
    pub quantity: u32,
}
