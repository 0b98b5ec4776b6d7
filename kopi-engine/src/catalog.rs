//! Drink catalog - read-only pricing collaborator
//!
//! Batch vendor orders carry drink selections, not prices; the engine
//! resolves them here. Line price = (base price + sum of the chosen
//! customization options' modifiers) x quantity. Unknown option ids are
//! ignored for pricing; an unknown drink id is a hard error.

use shared::error::{SessionError, SessionResult};
use shared::models::{
    CustomizationOption, Drink, DrinkCategory, DrinkCustomization, DrinkSelection,
};
use std::collections::HashMap;

/// Immutable drink catalog keyed by drink id
pub struct DrinkCatalog {
    drinks: HashMap<String, Drink>,
}

impl DrinkCatalog {
    /// Build a catalog from a drink list; later duplicates win
    pub fn new(drinks: Vec<Drink>) -> Self {
        Self {
            drinks: drinks.into_iter().map(|d| (d.id.clone(), d)).collect(),
        }
    }

    /// The built-in Singapore drink list
    pub fn singapore() -> Self {
        Self::new(singapore_drinks())
    }

    /// Look up a drink by id
    pub fn get(&self, drink_id: &str) -> Option<&Drink> {
        self.drinks.get(drink_id)
    }

    /// Price one selection per the line-price rule
    ///
    /// Fails with [`SessionError::DrinkNotFound`] when the drink id does
    /// not resolve; unresolvable option ids contribute nothing.
    pub fn line_price(&self, selection: &DrinkSelection) -> SessionResult<f64> {
        let drink = self
            .drinks
            .get(&selection.drink_id)
            .ok_or_else(|| SessionError::DrinkNotFound(selection.drink_id.clone()))?;
        let mut unit_price = drink.price;
        for (customization_id, option_id) in &selection.customizations {
            if let Some(modifier) = drink.option_modifier(customization_id, option_id) {
                unit_price += modifier;
            }
        }
        Ok(unit_price * f64::from(selection.quantity))
    }
}

fn option(id: &str, name: &str, price_modifier: f64) -> CustomizationOption {
    CustomizationOption {
        id: id.to_string(),
        name: name.to_string(),
        price_modifier,
    }
}

fn sweetness() -> DrinkCustomization {
    DrinkCustomization {
        id: "sweetness".to_string(),
        name: "Sweetness".to_string(),
        options: vec![
            option("normal", "Normal", 0.0),
            option("siu-dai", "Siu Dai (less sweet)", 0.0),
            option("kosong", "Kosong (no sugar)", 0.0),
            option("gah-dai", "Gah Dai (extra sweet)", 0.10),
        ],
        is_required: true,
    }
}

fn temperature() -> DrinkCustomization {
    DrinkCustomization {
        id: "temperature".to_string(),
        name: "Temperature".to_string(),
        options: vec![
            option("hot", "Hot", 0.0),
            option("peng", "Peng (iced)", 0.30),
        ],
        is_required: true,
    }
}

fn bubble_tea_size() -> DrinkCustomization {
    DrinkCustomization {
        id: "size".to_string(),
        name: "Size".to_string(),
        options: vec![
            option("medium", "Medium", 0.0),
            option("large", "Large", 0.50),
        ],
        is_required: true,
    }
}

fn toppings() -> DrinkCustomization {
    DrinkCustomization {
        id: "toppings".to_string(),
        name: "Toppings".to_string(),
        options: vec![
            option("pearls", "Pearls", 0.0),
            option("grass-jelly", "Grass Jelly", 0.50),
            option("pudding", "Pudding", 0.80),
        ],
        is_required: false,
    }
}

fn singapore_drinks() -> Vec<Drink> {
    let kopi = |id: &str, name: &str, price: f64| Drink {
        id: id.to_string(),
        name: name.to_string(),
        category: DrinkCategory::Kopi,
        price,
        customizations: vec![sweetness(), temperature()],
    };
    vec![
        kopi("kopi", "Kopi", 1.40),
        kopi("kopi-o", "Kopi O", 1.20),
        kopi("kopi-c", "Kopi C", 1.50),
        Drink {
            id: "teh".to_string(),
            name: "Teh".to_string(),
            category: DrinkCategory::Tea,
            price: 1.30,
            customizations: vec![sweetness(), temperature()],
        },
        Drink {
            id: "teh-tarik".to_string(),
            name: "Teh Tarik".to_string(),
            category: DrinkCategory::MilkTea,
            price: 1.80,
            customizations: vec![sweetness()],
        },
        Drink {
            id: "milo-dinosaur".to_string(),
            name: "Milo Dinosaur".to_string(),
            category: DrinkCategory::OtherLocalDrinks,
            price: 3.50,
            customizations: vec![temperature()],
        },
        Drink {
            id: "brown-sugar-boba".to_string(),
            name: "Brown Sugar Boba Milk".to_string(),
            category: DrinkCategory::BubbleTea,
            price: 4.80,
            customizations: vec![bubble_tea_size(), toppings()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn selection(drink_id: &str, quantity: u32, picks: &[(&str, &str)]) -> DrinkSelection {
        DrinkSelection {
            drink_id: drink_id.to_string(),
            customizations: picks
                .iter()
                .map(|(c, o)| (c.to_string(), o.to_string()))
                .collect::<BTreeMap<_, _>>(),
            quantity,
        }
    }

    #[test]
    fn base_price_times_quantity() {
        let catalog = DrinkCatalog::singapore();
        let price = catalog.line_price(&selection("teh-tarik", 2, &[])).unwrap();
        assert!((price - 3.60).abs() < 1e-9);
    }

    #[test]
    fn option_modifiers_are_added_before_multiplying() {
        let catalog = DrinkCatalog::singapore();
        // Kopi 1.40 + peng 0.30, x2
        let price = catalog
            .line_price(&selection("kopi", 2, &[("temperature", "peng")]))
            .unwrap();
        assert!((price - 3.40).abs() < 1e-9);
    }

    #[test]
    fn unknown_option_ids_are_ignored_for_pricing() {
        let catalog = DrinkCatalog::singapore();
        let price = catalog
            .line_price(&selection("kopi", 1, &[("temperature", "volcanic")]))
            .unwrap();
        assert!((price - 1.40).abs() < 1e-9);
    }

    #[test]
    fn unknown_drink_id_is_an_error() {
        let catalog = DrinkCatalog::singapore();
        let err = catalog
            .line_price(&selection("durian-shake", 1, &[]))
            .unwrap_err();
        assert_eq!(err, SessionError::DrinkNotFound("durian-shake".to_string()));
    }
}
