use crate::domain::money::Money;
use crate::error::{OrderError, Result};
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One orderable dish with its price.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Money,
}

/// The restaurant's fixed catalog for one session.
///
/// Items are 1-indexed for display; `get` takes the 0-based internal index
/// (displayed number − 1) and returns `None` out of range, so an invalid
/// choice never produces a placeholder item.
#[derive(Debug, Clone, Deserialize)]
pub struct Menu {
    pub restaurant: String,
    items: Vec<MenuItem>,
}

impl Menu {
    /// The default "Foodies Corner" catalog.
    pub fn builtin() -> Self {
        let price = |d| Money::new(d).unwrap();
        Self {
            restaurant: "Foodies Corner".to_string(),
            items: vec![
                MenuItem { name: "Burger".to_string(), price: price(dec!(149.00)) },
                MenuItem { name: "Pizza".to_string(), price: price(dec!(299.00)) },
                MenuItem { name: "Pasta".to_string(), price: price(dec!(199.00)) },
                MenuItem { name: "French Fries".to_string(), price: price(dec!(299.00)) },
                MenuItem { name: "Veg Noodles".to_string(), price: price(dec!(150.00)) },
                MenuItem { name: "Fried Rice".to_string(), price: price(dec!(239.00)) },
                MenuItem { name: "Shawarma".to_string(), price: price(dec!(129.00)) },
                MenuItem { name: "Chicken Noodles".to_string(), price: price(dec!(159.00)) },
                MenuItem { name: "Veg Biriyani".to_string(), price: price(dec!(49.00)) },
                MenuItem { name: "Chicken Biriyani".to_string(), price: price(dec!(49.00)) },
            ],
        }
    }

    /// Reads a catalog from any JSON source (e.g. File, in-memory buffer).
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let menu: Menu = serde_json::from_reader(source)?;
        if menu.items.is_empty() {
            return Err(OrderError::ValidationError(
                "Menu must contain at least one item".to_string(),
            ));
        }
        Ok(menu)
    }

    /// Loads a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn is_valid_choice(&self, index: usize) -> bool {
        index < self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Writes the menu table with 1-based item numbers.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n--- Menu for {} ---", self.restaurant)?;
        writeln!(out, "{:<5}{:<18}Price (INR)", "No.", "Item")?;
        for (i, item) in self.items.iter().enumerate() {
            writeln!(out, "{:<5}{:<18}{}", i + 1, item.name, item.price)?;
        }
        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::builtin()
    }
}
