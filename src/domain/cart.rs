use crate::domain::menu::MenuItem;
use crate::domain::money::Money;
use crate::error::{OrderError, Result};
use std::fmt;
use std::io::Write;

/// A positive item count.
///
/// Ensures that cart entries always carry a quantity greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: i64) -> Result<Self> {
        if value > 0 && value <= i64::from(u32::MAX) {
            Ok(Self(value as u32))
        } else {
            Err(OrderError::ValidationError(
                "Quantity must be greater than 0".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One selected menu item with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub item: MenuItem,
    pub quantity: Quantity,
}

impl CartEntry {
    pub fn subtotal(&self) -> Money {
        self.item.price * self.quantity
    }
}

impl fmt::Display for CartEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} × {}: {}",
            self.item.name,
            self.quantity,
            self.subtotal()
        )
    }
}

/// The in-memory cart for one session.
///
/// Entries keep insertion order, which is also display order. The total is
/// recomputed from the entries on every call, never cached.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: MenuItem, quantity: Quantity) {
        self.entries.push(CartEntry { item, quantity });
    }

    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Writes the cart listing with per-entry subtotals and the grand total.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n--- Cart Items ---")?;
        for entry in &self.entries {
            writeln!(out, "{entry}")?;
        }
        writeln!(out, "Total: {}", self.total())?;
        Ok(())
    }
}
