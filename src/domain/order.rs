use crate::domain::cart::CartEntry;
use crate::domain::money::Money;
use crate::domain::user::User;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Placed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed => write!(f, "Placed"),
        }
    }
}

/// An immutable snapshot of a paid cart plus the customer identity.
///
/// Created only after successful payment; there is no
/// cancellation-after-placement path, so the status never leaves `Placed`.
#[derive(Debug, Clone)]
pub struct Order {
    user: User,
    lines: Vec<CartEntry>,
    status: OrderStatus,
}

impl Order {
    pub fn new(user: User, lines: Vec<CartEntry>) -> Self {
        Self {
            user,
            lines,
            status: OrderStatus::Placed,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn lines(&self) -> &[CartEntry] {
        &self.lines
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartEntry::subtotal).sum()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Order Summary ---")?;
        writeln!(f, "Customer: {}", self.user.name())?;
        writeln!(f, "Mobile: {}", self.user.mobile())?;
        writeln!(f, "Address: {}", self.user.address())?;
        writeln!(f, "Items:")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Total: {}", self.total())?;
        write!(f, "Order Status: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Quantity;
    use crate::domain::menu::MenuItem;
    use rust_decimal_macros::dec;

    fn sample_order() -> Order {
        let user = User::new("Jane Doe", "10 Main St", "9876543210").unwrap();
        let lines = vec![CartEntry {
            item: MenuItem {
                name: "Burger".to_string(),
                price: Money::new(dec!(149.00)).unwrap(),
            },
            quantity: Quantity::new(2).unwrap(),
        }];
        Order::new(user, lines)
    }

    #[test]
    fn test_order_starts_placed() {
        let order = sample_order();
        assert_eq!(order.status(), OrderStatus::Placed);
        assert_eq!(order.total(), Money::new(dec!(298.00)).unwrap());
        assert_eq!(order.lines().len(), 1);
    }

    #[test]
    fn test_order_summary_rendering() {
        let rendered = sample_order().to_string();
        assert!(rendered.contains("--- Order Summary ---"));
        assert!(rendered.contains("Customer: Jane Doe"));
        assert!(rendered.contains("Mobile: 9876543210"));
        assert!(rendered.contains("Address: 10 Main St"));
        assert!(rendered.contains("- Burger × 2: ₹298.00"));
        assert!(rendered.contains("Total: ₹298.00"));
        assert!(rendered.contains("Order Status: Placed"));
    }
}
