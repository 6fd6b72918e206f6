use crate::domain::money::Money;
use crate::error::OrderError;
use std::fmt;
use std::str::FromStr;

/// The accepted payment methods.
///
/// Parsing is case-insensitive; anything other than card or cash is rejected
/// at this boundary so the authorization logic never sees a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl FromStr for PaymentMethod {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            other => Err(OrderError::ValidationError(format!(
                "Invalid payment method: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "Card"),
            Self::Cash => write!(f, "Cash"),
        }
    }
}

/// Result of a local payment authorization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentOutcome {
    Approved { remaining: Money },
    InsufficientFunds,
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }
}

/// Authorizes `amount` against `method`.
///
/// Card deducts from `balance` when it covers the amount and declines
/// otherwise, leaving the balance untouched. Cash is pay-on-delivery and
/// always approves; the balance is irrelevant and passes through unchanged.
pub fn authorize(method: PaymentMethod, amount: Money, balance: Money) -> PaymentOutcome {
    match method {
        PaymentMethod::Card => {
            if balance >= amount {
                PaymentOutcome::Approved {
                    remaining: balance - amount,
                }
            } else {
                PaymentOutcome::InsufficientFunds
            }
        }
        PaymentMethod::Cash => PaymentOutcome::Approved { remaining: balance },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: rust_decimal::Decimal) -> Money {
        Money::new(d).unwrap()
    }

    #[test]
    fn test_method_parsing_is_case_insensitive() {
        assert_eq!("Card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("CASH".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(" cash ".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(matches!(
            "Crypto".parse::<PaymentMethod>(),
            Err(OrderError::ValidationError(_))
        ));
        assert!("".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_card_with_sufficient_balance() {
        let outcome = authorize(PaymentMethod::Card, money(dec!(300)), money(dec!(500)));
        assert_eq!(
            outcome,
            PaymentOutcome::Approved {
                remaining: money(dec!(200))
            }
        );
    }

    #[test]
    fn test_card_with_exact_balance() {
        let outcome = authorize(PaymentMethod::Card, money(dec!(300)), money(dec!(300)));
        assert_eq!(
            outcome,
            PaymentOutcome::Approved {
                remaining: Money::ZERO
            }
        );
    }

    #[test]
    fn test_card_with_insufficient_balance() {
        let outcome = authorize(PaymentMethod::Card, money(dec!(300)), money(dec!(100)));
        assert_eq!(outcome, PaymentOutcome::InsufficientFunds);
        assert!(!outcome.is_approved());
    }

    #[test]
    fn test_cash_always_approves() {
        let outcome = authorize(PaymentMethod::Cash, money(dec!(100000)), Money::ZERO);
        assert_eq!(
            outcome,
            PaymentOutcome::Approved {
                remaining: Money::ZERO
            }
        );
    }
}
