use crate::error::OrderError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());
static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Returns true for non-empty strings of ASCII letters and spaces only.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Returns true for exactly 10 ASCII digits.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// The customer placing the order.
///
/// Constructed once per session from validated input and immutable thereafter.
/// The address is free text; name and mobile must satisfy the predicates above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    address: String,
    mobile: String,
}

impl User {
    pub fn new(name: &str, address: &str, mobile: &str) -> Result<Self, OrderError> {
        if !is_valid_name(name) {
            return Err(OrderError::ValidationError(format!(
                "Invalid name: {name:?}"
            )));
        }
        if !is_valid_mobile(mobile) {
            return Err(OrderError::ValidationError(format!(
                "Invalid mobile number: {mobile:?}"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            mobile: mobile.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User: {}, Address: {}, Mobile: {}",
            self.name, self.address, self.mobile
        )
    }
}
