//! Customer contact and shipping details.

use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    /// Format as single line.
    pub fn one_line(&self) -> String {
        [
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip_code.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Who an order is for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl CustomerInfo {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_formatting() {
        let customer = CustomerInfo {
            first_name: "Sarah".to_string(),
            last_name: "Ahmed".to_string(),
            email: "sarah@example.com".to_string(),
            phone: String::new(),
            address: Address {
                street: "12 Cedar Lane".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip_code: "78701".to_string(),
                country: String::new(),
            },
        };
        assert_eq!(customer.full_name(), "Sarah Ahmed");
        assert_eq!(customer.address.one_line(), "12 Cedar Lane, Austin, TX, 78701");
    }
}
