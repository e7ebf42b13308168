use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Postal address of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressFields")]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates an address, rejecting empty street, zip or city.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let fields = [("Street", &self.street), ("Zip", &self.zip), ("City", &self.city)];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::AddressFieldRequired { field });
            }
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Unvalidated wire form, checked through [`Address::new`] on deserialize.
#[derive(Deserialize)]
struct AddressFields {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl TryFrom<AddressFields> for Address {
    type Error = ValidationError;

    fn try_from(fields: AddressFields) -> Result<Self, Self::Error> {
        Address::new(fields.street, fields.number, fields.zip, fields.city)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let address = Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap();
        assert_eq!(address.to_string(), "Street 1, 123, 13330-250 São Paulo");
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(
            Address::new("", 1, "Zipcode 1", "City 1").unwrap_err(),
            ValidationError::AddressFieldRequired { field: "Street" }
        );
        assert_eq!(
            Address::new("Street 1", 1, " ", "City 1").unwrap_err(),
            ValidationError::AddressFieldRequired { field: "Zip" }
        );
        assert_eq!(
            Address::new("Street 1", 1, "Zipcode 1", "").unwrap_err(),
            ValidationError::AddressFieldRequired { field: "City" }
        );
    }

    #[test]
    fn deserialize_validates_fields() {
        let address: Address = serde_json::from_str(
            r#"{"street":"Street 1","number":1,"zip":"Zipcode 1","city":"City 1"}"#,
        )
        .unwrap();
        assert_eq!(address.city(), "City 1");

        let err = serde_json::from_str::<Address>(
            r#"{"street":"","number":1,"zip":"Zipcode 1","city":"City 1"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Street is required"));
    }
}
