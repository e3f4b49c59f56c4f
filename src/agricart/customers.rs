//! Customer accounts as the shop's admin sees them: contact details plus any
//! number of postal addresses per customer.
//!
//! Sign-in is not modeled. A customer here is a record, not a session.

use crate::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on name, email or id, as in the admin search box.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.full_name().to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.id.as_str().to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<()> {
        require("first name", &self.first_name)?;
        require("last name", &self.last_name)?;
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.phone.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(first_name) = &self.first_name {
            require("first name", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            require("last name", last_name)?;
        }
        Ok(())
    }

    /// An empty `phone` clears the stored number.
    fn apply(self, customer: &mut Customer) {
        if let Some(first_name) = self.first_name {
            customer.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            customer.last_name = last_name;
        }
        if let Some(phone) = self.phone {
            customer.phone = Some(phone).filter(|p| !p.trim().is_empty());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
    pub id: String,
    pub customer_id: CustomerId,
    #[serde(flatten)]
    pub address: NewAddress,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub is_default: bool,
}

impl NewAddress {
    pub fn validate(&self) -> Result<()> {
        require("address", &self.address_line1)?;
        require("city", &self.city)?;
        require("postal code", &self.postal_code)?;
        require("country", &self.country)
    }
}

/// Session-scoped customer records. Same contract as the catalog store: lookups
/// return `Option`, mutations on an unknown id return `false`.
#[derive(Debug, Default, Clone)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
    addresses: Vec<CustomerAddress>,
    last_stamp: i64,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn add(&mut self, customer: NewCustomer) -> CustomerId {
        let id = CustomerId::new(format!("customer-{}", self.next_stamp()));
        let now = Utc::now();
        info!(id = %id, "customer added");
        self.customers.push(Customer {
            id: id.clone(),
            email: customer.email.trim().to_string(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            phone: customer.phone.filter(|p| !p.trim().is_empty()),
            is_admin: false,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn update(&mut self, id: &CustomerId, patch: CustomerPatch) -> bool {
        match self.customers.iter_mut().find(|c| &c.id == id) {
            Some(customer) => {
                patch.apply(customer);
                customer.updated_at = Utc::now();
                info!(id = %id, "customer updated");
                true
            }
            None => {
                debug!(id = %id, "update skipped, customer not found");
                false
            }
        }
    }

    /// Remove a customer together with their addresses.
    pub fn remove(&mut self, id: &CustomerId) -> bool {
        let before = self.customers.len();
        self.customers.retain(|c| &c.id != id);
        let removed = self.customers.len() != before;
        if removed {
            self.addresses.retain(|a| &a.customer_id != id);
            info!(id = %id, "customer removed");
        }
        removed
    }

    pub fn get(&self, id: &CustomerId) -> Option<Customer> {
        self.customers.iter().find(|c| &c.id == id).cloned()
    }

    pub fn list(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    pub fn find_by_email(&self, email: &str) -> Option<Customer> {
        let email = email.trim();
        self.customers
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Attach an address. Returns `None` when the customer is unknown.
    ///
    /// A customer's first address is always their default; a later address
    /// flagged `is_default` takes the flag over from the previous one.
    pub fn add_address(
        &mut self,
        id: &CustomerId,
        mut address: NewAddress,
    ) -> Option<CustomerAddress> {
        if !self.customers.iter().any(|c| &c.id == id) {
            debug!(id = %id, "address skipped, customer not found");
            return None;
        }

        let first = !self.addresses.iter().any(|a| &a.customer_id == id);
        address.is_default |= first;
        if address.is_default {
            for other in self.addresses.iter_mut().filter(|a| &a.customer_id == id) {
                other.address.is_default = false;
            }
        }

        let created = CustomerAddress {
            id: format!("address-{}", self.next_stamp()),
            customer_id: id.clone(),
            address,
        };
        info!(id = %id, address = %created.id, "address added");
        self.addresses.push(created.clone());
        Some(created)
    }

    pub fn addresses(&self, id: &CustomerId) -> Vec<CustomerAddress> {
        self.addresses
            .iter()
            .filter(|a| &a.customer_id == id)
            .cloned()
            .collect()
    }

    /// Drop one address. If it was the default, the oldest remaining one inherits the flag.
    pub fn remove_address(&mut self, id: &CustomerId, address_id: &str) -> bool {
        let Some(pos) = self
            .addresses
            .iter()
            .position(|a| &a.customer_id == id && a.id == address_id)
        else {
            return false;
        };

        let removed = self.addresses.remove(pos);
        if removed.address.is_default {
            if let Some(next) = self.addresses.iter_mut().find(|a| &a.customer_id == id) {
                next.address.is_default = true;
            }
        }
        info!(id = %id, address = %address_id, "address removed");
        true
    }

    /// Millisecond stamp, bumped past the previous one so ids never repeat.
    fn next_stamp(&mut self) -> i64 {
        let stamp = Utc::now().timestamp_millis().max(self.last_stamp + 1);
        self.last_stamp = stamp;
        stamp
    }
}

fn require(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!("{} is required", label)));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let valid = match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    };
    if !valid {
        return Err(CatalogError::Validation(format!(
            "invalid email address: {}",
            email
        )));
    }
    Ok(())
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn new_customer(first_name: &str, email: &str) -> NewCustomer {
        NewCustomer {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: "Souza".to_string(),
            phone: None,
        }
    }

    pub fn new_address(line: &str) -> NewAddress {
        NewAddress {
            address_line1: line.to_string(),
            address_line2: None,
            city: "Campinas".to_string(),
            state: "SP".to_string(),
            postal_code: "13000-000".to_string(),
            country: "BR".to_string(),
            is_default: false,
        }
    }
}
