use crate::commands::{CmdMessage, CmdResult};
use crate::customers::{CustomerId, CustomerPatch, CustomerRegistry, NewAddress, NewCustomer};
use crate::error::{CatalogError, Result};

/// Register a customer. Emails are unique, compared without case.
pub fn create(registry: &mut CustomerRegistry, customer: NewCustomer) -> Result<CmdResult> {
    customer.validate()?;
    if registry.find_by_email(&customer.email).is_some() {
        return Err(CatalogError::Validation(format!(
            "email already registered: {}",
            customer.email.trim()
        )));
    }

    let id = registry.add(customer);
    let mut result = CmdResult::default();
    let created: Vec<_> = registry.get(&id).into_iter().collect();
    if let Some(customer) = created.first() {
        result.add_message(CmdMessage::success(format!(
            "Customer created ({}): {}",
            id,
            customer.full_name()
        )));
    }
    Ok(result.with_customers(created))
}

/// An unknown id is reported as a warning, not an error.
pub fn update(
    registry: &mut CustomerRegistry,
    id: &CustomerId,
    patch: CustomerPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update"));
        return Ok(result);
    }
    patch.validate()?;

    if !registry.update(id, patch) {
        result.add_message(CmdMessage::warning(format!("Customer not found: {}", id)));
        return Ok(result);
    }

    let updated: Vec<_> = registry.get(id).into_iter().collect();
    result.add_message(CmdMessage::success(format!("Customer updated: {}", id)));
    Ok(result.with_customers(updated))
}

pub fn delete(registry: &mut CustomerRegistry, ids: &[CustomerId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut deleted = Vec::new();

    for id in ids {
        let Some(customer) = registry.get(id) else {
            result.add_message(CmdMessage::warning(format!("Customer not found: {}", id)));
            continue;
        };
        if registry.remove(id) {
            result.add_message(CmdMessage::success(format!(
                "Customer deleted ({}): {}",
                id,
                customer.full_name()
            )));
            deleted.push(customer);
        }
    }

    Ok(result.with_customers(deleted))
}

/// One customer with their addresses, as in the admin detail dialog.
pub fn view(registry: &CustomerRegistry, id: &CustomerId) -> Result<CmdResult> {
    let customer = registry
        .get(id)
        .ok_or_else(|| CatalogError::CustomerNotFound(id.clone()))?;
    Ok(CmdResult::default()
        .with_customers(vec![customer])
        .with_addresses(registry.addresses(id)))
}

/// All customers, optionally narrowed by the admin search box.
pub fn list(registry: &CustomerRegistry, search: Option<&str>) -> Result<CmdResult> {
    let term = search.unwrap_or_default();
    let customers: Vec<_> = registry
        .list()
        .into_iter()
        .filter(|c| c.matches(term))
        .collect();

    let mut result = CmdResult::default();
    if customers.is_empty() && !term.trim().is_empty() {
        result.add_message(CmdMessage::info(format!("No customers match: {}", term)));
    }
    Ok(result.with_customers(customers))
}

pub fn add_address(
    registry: &mut CustomerRegistry,
    id: &CustomerId,
    address: NewAddress,
) -> Result<CmdResult> {
    address.validate()?;
    let address = registry
        .add_address(id, address)
        .ok_or_else(|| CatalogError::CustomerNotFound(id.clone()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Address added ({}) for {}",
        address.id, id
    )));
    Ok(result.with_addresses(vec![address]))
}

pub fn remove_address(
    registry: &mut CustomerRegistry,
    id: &CustomerId,
    address_id: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if registry.remove_address(id, address_id) {
        result.add_message(CmdMessage::success(format!("Address removed: {}", address_id)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Address not found: {}",
            address_id
        )));
    }
    Ok(result.with_addresses(registry.addresses(id)))
}
