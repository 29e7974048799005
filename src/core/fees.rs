use crate::core::registry::Registry;
use crate::domain::model::Category;
use crate::utils::error::{MarinaError, Result};

/// Monthly charge per foot of boat length.
pub fn monthly_rate(category: Category) -> f64 {
    match category {
        Category::Slip => 12.50,
        Category::Land => 14.00,
        Category::Trailer => 25.00,
        Category::Storage => 11.20,
    }
}

/// Charges every boat one month. Each call is another month.
pub fn apply_monthly_fees(registry: &mut Registry) {
    for boat in registry.iter_mut() {
        let fee = monthly_rate(boat.category()) * boat.length();
        boat.charge(fee);
    }
    tracing::info!("Applied monthly fees to {} boats", registry.len());
}

/// Applies a payment and returns the remaining balance.
pub fn accept_payment(registry: &mut Registry, name: &str, amount: f64) -> Result<f64> {
    let boat = registry.find_mut(name).ok_or_else(|| MarinaError::NotFound {
        name: name.to_string(),
    })?;

    if amount > boat.balance() {
        return Err(MarinaError::PaymentExceedsBalance {
            name: boat.name().to_string(),
            amount,
            owed: boat.balance(),
        });
    }

    boat.credit(amount);
    tracing::debug!(
        "Accepted payment of {:.2} from '{}', balance now {:.2}",
        amount,
        boat.name(),
        boat.balance()
    );
    Ok(boat.balance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Boat, Location};

    fn registry_with(boat: Boat) -> Registry {
        let mut registry = Registry::new();
        registry.insert(boat).unwrap();
        registry
    }

    #[test]
    fn test_trailer_month_for_twenty_feet() {
        let mut registry = registry_with(Boat::new("Tow", 20.0, Location::trailer("T-9"), 0.0));
        apply_monthly_fees(&mut registry);
        assert!((registry.find("tow").unwrap().balance() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_fees_accumulate_per_call() {
        let mut registry = registry_with(Boat::new("Dock", 30.0, Location::Slip(4), 10.0));
        apply_monthly_fees(&mut registry);
        apply_monthly_fees(&mut registry);
        let expected = 10.0 + 2.0 * 12.50 * 30.0;
        assert!((registry.find("Dock").unwrap().balance() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_each_category_uses_its_rate() {
        let mut registry = Registry::new();
        registry.insert(Boat::new("a", 10.0, Location::Slip(1), 0.0)).unwrap();
        registry.insert(Boat::new("b", 10.0, Location::Land('C'), 0.0)).unwrap();
        registry.insert(Boat::new("c", 10.0, Location::trailer("X"), 0.0)).unwrap();
        registry.insert(Boat::new("d", 10.0, Location::Storage(3), 0.0)).unwrap();
        apply_monthly_fees(&mut registry);

        let balances: Vec<f64> = registry.iter().map(|b| b.balance()).collect();
        for (got, want) in balances.iter().zip([125.0, 140.0, 250.0, 112.0]) {
            assert!((got - want).abs() < 1e-9, "got {} want {}", got, want);
        }
    }

    #[test]
    fn test_payment_equal_to_balance_clears_it() {
        let mut registry = registry_with(Boat::new("Rascal", 23.0, Location::Slip(0), 500.0));
        let remaining = accept_payment(&mut registry, "rascal", 500.0).unwrap();
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn test_overpayment_is_rejected_without_change() {
        let mut registry = registry_with(Boat::new("Rascal", 23.0, Location::Slip(0), 500.0));
        let err = accept_payment(&mut registry, "Rascal", 500.01).unwrap_err();
        assert!(matches!(err, MarinaError::PaymentExceedsBalance { .. }));
        assert_eq!(registry.find("Rascal").unwrap().balance(), 500.0);
    }

    #[test]
    fn test_payment_for_unknown_boat() {
        let mut registry = Registry::new();
        let err = accept_payment(&mut registry, "Ghost", 1.0).unwrap_err();
        assert!(matches!(err, MarinaError::NotFound { .. }));
    }
}
