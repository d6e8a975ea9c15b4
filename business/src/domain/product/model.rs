use bigdecimal::BigDecimal;
use uuid::Uuid;

/// A catalog product. Field rules (non-blank name/description, unit price
/// and quantity floors) are enforced by the create validator before any
/// instance reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
}

impl Product {
    /// Derived price for the whole quantity. Never stored; response shapes
    /// call this at construction time.
    pub fn total_price(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}
