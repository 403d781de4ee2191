use serde::Deserialize;

use crate::error::{StoreError, StoreResult};
use crate::models::{Customer, PaymentMethod};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer: Customer,
    pub payment_method: PaymentMethod,
}

impl CheckoutRequest {
    /// Required-field check done by the checkout form before submitting;
    /// the store itself accepts whatever it is given.
    pub fn validate(&self) -> StoreResult<()> {
        let required = [
            ("fullName", &self.customer.full_name),
            ("phone", &self.customer.phone),
            ("address", &self.customer.address),
            ("city", &self.customer.city),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(StoreError::BadRequest(format!("{field} is required")));
            }
        }
        Ok(())
    }
}
