use serde::{Deserialize, Serialize};
use stayvista_core::serde::deserialize_optional_lenient_f64;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PaymentIntentRequest {
    /// Amount in major currency units, e.g. `120.5`.
    #[serde(default, deserialize_with = "deserialize_optional_lenient_f64")]
    pub price: Option<f64>,
}

impl PaymentIntentRequest {
    /// Amount in minor units (`round(price * 100)`), or `None` when missing,
    /// non-finite, or below one minor unit.
    pub fn minor_units(&self) -> Option<u64> {
        let price = self.price.filter(|p| p.is_finite())?;
        let cents = (price * 100.0).round();
        if cents < 1.0 || cents > u64::MAX as f64 {
            return None;
        }
        Some(cents as u64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
