//! Barber service catalog entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable offering (haircut, shave, ...) with a fixed price and
/// duration. Reference data from a booking's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarberService {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Catalog entry returned to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberServiceResponse {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = "Classic haircut")]
    pub name: String,
    #[schema(value_type = f64, example = 25.0)]
    pub price: Decimal,
    /// Duration in minutes
    #[schema(example = 30)]
    pub duration: i32,
    pub created_at: DateTime<Utc>,
}

impl From<BarberService> for BarberServiceResponse {
    fn from(service: BarberService) -> Self {
        Self {
            id: service.id,
            name: service.name,
            price: service.price,
            duration: service.duration_minutes,
            created_at: service.created_at,
        }
    }
}
