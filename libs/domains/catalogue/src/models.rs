use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalogue item entity - a single menu entry belonging to one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogueItem {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    /// Owning provider, immutable after creation
    pub provider_id: i64,
    /// Item name (must be unique within one provider, exact match)
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Price in minor currency units (cents)
    #[serde(default)]
    pub price: i64,
    /// Additional descriptive fields, passed through opaquely
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new catalogue item
///
/// `name` defaults to the empty string when omitted so that validation, not
/// deserialization, reports the violation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewCatalogueItem {
    pub provider_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Full-replacement payload for an existing catalogue item.
///
/// Fields omitted from the request body fall back to their defaults and
/// overwrite the stored values (full replace, not merge). The owning
/// provider is immutable and is not part of the payload. `id` defaults to 0
/// when omitted so the identifier check reports the mismatch.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CatalogueItemUpdate {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl CatalogueItem {
    /// Create a new catalogue item from a store-assigned id and a create DTO
    pub fn new(id: i64, input: NewCatalogueItem) -> Self {
        let now = Utc::now();
        Self {
            id,
            provider_id: input.provider_id,
            name: input.name,
            description: input.description,
            price: input.price,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every client-settable field with the values of `update`.
    ///
    /// Identifier, owning provider and creation timestamp are preserved.
    pub fn apply_replace(&mut self, update: CatalogueItemUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.metadata = update.metadata;
        self.updated_at = Utc::now();
    }
}
