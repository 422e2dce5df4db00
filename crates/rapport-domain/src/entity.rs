//! Entity module - read-only records produced by the upstream extractor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an entity based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for temporal queries
/// - 128-bit uniqueness
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u128);

impl EntityId {
    /// Generate a new UUIDv7-based EntityId
    ///
    /// # Examples
    ///
    /// ```
    /// use rapport_domain::EntityId;
    ///
    /// let id = EntityId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an EntityId from a raw u128 value
    ///
    /// This is primarily for callers deserializing upstream records.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an EntityId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Kind of entity recognized by the upstream extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// A company, institution, or other organization
    Organization,
    /// An individual person
    Person,
    /// A product or service
    Product,
    /// A geographic location
    Location,
    /// A monetary amount
    Money,
    /// A date or date range
    Date,
    /// A law, regulation, or legal instrument
    Law,
    /// A named occurrence (launch, merger, incident)
    Event,
}

impl EntityType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Organization => "organization",
            EntityType::Person => "person",
            EntityType::Product => "product",
            EntityType::Location => "location",
            EntityType::Money => "money",
            EntityType::Date => "date",
            EntityType::Law => "law",
            EntityType::Event => "event",
        }
    }

    /// Parse an entity type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "organization" => Some(EntityType::Organization),
            "person" => Some(EntityType::Person),
            "product" => Some(EntityType::Product),
            "location" => Some(EntityType::Location),
            "money" => Some(EntityType::Money),
            "date" => Some(EntityType::Date),
            "law" => Some(EntityType::Law),
            "event" => Some(EntityType::Event),
            _ => None,
        }
    }
}

/// An entity extracted upstream
///
/// Immutable once created by the extractor; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier
    pub id: EntityId,

    /// Kind of entity
    pub entity_type: EntityType,

    /// Display text as extracted from the source
    pub text: String,
}

impl Entity {
    /// Create a new entity
    pub fn new(id: EntityId, entity_type: EntityType, text: impl Into<String>) -> Self {
        Self {
            id,
            entity_type,
            text: text.into(),
        }
    }
}
