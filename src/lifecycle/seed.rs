//! Seed configuration: the fixed identities and products installed at
//! process start.
//!
//! The built-in [`SeedData::default`] mirrors the credential set and demo
//! inventory the system ships with; deployments can swap it for a JSON file
//! via [`SeedData::load`]. Products and transactions are not persisted, so
//! this is the whole initial state of the ledger.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::io;
use std::path::Path;

use crate::model::Role;

/// Initial state for both actors.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub products: Vec<SeedProduct>,
}

/// One pre-provisioned account.
#[derive(Clone, Deserialize)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// Hand-written so seed passwords never reach the debug logs.
impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// One pre-provisioned product.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            users: vec![
                SeedUser {
                    name: "Administrador".to_string(),
                    email: "admin@wms.com".to_string(),
                    password: "admin123".to_string(),
                    role: Role::Admin,
                    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                },
                SeedUser {
                    name: "João Operador".to_string(),
                    email: "operador@wms.com".to_string(),
                    password: "op123".to_string(),
                    role: Role::Operator,
                    created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
                },
            ],
            products: vec![
                SeedProduct {
                    name: "Notebook Dell".to_string(),
                    price: 2500.0,
                    quantity: 10,
                },
                SeedProduct {
                    name: "Mouse Logitech".to_string(),
                    price: 85.5,
                    quantity: 25,
                },
                SeedProduct {
                    name: "Teclado Mecânico".to_string(),
                    price: 350.0,
                    quantity: 8,
                },
            ],
        }
    }
}

impl SeedData {
    /// Loads a seed set from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        serde_json::from_slice(&bytes).map_err(io::Error::other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_contents() {
        let seed = SeedData::default();
        assert_eq!(seed.users.len(), 2);
        assert_eq!(seed.products.len(), 3);
        assert_eq!(seed.users[0].role, Role::Admin);
        assert_eq!(seed.users[1].role, Role::Operator);
        assert_eq!(seed.products[1].name, "Mouse Logitech");
    }

    #[test]
    fn test_seed_parses_from_json() {
        let json = r#"{
            "users": [
                {
                    "name": "Ana",
                    "email": "ana@wms.com",
                    "password": "secret99",
                    "role": "operator",
                    "created_at": "2024-03-01T00:00:00Z"
                }
            ],
            "products": [
                { "name": "Monitor 4K", "price": 1800.0, "quantity": 4 }
            ]
        }"#;
        let seed: SeedData = serde_json::from_str(json).unwrap();
        assert_eq!(seed.users[0].role, Role::Operator);
        assert_eq!(seed.products[0].quantity, 4);
    }

    #[tokio::test]
    async fn test_seed_loads_from_file() {
        let path = std::env::temp_dir().join(format!("wms-seed-{}.json", std::process::id()));
        let json = r#"{
            "users": [],
            "products": [
                { "name": "Monitor 4K", "price": 1800.0, "quantity": 4 }
            ]
        }"#;
        tokio::fs::write(&path, json).await.unwrap();

        let seed = SeedData::load(&path).await.unwrap();
        assert!(seed.users.is_empty());
        assert_eq!(seed.products[0].name, "Monitor 4K");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[test]
    fn test_seed_user_debug_redacts_password() {
        let seed = SeedData::default();
        let rendered = format!("{:?}", seed.users[0]);
        assert!(!rendered.contains("admin123"));
    }
}
