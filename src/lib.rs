// src/lib.rs

pub mod bill;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod voice;

pub use crate::bill::{Bill, confirmation};
pub use crate::catalog::{BaseUnit, Catalog, CatalogTables, ProductEntry, Unit};
pub use crate::error::{BillingError, CatalogError};
pub use crate::pricing::{ParsedLineItem, manual_entry};
pub use crate::voice::VoiceOrderParser;
