//! airtable-meta is a client library for the schema and metadata surface of
//! the [Airtable REST API](https://airtable.com/developers/web/api).
//!
//! It covers listing bases, reading base and table schema, renaming tables
//! and fields through a mutate-then-[`save`](types::TableSchema::save)
//! protocol, creating bases/tables/fields, and the enterprise-only
//! organizational reads (collaborators, shares, workspace and enterprise
//! account info).
//!
//! ```no_run
//! # async fn run() -> airtable_meta::Result<()> {
//! use airtable_meta::api::{Api, ApiConfig};
//!
//! let api = Api::new(ApiConfig::new("patXXX.secret"))?;
//! let base = api.base("appLkNDICXNqxSDhG");
//! let mut schema = base.schema().await?;
//! let table = schema.table_mut("Apartments")?;
//! table.set_name("Flats");
//! table.save().await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![deny(missing_docs)]

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

pub mod api;
pub mod transport;
pub mod types;
