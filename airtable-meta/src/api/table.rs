//! Table handle.

use reqwest::Method;

use super::ContextRef;
use crate::error::Result;
use crate::types::wire;
use crate::types::{FieldSchema, NewField, TableSchema};

/// Handle to a single table, addressed by id or name.
///
/// Airtable accepts either in table URLs, so the handle does not resolve
/// names eagerly; [`Table::schema`] does a lookup in the owning base's
/// schema.
pub struct Table {
    ctx: ContextRef,
    base_id: String,
    id_or_name: String,
}

impl Table {
    pub(crate) fn new(ctx: ContextRef, base_id: String, id_or_name: String) -> Self {
        Self {
            ctx,
            base_id,
            id_or_name,
        }
    }

    /// Id of the base owning this table.
    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    /// The id or name this handle addresses the table by.
    pub fn id_or_name(&self) -> &str {
        &self.id_or_name
    }

    /// Fetches this table's schema.
    ///
    /// The metadata API has no single-table read, so this fetches the base
    /// schema and selects this table from it; the miss behavior is that of
    /// [`BaseSchema::table`](crate::types::BaseSchema::table).
    pub async fn schema(&self) -> Result<TableSchema> {
        let url = self.ctx.endpoints.base_tables(&self.base_id);
        let resp = self.ctx.transport.request(Method::GET, &url, None).await?;
        let resp: wire::table::TablesResponse = serde_json::from_value(resp)?;

        let wire_table = resp
            .tables
            .into_iter()
            .find(|t| t.id == self.id_or_name || t.name == self.id_or_name)
            .ok_or_else(|| {
                crate::Error::new(
                    crate::ErrorKind::NotFound,
                    format!(
                        "no table named or with id {:?} in base {}",
                        self.id_or_name, self.base_id
                    ),
                )
            })?;
        TableSchema::from_wire(self.ctx.clone(), &self.base_id, wire_table)
    }

    /// Creates a field on this table and returns its schema with the
    /// server-assigned id.
    pub async fn create_field(&self, field: NewField) -> Result<FieldSchema> {
        let url = self
            .ctx
            .endpoints
            .table_fields(&self.base_id, &self.id_or_name);
        let payload = serde_json::to_value(&field)?;
        let resp = self
            .ctx
            .transport
            .request(Method::POST, &url, Some(&payload))
            .await?;
        let resp: wire::field::Field = serde_json::from_value(resp)?;

        log::info!(
            "Created field {} on table {} in base {}",
            resp.id,
            self.id_or_name,
            self.base_id
        );
        FieldSchema::from_wire(self.ctx.clone(), &self.base_id, &self.id_or_name, resp)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::Api;
    use crate::transport::testing::MockTransport;
    use crate::transport::TransportRef;
    use crate::ErrorKind;

    fn api(mock: &Arc<MockTransport>) -> Api {
        Api::with_transport(mock.clone() as TransportRef)
    }

    fn tables_response() -> serde_json::Value {
        json!({
            "tables": [{
                "id": "tbltp8DGLhqbUmjK1",
                "name": "Apartments",
                "fields": [
                    { "id": "fld1VnoyuotSTyxW1", "name": "Name", "type": "singleLineText" }
                ],
                "views": []
            }]
        })
    }

    #[tokio::test]
    async fn test_schema_selects_by_name() {
        let mock = MockTransport::new();
        mock.push_ok(tables_response());

        let table = api(&mock).base("appLkNDICXNqxSDhG").table("Apartments");
        let schema = table.schema().await.unwrap();
        assert_eq!(schema.id(), "tbltp8DGLhqbUmjK1");
        assert_eq!(schema.name(), "Apartments");
    }

    #[tokio::test]
    async fn test_schema_miss_is_not_found() {
        let mock = MockTransport::new();
        mock.push_ok(tables_response());

        let table = api(&mock).base("appLkNDICXNqxSDhG").table("DoesNotExist");
        let err = table.schema().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_create_field_payload() {
        let mock = MockTransport::new();
        mock.push_ok(json!({
            "id": "fldStatus12345678",
            "name": "Status",
            "type": "singleSelect",
            "options": { "choices": [{ "name": "Todo" }, { "name": "Done" }] }
        }));

        let table = api(&mock)
            .base("appLkNDICXNqxSDhG")
            .table("tbltp8DGLhqbUmjK1");
        let field = table
            .create_field(
                NewField::new("Status", "singleSelect")
                    .with_options(json!({ "choices": [{ "name": "Todo" }, { "name": "Done" }] })),
            )
            .await
            .unwrap();
        assert_eq!(field.id(), "fldStatus12345678");
        assert_eq!(field.table_id(), "tbltp8DGLhqbUmjK1");

        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(
            requests[0].url,
            "https://api.airtable.com/v0/meta/bases/appLkNDICXNqxSDhG/tables/tbltp8DGLhqbUmjK1/fields"
        );
        assert_eq!(
            requests[0].body,
            Some(json!({
                "name": "Status",
                "type": "singleSelect",
                "options": { "choices": [{ "name": "Todo" }, { "name": "Done" }] }
            }))
        );
    }
}
