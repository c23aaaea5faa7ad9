use serde::{Deserialize, Serialize};

use super::{field::Field, view::View};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Table {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) primary_field_id: Option<String>,
    pub(crate) fields: Vec<Field>,
    pub(crate) views: Vec<View>,
}

/// Response of `GET meta/bases/{baseId}/tables`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct TablesResponse {
    pub(crate) tables: Vec<Table>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tables_response() {
        let content = r#"
{
    "tables": [
        {
            "id": "tbltp8DGLhqbUmjK1",
            "name": "Apartments",
            "description": "Places we might rent",
            "primaryFieldId": "fld1VnoyuotSTyxW1",
            "fields": [
                {
                    "id": "fld1VnoyuotSTyxW1",
                    "name": "Name",
                    "type": "singleLineText"
                },
                {
                    "id": "fldoaIqdn5szURHpw",
                    "name": "Pictures",
                    "type": "multipleAttachments",
                    "options": { "isReversed": false }
                }
            ],
            "views": [
                {
                    "id": "viwQpsuEDqHNmxRbW",
                    "name": "Main View",
                    "type": "grid"
                }
            ]
        }
    ]
}
        "#;

        let v: TablesResponse = serde_json::from_str(content).unwrap();
        assert_eq!(v.tables.len(), 1);
        let table = &v.tables[0];
        assert_eq!(table.id, "tbltp8DGLhqbUmjK1");
        assert_eq!(table.description.as_deref(), Some("Places we might rent"));
        assert_eq!(table.fields.len(), 2);
        assert_eq!(table.fields[1].field_type, "multipleAttachments");
        assert_eq!(table.views[0].view_type, "grid");
    }

    #[test]
    fn test_parse_table_rejects_missing_fields() {
        // A table document without its field list is not a schema we can
        // work with.
        let content = r#"
{
    "id": "tbltp8DGLhqbUmjK1",
    "name": "Apartments",
    "views": []
}
        "#;
        assert!(serde_json::from_str::<Table>(content).is_err());
    }
}
