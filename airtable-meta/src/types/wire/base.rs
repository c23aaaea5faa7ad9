use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct Base {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) permission_level: Option<String>,
}

/// Response of `GET meta/bases`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct ListBasesResponse {
    pub(crate) bases: Vec<Base>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) offset: Option<String>,
}

/// Response of `POST meta/bases`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CreateBaseResponse {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) tables: Vec<super::table::Table>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_bases() {
        let content = r#"
{
    "bases": [
        {
            "id": "appLkNDICXNqxSDhG",
            "name": "Apartment Hunting",
            "permissionLevel": "create"
        },
        {
            "id": "appSW9R5uCNmRmfl6",
            "name": "Project Tracker",
            "permissionLevel": "edit"
        }
    ]
}
        "#;

        let v: ListBasesResponse = serde_json::from_str(content).unwrap();
        assert_eq!(v.bases.len(), 2);
        assert_eq!(
            v.bases[0],
            Base {
                id: "appLkNDICXNqxSDhG".to_string(),
                name: "Apartment Hunting".to_string(),
                permission_level: Some("create".to_string()),
            }
        );
        assert!(v.offset.is_none());
    }

    #[test]
    fn test_parse_base_rejects_missing_name() {
        let content = r#"{"id": "appLkNDICXNqxSDhG"}"#;
        assert!(serde_json::from_str::<Base>(content).is_err());
    }
}
