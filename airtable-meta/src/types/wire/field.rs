use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct Field {
    pub(crate) id: String,
    pub(crate) name: String,
    /// Field type, e.g. `singleLineText` or `multipleRecordLinks`.
    #[serde(rename = "type")]
    pub(crate) field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    /// Type-specific options. Kept opaque: their shape differs per field
    /// type and this library never interprets them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) options: Option<Value>,
}
