use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One line of the subject index: a named exam subject and the storage path
/// (relative to the storage root) of its question table.
///
/// Deserialized from the index file's `Subject` / `DataFile` columns and
/// serialized to clients as `{"subject": ..., "dataFile": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEntry {
    #[serde(alias = "Subject")]
    pub subject: String,
    #[serde(alias = "DataFile")]
    pub data_file: String,
}
