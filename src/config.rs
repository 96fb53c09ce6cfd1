use std::collections::HashMap;

use mac_address::MacAddress;
use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub query: Option<QueryConfig>,
    pub devices: Option<Vec<KnownDevice>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub url: String,
    pub encoding: Option<Encoding>,
    /// Absent means no timeout: a hanging request holds up the queue.
    pub timeout_seconds: Option<u64>,
    /// Static auth/cookie headers, sent verbatim on every request.
    pub headers: Option<HashMap<String, String>>,
    /// Literal URL query parameters appended to every request.
    pub params: Option<HashMap<String, String>>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Form,
    Json,
}

/// Overrides for the templated query. The MAC field defaults to
/// `search_nomiface_netobj_name` in form mode and `macAddress` in JSON
/// mode; the detail label defaults to `nomiface_folder_nameLabel`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct QueryConfig {
    pub mac_field: Option<String>,
    /// When set, the MAC is also sent as this URL query parameter.
    pub mac_param: Option<String>,
    pub detail_label: Option<String>,
    /// Extra JSON-mode body fields; empty values are dropped.
    pub json_fields: Option<HashMap<String, String>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct KnownDevice {
    pub address: MacAddress,
    pub name: String,
}
