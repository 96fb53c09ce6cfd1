//! Outbound payload templates for the NAC list endpoint.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::config::QueryConfig;

pub const DEFAULT_MAC_FIELD: &str = "search_nomiface_netobj_name";
pub const DEFAULT_JSON_MAC_FIELD: &str = "macAddress";
pub const DEFAULT_DETAIL_LABEL: &str = "nomiface_folder_nameLabel";

/// Fixed fields the list endpoint expects on every form query. All search
/// filters stay empty except the one carrying the MAC under test.
const FORM_TEMPLATE: &[(&str, &str)] = &[
    ("h", "nom/list/index&page=mod_nom_iface_list"),
    ("page", "mod_nom_iface_list"),
    ("section", "nom"),
    ("list", "index"),
    ("search_nomiface_fullname", ""),
    ("search_nomiface_main", ""),
    ("search_nomiface_ip_addr", ""),
    ("search_nomiface_ip6_addr", ""),
    ("search_nomiface_folder_name", ""),
    ("search_nomiface_netobj_name", ""),
    ("search_nomiface_main_mac", ""),
    ("search_connected_port_nonmetobj_name", ""),
    ("search_connected_port_name", ""),
    ("search_nomiface_name", ""),
    ("record_offset", "0"),
    ("order_column", "nomiface_fullname"),
    ("order_dir", "ASC"),
];

/// Form-mode body: the full template with the MAC bound to its one field.
pub fn form_fields(mac: &str, query: &QueryConfig) -> Vec<(String, String)> {
    let mac_field = query.mac_field.as_deref().unwrap_or(DEFAULT_MAC_FIELD);
    let mut fields = Vec::with_capacity(FORM_TEMPLATE.len() + 1);
    let mut bound = false;
    for (key, fixed) in FORM_TEMPLATE {
        if *key == mac_field {
            fields.push((key.to_string(), mac.to_string()));
            bound = true;
        } else {
            fields.push((key.to_string(), fixed.to_string()));
        }
    }
    // An override that names a field outside the stock template still sends it.
    if !bound {
        fields.push((mac_field.to_string(), mac.to_string()));
    }
    fields
}

/// JSON-mode body: the MAC field plus the configured pairs, with empty
/// values dropped rather than sent as `""`.
pub fn json_body(mac: &str, query: &QueryConfig) -> Value {
    let mac_field = query.mac_field.as_deref().unwrap_or(DEFAULT_JSON_MAC_FIELD);
    let mut body = Map::new();
    body.insert(mac_field.to_string(), Value::String(mac.to_string()));
    if let Some(fields) = &query.json_fields {
        for (key, value) in fields {
            if !value.is_empty() {
                body.insert(key.clone(), Value::String(value.clone()));
            }
        }
    }
    Value::Object(body)
}

/// URL query parameters: the configured literal parameters (stable order)
/// plus, when `mac_param` is set, the MAC itself.
pub fn url_params(
    mac: &str,
    fixed: Option<&HashMap<String, String>>,
    query: &QueryConfig,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = fixed
        .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();
    params.sort();
    if let Some(mac_param) = &query.mac_param {
        params.push((mac_param.clone(), mac.to_string()));
    }
    params
}
