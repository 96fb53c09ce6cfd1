//! Assembles the ordered MAC list from CLI arguments, an optional list
//! file, and the configured device inventory.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context as _, bail};
use log::warn;
use mac_address::MacAddress;

use crate::config::AppConfig;
use crate::messages::MacEntry;

pub fn assemble(
    arg_macs: &[String],
    input: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<Vec<MacEntry>> {
    let mut macs: Vec<String> = arg_macs.to_vec();
    if let Some(path) = input {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading MAC list {}", path.display()))?;
        macs.extend(parse_list(&contents));
    }

    let mut macs = dedupe(macs);
    if macs.is_empty() {
        if let Some(devices) = &config.devices {
            macs = devices
                .iter()
                .map(|device| MacEntry {
                    address: device.address.to_string(),
                    name: Some(device.name.clone()),
                })
                .collect();
        }
    }
    if macs.is_empty() {
        bail!("no MAC addresses given (arguments, --input, or [[devices]] in the config)");
    }

    // The server is the source of truth for what counts as a MAC; a parse
    // failure only warns and the literal string is still sent.
    for entry in &macs {
        if entry.address.parse::<MacAddress>().is_err() {
            warn!(
                "{} does not look like a MAC address, sending it as-is",
                entry.address
            );
        }
    }
    Ok(macs)
}

/// One address per line; blank lines and `#` comments are skipped.
fn parse_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Drops repeated addresses, keeping the first occurrence in order.
fn dedupe(macs: Vec<String>) -> Vec<MacEntry> {
    let mut seen = HashSet::new();
    macs.into_iter()
        .filter(|mac| seen.insert(mac.clone()))
        .map(|mac| MacEntry::new(&mac))
        .collect()
}
