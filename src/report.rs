//! Partitions check results and writes the optional report files,
//! mirroring the found / missing split on disk.

use std::path::Path;

use anyhow::Context as _;

use crate::messages::{CheckResult, MacEntry};

#[derive(Debug, Default)]
pub struct Summary {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub errors: Vec<(String, String)>,
}

pub fn summarize(entries: &[MacEntry], results: &[CheckResult]) -> Summary {
    let mut summary = Summary::default();
    for (entry, result) in entries.iter().zip(results) {
        match result {
            CheckResult::Found(_) => summary.found.push(entry.address.clone()),
            CheckResult::NotFound => summary.missing.push(entry.address.clone()),
            CheckResult::RequestError(reason) => {
                summary.errors.push((entry.address.clone(), reason.clone()))
            }
        }
    }
    summary
}

/// Writes `found.txt`, `missing.txt` (one MAC per line) and a combined
/// `report.txt` into `dir`, creating it if needed.
pub fn write_files(summary: &Summary, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating report directory {}", dir.display()))?;
    std::fs::write(dir.join("found.txt"), join_lines(&summary.found))?;
    std::fs::write(dir.join("missing.txt"), join_lines(&summary.missing))?;

    let mut lines = Vec::new();
    lines.push(format!("Found ({}):", summary.found.len()));
    lines.extend(summary.found.iter().cloned());
    lines.push(String::new());
    lines.push(format!("Missing ({}):", summary.missing.len()));
    lines.extend(summary.missing.iter().cloned());
    if !summary.errors.is_empty() {
        lines.push(String::new());
        lines.push(format!("Errors ({}):", summary.errors.len()));
        lines.extend(
            summary
                .errors
                .iter()
                .map(|(mac, reason)| format!("{mac}: {reason}")),
        );
    }
    std::fs::write(dir.join("report.txt"), lines.join("\n") + "\n")?;
    Ok(())
}

fn join_lines(macs: &[String]) -> String {
    if macs.is_empty() {
        String::new()
    } else {
        macs.join("\n") + "\n"
    }
}
