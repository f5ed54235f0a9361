//! Shared test helpers for host integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use narrative_carousel::domain::config::NarrativeConfig;
use narrative_carousel_core::config::{HostConfig, ViewportCategory};
use narrative_carousel_host::replay::{Script, ScriptStep};

/// Path to a file under the crate's `fixtures/` directory.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// A plain narrative config with `count` items.
pub fn narrative_config(count: usize) -> NarrativeConfig {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "title": format!("Stop {i}"),
                "body": format!("Body {i}"),
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({
        "_id": "c-40",
        "instruction": "Select the forward arrow",
        "mobileInstruction": "Select the plus icon",
        "_items": items,
    }))
    .unwrap()
}

/// A script with default host flags and no registered families.
pub fn script(viewport: ViewportCategory, steps: Vec<ScriptStep>) -> Script {
    Script {
        viewport,
        host: HostConfig::default(),
        families: Vec::new(),
        steps,
    }
}
