//! Cursor hook registration for the `init` command
//!
//! Writes or merges a `stop` hook entry into Cursor's `hooks.json` so the
//! editor invokes `flywheel eval` whenever the agent loop ends.

use anyhow::{anyhow, Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

/// Command Cursor runs when the stop hook fires.
const HOOK_COMMAND: &str = "flywheel eval";

/// Cursor hooks MUST always be in ~/.cursor/hooks.json (global).
/// Cursor does not support project-level hooks.
/// Reference: https://cursor.com/docs/agent/hooks.md
fn default_hooks_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".cursor")
        .join("hooks.json")
}

/// Hook configuration to register - official hooks.json structure
/// Reference: https://cursor.com/docs/agent/hooks.md
fn generate_hooks() -> Value {
    json!({
        "version": 1,
        "hooks": {
            "stop": [{
                "command": HOOK_COMMAND
            }]
        }
    })
}

/// Merge hooks into existing settings without duplicates
fn merge_hooks(existing: &mut Value, new: Value) -> Result<()> {
    // Ensure existing is an object
    if !existing.is_object() {
        *existing = json!({});
    }

    let root = existing
        .as_object_mut()
        .ok_or_else(|| anyhow!("Invalid settings format"))?;

    // hooks.json requires a version field; an existing one is kept as-is
    root.entry("version").or_insert(json!(1));

    // Get or create hooks object
    let hooks = root.entry("hooks").or_insert_with(|| json!({}));

    // Ensure hooks is an object
    if !hooks.is_object() {
        *hooks = json!({});
    }

    let new_hooks = new["hooks"]
        .as_object()
        .ok_or_else(|| anyhow!("Invalid hooks format"))?;

    // For each event type in new hooks
    for (event_name, new_entries) in new_hooks {
        let event_array = hooks
            .as_object_mut()
            .unwrap()
            .entry(event_name)
            .or_insert_with(|| json!([]));

        // Ensure it's an array
        if !event_array.is_array() {
            *event_array = json!([]);
        }

        let event_array = event_array
            .as_array_mut()
            .ok_or_else(|| anyhow!("Invalid event array"))?;

        if let Some(new_entries) = new_entries.as_array() {
            for entry in new_entries {
                if !contains_command(event_array, entry) {
                    event_array.push(entry.clone());
                }
            }
        }
    }

    Ok(())
}

/// Check if an entry with the same command already exists in the array
fn contains_command(array: &[Value], entry: &Value) -> bool {
    array
        .iter()
        .any(|existing| existing.get("command") == entry.get("command"))
}

/// Register the stop hook (create hooks.json or merge into it).
///
/// Unlike `eval`, this runs interactively for a human, so errors are
/// surfaced with a non-zero exit. An existing file that is not valid
/// JSON is refused rather than overwritten.
pub fn init_command(hooks_file: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let hooks_path = hooks_file.unwrap_or_else(default_hooks_path);
    let new_hooks = generate_hooks();

    let final_settings = if hooks_path.exists() {
        let content = fs::read_to_string(&hooks_path)
            .with_context(|| format!("Failed to read {}", hooks_path.display()))?;
        let mut existing: Value = serde_json::from_str(&content).map_err(|e| {
            anyhow!(
                "Invalid JSON in existing {}: {} - fix or remove the file and re-run",
                hooks_path.display(),
                e
            )
        })?;

        eprintln!("⚠️  Found existing {}", hooks_path.display());
        eprintln!("   Merging the stop hook into existing configuration...");

        merge_hooks(&mut existing, new_hooks)?;
        existing
    } else {
        new_hooks
    };

    let json_str = serde_json::to_string_pretty(&final_settings)?;

    if dry_run {
        println!("{json_str}");
        return Ok(());
    }

    if let Some(parent) = hooks_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&hooks_path, json_str)
        .with_context(|| format!("Failed to write {}", hooks_path.display()))?;

    println!("✅ Registered Cursor stop hook in {}", hooks_path.display());
    println!("   Cursor will now run `{HOOK_COMMAND}` when the agent loop ends.");

    Ok(())
}
