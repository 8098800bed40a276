//! Session context persisted between commands.
//!
//! `scout find` writes its ranked result to `.tenderscout/last_result.json`
//! in the working directory; `scout disclose` reads it back. The pipeline
//! itself stays stateless, this file is the only cross-command state.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::pipeline::RankedNotices;

const SESSION_DIR: &str = ".tenderscout";
const SESSION_FILE: &str = "last_result.json";

pub fn save(result: &RankedNotices) -> anyhow::Result<()> {
    save_to(Path::new(SESSION_DIR), result)
}

pub fn load() -> anyhow::Result<RankedNotices> {
    load_from(Path::new(SESSION_DIR))
}

fn save_to(dir: &Path, result: &RankedNotices) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create session directory {}", dir.display()))?;
    let path = dir.join(SESSION_FILE);
    let json = serde_json::to_string_pretty(result)?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write session file {}", path.display()))?;
    Ok(())
}

fn load_from(dir: &Path) -> anyhow::Result<RankedNotices> {
    let path = dir.join(SESSION_FILE);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("no session file at {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("malformed session file {}", path.display()))
}
