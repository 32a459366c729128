use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One entry in the model index. URDF models carry an `id` (the file stem);
/// mesh-only STL entries are listed by name alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub urdf: String,
}

pub fn models_dir(public_dir: &Path) -> PathBuf {
    public_dir.join("models")
}

/// Creates the models directory and its `meshes/` subdirectory when absent,
/// so the viewer has a place to load from on a fresh checkout.
pub fn ensure_layout(models_dir: &Path) -> Result<()> {
    if !models_dir.exists() {
        tracing::info!(dir = %models_dir.display(), "creating models directory");
    }
    fs::create_dir_all(models_dir.join("meshes"))?;
    Ok(())
}

/// Walks the models directory (non-recursive) and returns the index entries
/// in file-name order. `.urdf` files always appear; `.stl` files are added
/// when `include_stl` is set.
pub fn discover(models_dir: &Path, include_stl: bool) -> Result<Vec<ModelEntry>> {
    ensure_layout(models_dir)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(models_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let mut models = Vec::new();
    for file_name in names {
        let Some((stem, ext)) = file_name.rsplit_once('.') else {
            continue;
        };
        match ext.to_ascii_lowercase().as_str() {
            "urdf" => models.push(ModelEntry {
                id: Some(stem.to_string()),
                name: display_name(stem),
                urdf: file_name.clone(),
            }),
            "stl" if include_stl => models.push(ModelEntry {
                id: None,
                name: display_name(stem),
                urdf: file_name.clone(),
            }),
            _ => {}
        }
    }

    Ok(models)
}

/// Turns a file stem into a display name: underscores become spaces and each
/// run of letters is title-cased, so `ur5_robot` reads as `Ur5 Robot`.
pub fn display_name(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut prev_alphabetic = false;

    for ch in stem.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }

    out
}
