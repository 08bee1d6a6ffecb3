//! Output publishing — writes the composed page and copies assets.
//!
//! The output tree lives at `<projectDir>/out/`. Directories are created
//! with `create_dir_all` semantics; stale files from a previous build are
//! never cleared.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::project::Project;
use crate::runtime::{ENGINE_FILE_NAME, ENGINE_JS};

pub const OUT_DIR: &str = "out";
pub const PAGE_FILE: &str = "index.html";
pub const ASSETS_DIR: &str = "assets";

/// Publish the composed page, the engine runtime, and every referenced
/// sprite image. Returns the output directory. A missing source image
/// aborts the remaining copies.
pub fn publish(project: &Project, page: &str) -> Result<PathBuf> {
    let out_dir = project.root.join(OUT_DIR);
    create_dir(&out_dir)?;

    let page_path = out_dir.join(PAGE_FILE);
    fs::write(&page_path, page).map_err(|e| BuildError::io(&page_path, e))?;

    let engine_path = out_dir.join(ENGINE_FILE_NAME);
    fs::write(&engine_path, ENGINE_JS).map_err(|e| BuildError::io(&engine_path, e))?;

    let assets_dir = out_dir.join(ASSETS_DIR);
    create_dir(&assets_dir)?;

    let source_dir = project.root.join("sprites").join(ASSETS_DIR);
    for sprite in &project.sprites {
        let from = source_dir.join(&sprite.image);
        let to = assets_dir.join(&sprite.image);
        fs::copy(&from, &to).map_err(|e| BuildError::io(&from, e))?;
    }

    Ok(out_dir)
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))
}
