//! Project loading — reads a DOGE project directory into memory.
//!
//! A project is a directory containing `doge.project.json`, sprite
//! descriptors under `sprites/`, and one subdirectory per game object
//! under `objects/`. Everything is loaded up front; the rest of the
//! pipeline never touches the project directory again except to copy
//! sprite images out of it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BuildError, Result};

pub const PROJECT_FILE: &str = "doge.project.json";
pub const SPRITE_SUFFIX: &str = ".sprite.json";
pub const EVENT_SUFFIX: &str = ".event.js";

/// A fully loaded project, immutable once returned.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    /// Project directory; anchors sprite image paths and the output tree.
    pub root: PathBuf,
    pub sprites: Vec<Sprite>,
    pub objects: Vec<GameObject>,
}

/// A named reference to an image asset.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Filename with the `.sprite.json` suffix stripped.
    pub name: String,
    /// Image filename relative to `sprites/assets/`.
    pub image: String,
}

/// A scripted entity: a sprite reference plus raw event handler source.
///
/// Event source text is unvalidated JavaScript spliced verbatim into the
/// generated page. A `sprite` that names no loaded sprite is not an error
/// here; it surfaces at runtime in the browser.
#[derive(Debug, Clone)]
pub struct GameObject {
    /// Directory name under `objects/`.
    pub name: String,
    pub sprite: String,
    /// Event name (filename stem of `*.event.js`) to handler source.
    pub events: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct ProjectFile {
    project: ProjectMeta,
}

#[derive(Deserialize)]
struct ProjectMeta {
    name: String,
}

#[derive(Deserialize)]
struct SpriteFile {
    image: String,
}

#[derive(Deserialize)]
struct ObjectFile {
    sprite: String,
}

/// Load a project directory.
///
/// Fails with [`BuildError::InvalidProject`] if `doge.project.json` is
/// absent. An absent `sprites/` or `objects/` directory loads as an empty
/// list; any other missing or malformed file aborts the load.
pub fn load_project(dir: &Path) -> Result<Project> {
    let project_file = dir.join(PROJECT_FILE);
    if !project_file.is_file() {
        return Err(BuildError::InvalidProject(dir.to_path_buf()));
    }

    let meta: ProjectFile = read_json(&project_file)?;
    let sprites = load_sprites(&dir.join("sprites"))?;
    let objects = load_objects(&dir.join("objects"))?;

    Ok(Project {
        name: meta.project.name,
        root: dir.to_path_buf(),
        sprites,
        objects,
    })
}

fn load_sprites(dir: &Path) -> Result<Vec<Sprite>> {
    let mut sprites = Vec::new();
    for path in list_dir(dir)? {
        let Some(name) = strip_suffix(&path, SPRITE_SUFFIX) else {
            continue;
        };
        let file: SpriteFile = read_json(&path)?;
        sprites.push(Sprite {
            name,
            image: file.image,
        });
    }
    Ok(sprites)
}

fn load_objects(dir: &Path) -> Result<Vec<GameObject>> {
    let mut objects = Vec::new();
    for path in list_dir(dir)? {
        if !path.is_dir() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let file: ObjectFile = read_json(&path.join("object.json"))?;
        let events = load_events(&path)?;
        objects.push(GameObject {
            name,
            sprite: file.sprite,
            events,
        });
    }
    Ok(objects)
}

fn load_events(dir: &Path) -> Result<BTreeMap<String, String>> {
    let mut events = BTreeMap::new();
    for path in list_dir(dir)? {
        let Some(name) = strip_suffix(&path, EVENT_SUFFIX) else {
            continue;
        };
        let source =
            fs::read_to_string(&path).map_err(|e| BuildError::io(&path, e))?;
        events.insert(name, source);
    }
    Ok(events)
}

/// List a directory sorted by filename, so generated output does not
/// depend on platform enumeration order. A missing directory lists as
/// empty.
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| BuildError::io(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    paths.sort();
    Ok(paths)
}

fn strip_suffix(path: &Path, suffix: &str) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .and_then(|s| s.strip_suffix(suffix))
        .map(str::to_string)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| BuildError::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn missing_descriptor_is_invalid_project() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project(dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidProject(_)));
    }

    #[test]
    fn loads_name_and_empty_lists() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join(PROJECT_FILE),
            r#"{"project":{"name":"Demo"}}"#,
        );

        let project = load_project(dir.path()).unwrap();
        assert_eq!(project.name, "Demo");
        assert!(project.sprites.is_empty());
        assert!(project.objects.is_empty());
    }

    #[test]
    fn sprite_name_is_filename_minus_suffix() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join(PROJECT_FILE),
            r#"{"project":{"name":"Demo"}}"#,
        );
        write(
            &dir.path().join("sprites/hero.sprite.json"),
            r#"{"image":"hero.png"}"#,
        );

        let project = load_project(dir.path()).unwrap();
        assert_eq!(project.sprites.len(), 1);
        assert_eq!(project.sprites[0].name, "hero");
        assert_eq!(project.sprites[0].image, "hero.png");
    }

    #[test]
    fn sprites_are_sorted_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join(PROJECT_FILE),
            r#"{"project":{"name":"Demo"}}"#,
        );
        for name in ["zombie", "apple", "hero"] {
            write(
                &dir.path().join(format!("sprites/{name}.sprite.json")),
                r#"{"image":"x.png"}"#,
            );
        }

        let project = load_project(dir.path()).unwrap();
        let names: Vec<&str> =
            project.sprites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["apple", "hero", "zombie"]);
    }

    #[test]
    fn object_events_keyed_by_filename_stem() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join(PROJECT_FILE),
            r#"{"project":{"name":"Demo"}}"#,
        );
        write(
            &dir.path().join("objects/Player/object.json"),
            r#"{"sprite":"hero"}"#,
        );
        write(&dir.path().join("objects/Player/step.event.js"), "x += 1;");

        let project = load_project(dir.path()).unwrap();
        assert_eq!(project.objects.len(), 1);
        let player = &project.objects[0];
        assert_eq!(player.name, "Player");
        assert_eq!(player.sprite, "hero");
        assert_eq!(player.events.get("step").map(String::as_str), Some("x += 1;"));
    }

    #[test]
    fn object_without_descriptor_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join(PROJECT_FILE),
            r#"{"project":{"name":"Demo"}}"#,
        );
        fs::create_dir_all(dir.path().join("objects/Broken")).unwrap();

        let err = load_project(dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }

    #[test]
    fn malformed_json_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join(PROJECT_FILE), "{not json");

        let err = load_project(dir.path()).unwrap_err();
        match err {
            BuildError::Json { path, .. } => {
                assert!(path.ends_with(PROJECT_FILE));
            }
            other => panic!("expected Json error, got {other}"),
        }
    }
}
