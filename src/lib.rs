pub mod codegen;
pub mod error;
pub mod project;
pub mod publish;
pub mod runtime;
pub mod template;

use std::path::{Path, PathBuf};

use error::Result;
use project::Project;

/// Summary of a finished build, for the CLI to report.
#[derive(Debug)]
pub struct BuildReport {
    pub project_name: String,
    pub sprite_count: usize,
    pub object_count: usize,
    pub out_dir: PathBuf,
}

/// Compose the standalone page for an already loaded project.
///
/// Pure with respect to the filesystem; the heart of the pipeline and
/// the reason two builds of an unchanged project are byte-identical.
pub fn compose_page(project: &Project) -> Result<String> {
    let preload = codegen::preload_statements(&project.sprites);
    let objects = codegen::object_definitions(&project.objects);
    let create = codegen::create_statements(&project.objects);
    template::compose(runtime::PAGE_TEMPLATE, &preload, &objects, &create)
}

/// Build a project directory end to end: load, generate, compose,
/// publish. Terminal on the first error; nothing is written before the
/// project has loaded cleanly.
pub fn build_project(dir: &Path) -> Result<BuildReport> {
    let project = project::load_project(dir)?;
    let page = compose_page(&project)?;
    let out_dir = publish::publish(&project, &page)?;

    Ok(BuildReport {
        project_name: project.name,
        sprite_count: project.sprites.len(),
        object_count: project.objects.len(),
        out_dir,
    })
}
