use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use doge_compiler::error::BuildError;

#[derive(Parser)]
#[command(name = "doge", version)]
#[command(about = "DOGE — builds a declarative game project into a standalone web page")]
struct Cli {
    /// Path to the project directory (must contain doge.project.json)
    project_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let report = match doge_compiler::build_project(&cli.project_dir) {
        Ok(r) => r,
        Err(BuildError::InvalidProject(dir)) => {
            eprintln!("{}", "Invalid DOGE project :(".red().bold());
            eprintln!(
                "{}",
                format!(
                    "The file 'doge.project.json' was not found in '{}'",
                    dir.display()
                )
                .red()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(1);
        }
    };

    eprintln!(
        "{}",
        format!(
            "Built '{}' ({} sprites, {} objects) -> {}",
            report.project_name,
            report.sprite_count,
            report.object_count,
            report.out_dir.display()
        )
        .green()
    );
}
