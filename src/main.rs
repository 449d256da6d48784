use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use scenekit::{combine_files, convert_obj, CombineConfig, ConvertTarget};

#[derive(Parser)]
#[command(name = "scenekit", version, about = "Project bundling and mesh conversion for scene files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Concatenate sources, headers, scenes, the build file and a test into one text file
    Combine {
        #[arg(long, default_value = ".")]
        root: PathBuf,
        #[arg(short, long, default_value = "combined.txt")]
        output: PathBuf,
        #[arg(long, default_value = "Makefile")]
        build_file: PathBuf,
        #[arg(long, default_value = "test/test_scene_loader.cpp")]
        test_file: PathBuf,
    },
    /// Convert an OBJ mesh into a JSON mesh shape
    Convert {
        #[arg(default_value = "teapot.obj")]
        input: PathBuf,
        /// Output file, `-` for stdout
        #[arg(short, long, default_value = "scene_with_teapot.json")]
        output: PathBuf,
        /// Write only the mesh shape instead of a whole scene
        #[arg(long, conflicts_with = "into")]
        mesh_only: bool,
        /// Append the mesh to the shapes of this scene file
        #[arg(long)]
        into: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Combine {
            root,
            output,
            build_file,
            test_file,
        } => {
            let config = CombineConfig {
                build_file,
                test_file,
                output,
                ..CombineConfig::new(root)
            };
            combine_files(&config)
                .with_context(|| format!("combining files under {}", config.root.display()))?;
        }
        Command::Convert {
            input,
            output,
            mesh_only,
            into,
        } => {
            let target = match into {
                Some(scene) => ConvertTarget::MergeInto(scene),
                None if mesh_only => ConvertTarget::Mesh,
                None => ConvertTarget::Scene,
            };
            convert_obj(&input, &output, &target)
                .with_context(|| format!("converting {}", input.display()))?;
        }
    }
    Ok(())
}
