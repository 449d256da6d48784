pub mod error;
pub mod primitives;
pub mod process;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};
pub use primitives::material::Material;
pub use primitives::scene::{merge_shape, Scene, SceneContents, Shape};
pub use primitives::tri_mesh::TriMesh;
pub use primitives::triangle::Triangle;
pub use process::combine::{combine_files, combine_into, CombineConfig, CombineReport, Section};
pub use process::obj::{load_obj, parse_obj, ObjScene};

/// What `convert_obj` writes for a parsed mesh.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvertTarget {
    /// The bare `{"type": "mesh", ...}` shape.
    Mesh,
    /// The mesh as the only shape of a default scene.
    Scene,
    /// The mesh appended to the shapes of an existing scene file.
    MergeInto(PathBuf),
}

pub fn convert_obj<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, target: &ConvertTarget) -> Result<TriMesh> {
    let mesh = load_obj(input)?.into_mesh();
    if let Some((min, max)) = mesh.bounds() {
        log::debug!("mesh bounds {:?} .. {:?}", min, max);
    }

    match target {
        ConvertTarget::Mesh => process::json::write_json(&Shape::Mesh(mesh.clone()), &output)?,
        ConvertTarget::Scene => Scene::with_mesh(mesh.clone()).save(&output)?,
        ConvertTarget::MergeInto(scene_path) => {
            let document = merge_shape(scene_path, Shape::Mesh(mesh.clone()))?;
            process::json::write_json(&document, &output)?;
        }
    }
    log::info!("wrote {} triangles to {}", mesh.len(), output.as_ref().display());
    Ok(mesh)
}
