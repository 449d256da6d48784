use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::primitives::camera::Camera;
use crate::primitives::lights::Light;
use crate::primitives::material::Material;
use crate::primitives::sphere::{Cylinder, Sphere};
use crate::primitives::tri_mesh::TriMesh;
use crate::process::json;

fn default_nbounces() -> u32 {
    1
}

fn default_rendermode() -> String {
    "binary".to_string()
}

/// A renderable scene document: global settings, a camera and the shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_nbounces")]
    pub nbounces: u32,
    #[serde(default = "default_rendermode")]
    pub rendermode: String,
    pub camera: Camera,
    pub scene: SceneContents,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneContents {
    #[serde(default)]
    pub backgroundcolor: [f64; 3],
    #[serde(default)]
    pub lightsources: Vec<Light>,
    pub shapes: Vec<Shape>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Triangle {
        v0: [f64; 3],
        v1: [f64; 3],
        v2: [f64; 3],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        material: Option<Material>,
    },
    Mesh(TriMesh),
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            nbounces: 8,
            rendermode: "phong".to_string(),
            camera: Camera::default(),
            scene: SceneContents {
                backgroundcolor: [0.1, 0.1, 0.1],
                lightsources: Vec::new(),
                shapes: Vec::new(),
            },
        }
    }

    pub fn with_mesh(mesh: TriMesh) -> Self {
        let mut scene = Scene::new();
        scene.add(Shape::Mesh(mesh));
        scene
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        json::read_json(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        json::write_json(self, path)
    }

    pub fn add(&mut self, shape: Shape) {
        self.scene.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.scene.shapes
    }

    pub fn meshes(&self) -> impl Iterator<Item = &TriMesh> {
        self.scene.shapes.iter().filter_map(|shape| match shape {
            Shape::Mesh(mesh) => Some(mesh),
            _ => None,
        })
    }
}

/// Appends `shape` to the shapes of the scene document at `path` and returns
/// the updated document. The document is validated against `Scene` but
/// edited as raw JSON, so keys `Scene` does not model are kept.
pub fn merge_shape<P: AsRef<Path>>(path: P, shape: Shape) -> Result<Value> {
    let path = path.as_ref();
    let mut document: Value = json::read_json(path)?;
    let scene: Scene = serde_json::from_value(document.clone())?;
    log::info!(
        "adding shape to {} ({} existing shapes, {} meshes)",
        path.display(),
        scene.shapes().len(),
        scene.meshes().count()
    );

    let shapes = document
        .pointer_mut("/scene/shapes")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| <serde_json::Error as serde::de::Error>::custom("scene has no shapes list"))?;
    shapes.push(serde_json::to_value(shape)?);
    Ok(document)
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::triangle::Triangle;
    use serde_json::json;

    const PRIMITIVES: &str = r#"{
        "nbounces": 4,
        "rendermode": "phong",
        "camera": {
            "type": "pinhole",
            "width": 1200,
            "height": 800,
            "position": [0.0, 0.0, 0.0],
            "lookAt": [0.0, 0.0, 1.0],
            "upVector": [0.0, 1.0, 0.0],
            "fov": 45.0,
            "exposure": 0.1
        },
        "scene": {
            "backgroundcolor": [0.25, 0.25, 0.25],
            "lightsources": [
                { "type": "pointlight", "position": [0, 1, 0.5], "intensity": [0.5, 0.5, 0.5] }
            ],
            "shapes": [
                { "type": "sphere", "center": [-0.3, 0.19, 1], "radius": 0.2 },
                {
                    "type": "cylinder",
                    "center": [-0.3, -0.2, 1],
                    "axis": [0, 1, 0],
                    "radius": 0.15,
                    "height": 0.2
                },
                { "type": "triangle", "v0": [0, 0, 1], "v1": [1, 0, 1], "v2": [0, 1, 1] }
            ]
        }
    }"#;

    #[test]
    fn loads_primitive_shapes() {
        let scene: Scene = serde_json::from_str(PRIMITIVES).unwrap();
        assert_eq!(scene.nbounces, 4);
        assert_eq!(scene.scene.lightsources.len(), 1);
        assert_eq!(scene.shapes().len(), 3);
        assert_eq!(
            scene.shapes()[0],
            Shape::Sphere(Sphere {
                center: [-0.3, 0.19, 1.0],
                radius: 0.2,
                material: None,
            })
        );
        match &scene.shapes()[2] {
            Shape::Triangle { v2, material, .. } => {
                assert_eq!(*v2, [0.0, 1.0, 1.0]);
                assert!(material.is_none());
            }
            other => panic!("expected triangle, got {:?}", other),
        }
    }

    #[test]
    fn missing_globals_fall_back_to_loader_defaults() {
        let scene: Scene = serde_json::from_value(json!({
            "camera": serde_json::to_value(Camera::default()).unwrap(),
            "scene": { "shapes": [] }
        }))
        .unwrap();
        assert_eq!(scene.nbounces, 1);
        assert_eq!(scene.rendermode, "binary");
        assert_eq!(scene.scene.backgroundcolor, [0.0; 3]);
    }

    #[test]
    fn scene_without_shapes_is_rejected() {
        let result: std::result::Result<Scene, _> = serde_json::from_value(json!({
            "camera": serde_json::to_value(Camera::default()).unwrap(),
            "scene": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn mesh_shape_is_tagged_first() {
        let mut mesh = TriMesh::new();
        mesh.push(Triangle::new([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
        let text = serde_json::to_string(&Shape::Mesh(mesh)).unwrap();
        assert!(text.starts_with(r#"{"type":"mesh","material":{"#));
    }

    #[test]
    fn with_mesh_wraps_into_default_scene() {
        let mut scene = Scene::with_mesh(TriMesh::new());
        scene.scene.lightsources.push(Light {
            position: [0.0, 1.0, 0.5],
            intensity: [0.5, 0.5, 0.5],
        });
        let value = serde_json::to_value(&scene).unwrap();
        assert_eq!(value["nbounces"], json!(8));
        assert_eq!(value["rendermode"], json!("phong"));
        assert_eq!(value["scene"]["backgroundcolor"], json!([0.1, 0.1, 0.1]));
        assert_eq!(value["scene"]["shapes"][0]["type"], json!("mesh"));
        assert_eq!(value["scene"]["lightsources"][0]["intensity"], json!([0.5, 0.5, 0.5]));
        assert_eq!(scene.meshes().count(), 1);
    }

    #[test]
    fn merge_keeps_unmodelled_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primitives.json");
        std::fs::write(&path, PRIMITIVES).unwrap();

        let merged = merge_shape(&path, Shape::Mesh(TriMesh::new())).unwrap();
        assert_eq!(merged["camera"]["type"], json!("pinhole"));
        assert_eq!(merged["scene"]["lightsources"][0]["type"], json!("pointlight"));
        assert_eq!(merged["scene"]["shapes"].as_array().unwrap().len(), 4);
        assert_eq!(merged["scene"]["shapes"][3]["type"], json!("mesh"));
    }

    #[test]
    fn merge_rejects_invalid_scene() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"scene": {"shapes": []}}"#).unwrap();

        let err = merge_shape(&path, Shape::Mesh(TriMesh::new())).unwrap_err();
        assert!(matches!(err, crate::error::Error::Json(_)));
    }
}
