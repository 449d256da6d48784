use serde::{Deserialize, Serialize};

use crate::primitives::material::Material;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: [f64; 3],
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub center: [f64; 3],
    pub axis: [f64; 3],
    pub radius: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
}
