use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ks: f64,
    pub kd: f64,
    pub specularexponent: f64,
    pub diffusecolor: [f64; 3],
    pub specularcolor: [f64; 3],
    pub isreflective: bool,
    pub reflectivity: f64,
    pub isrefractive: bool,
    pub refractiveindex: f64,
}

impl Material {
    pub fn new(
        ks: f64,
        kd: f64,
        specularexponent: f64,
        diffusecolor: [f64; 3],
        specularcolor: [f64; 3],
    ) -> Self {
        Material {
            ks,
            kd,
            specularexponent,
            diffusecolor,
            specularcolor,
            isreflective: false,
            reflectivity: 0.0,
            isrefractive: false,
            refractiveindex: 1.0,
        }
    }

    pub fn reflective(mut self, reflectivity: f64) -> Self {
        self.isreflective = true;
        self.reflectivity = reflectivity;
        self
    }

    /// Material stamped onto every converted mesh.
    pub fn mesh_default() -> Self {
        Material::new(0.2, 0.8, 30.0, [0.8, 0.3, 0.3], [1.0, 1.0, 1.0]).reflective(0.3)
    }
}
