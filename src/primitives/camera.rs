use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: [f64; 3],
    #[serde(rename = "lookAt")]
    pub look_at: [f64; 3],
    #[serde(rename = "upVector")]
    pub up_vector: [f64; 3],
    pub fov: f64,
    pub width: u32,
    pub height: u32,
    pub exposure: f64,
}

impl Camera {
    pub fn new(position: [f64; 3], look_at: [f64; 3], up_vector: [f64; 3], fov: f64, width: u32, height: u32) -> Self {
        Self {
            position,
            look_at,
            up_vector,
            fov,
            width,
            height,
            exposure: 0.1,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0], 45.0, 1200, 800)
    }
}
