use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: [f64; 3],
    pub intensity: [f64; 3],
}
