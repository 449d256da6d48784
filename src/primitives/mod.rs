pub mod sphere;
pub mod scene;
pub mod camera;
pub mod lights;
pub mod material;
pub mod triangle;
pub mod tri_mesh;
