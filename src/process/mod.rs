pub mod combine;
pub mod json;
pub mod obj;
