pub mod client;
mod image_probe;
pub mod resources;

pub use client::{ApiClient, ListResponse};
pub use image_probe::HttpImageProbe;
