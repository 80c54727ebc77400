pub mod color;
pub mod stroke;
