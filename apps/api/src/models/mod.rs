pub mod analysis;
pub mod bin;
pub mod bullet;
