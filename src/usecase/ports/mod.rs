pub mod gateway;
pub mod media;
