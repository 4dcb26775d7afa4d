pub mod batch;
pub mod linear;
pub mod token;
