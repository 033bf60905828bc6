pub mod anxiety;
pub mod depression;
pub mod stress;
