pub mod portal;
pub mod protected;
pub mod public;
