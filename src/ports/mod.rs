pub mod email;
pub mod repository;
