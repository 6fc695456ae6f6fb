//! Business logic services

pub mod games;

pub use games::GameService;
