pub mod client;
pub mod tag_generator;
