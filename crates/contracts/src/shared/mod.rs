pub mod filename;
pub mod gallery;
