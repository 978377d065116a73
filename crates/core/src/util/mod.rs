pub mod file;
pub mod sort;
