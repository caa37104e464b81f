pub mod department;
pub mod project;
