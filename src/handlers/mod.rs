pub mod department;
pub mod form;
pub mod landing;
pub mod project;
