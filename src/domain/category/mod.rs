pub mod entity;

pub use entity::Category;
