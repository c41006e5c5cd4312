//! Catalog entities and their `Resource` impls

mod category;
mod comment;
mod image;
mod product;
mod user;

pub use category::Category;
pub use comment::ProductComment;
pub use image::ProductImage;
pub use product::Product;
pub use user::User;
