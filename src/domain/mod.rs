pub mod engagement;
pub mod page;
pub mod post;
pub mod story;
