pub mod engagement;
pub mod feed;
pub mod guard;
pub mod stories;
