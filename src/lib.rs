pub mod config;
pub mod logger;
pub mod post;
pub mod readme;
pub mod sync;
mod front_matter;
mod post_list;
mod test_data;
mod text_utils;
mod list_renderer;
