//! zebra - 替終端文字編輯器加上交錯行底色

pub mod stripes;

pub mod buffer;
pub mod config;
pub mod editor;
pub mod terminal;
pub mod utils;
pub mod workspace;

mod cursor;
mod dialog;
mod input;
mod palette;
mod view;

pub use buffer::Document;
pub use config::Config;
pub use editor::Editor;
