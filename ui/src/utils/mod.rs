pub mod colors;
pub mod drop_handler;
pub mod file_picker;
pub mod file_save;
