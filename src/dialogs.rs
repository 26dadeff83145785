use std::path::PathBuf;

use crate::error::AppError;

const IMAGE_FILTER: &str = "All supported graphics";
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const HELP_TITLE: &str = "Controls";
pub const HELP_TEXT: &str = "- Hold left click and drag to draw a rectangle\n\n\
- Double left click on a rectangle and drag to move it around\n\n\
- To change the color of existing rectangles, select a color from the picker and triple left click a rectangle\n\n\
- Right click on a rectangle to delete it";

pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open an image")
        .add_filter(IMAGE_FILTER, IMAGE_EXTENSIONS)
        .pick_file()
}

pub fn pick_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save your image")
        .add_filter(IMAGE_FILTER, IMAGE_EXTENSIONS)
        .set_file_name("annotated.png")
        .save_file()
}

pub fn show_help() {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(HELP_TITLE)
        .set_description(HELP_TEXT)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

pub fn show_error(err: &AppError) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(err.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
