//! rollGallery - a gallery of piano rolls from pianoroll.ai
//!
//! Fetches a stream of random notes, cuts them into small rolls, and shows
//! them as a browsable gallery. Click a roll to expand it.

mod app;
mod card;
mod gallery;
mod loader;

use app::GalleryApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 760.0])
            .with_title("pianoroll gallery"),
        ..Default::default()
    };

    eframe::run_native(
        "pianoroll-gallery",
        options,
        Box::new(|cc| Box::new(GalleryApp::new(cc))),
    )
}
