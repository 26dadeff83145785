use eframe::egui;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_egui(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn from_egui(c: egui::Color32) -> Self {
        Self::new(c.r(), c.g(), c.b())
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::RED
    }
}

/// Colour applied to new rectangles and to triple-click recolours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveColor {
    current: Rgb,
}

impl ActiveColor {
    pub fn new(initial: Rgb) -> Self {
        Self { current: initial }
    }

    pub fn get(&self) -> Rgb {
        self.current
    }

    /// Apply a colour-picker result. `None` means the picker was cancelled.
    pub fn accept(&mut self, picked: Option<Rgb>) -> bool {
        match picked {
            Some(color) => {
                log::debug!("active color -> {color:?}");
                self.current = color;
                true
            }
            None => false,
        }
    }
}
