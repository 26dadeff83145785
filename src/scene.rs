use eframe::egui::{self, Pos2, Vec2};
use image::DynamicImage;
use std::path::PathBuf;

use crate::color::Rgb;

// ── Data Model ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationId(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub id: AnnotationId,
    /// Top-left corner in canvas coordinates.
    pub min: Pos2,
    /// Always non-negative.
    pub size: Vec2,
    pub fill: Rgb,
}

impl Annotation {
    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(self.min, self.size)
    }

    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    fn contains(&self, point: Pos2) -> bool {
        !self.is_degenerate() && self.rect().contains(point)
    }
}

pub struct Background {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl Background {
    pub fn size(&self) -> Vec2 {
        egui::vec2(self.image.width() as f32, self.image.height() as f32)
    }
}

/// What sits under the pointer at press time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Background,
    Annotation(AnnotationId),
}

/// The operations the gesture controller needs from whatever holds the shapes.
pub trait SceneHost {
    fn hit_test(&self, point: Pos2) -> HitTarget;
    fn create(&mut self, min: Pos2, fill: Rgb) -> AnnotationId;
    /// Returns false when `id` is not (or no longer) in the scene.
    fn remove(&mut self, id: AnnotationId) -> bool;
    fn annotation_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation>;
    fn bounds(&self) -> Vec2;
}

// ── Scene ───────────────────────────────────────────────────────────────────

/// Ordered annotations (back to front) over an optional background image.
pub struct Scene {
    annotations: Vec<Annotation>,
    next_id: u64,
    background: Option<Background>,
    default_size: Vec2,
}

impl Scene {
    pub fn new(default_size: Vec2) -> Self {
        Self {
            annotations: Vec::new(),
            next_id: 0,
            background: None,
            default_size,
        }
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Replaces the background. Annotations are left untouched.
    pub fn set_background(&mut self, background: Background) -> Option<Background> {
        self.background.replace(background)
    }

    /// Canvas size: the background's pixel size, or the configured default.
    pub fn size(&self) -> Vec2 {
        self.background
            .as_ref()
            .map(Background::size)
            .unwrap_or(self.default_size)
    }
}

impl SceneHost for Scene {
    fn hit_test(&self, point: Pos2) -> HitTarget {
        self.annotations
            .iter()
            .rev()
            .find(|a| a.contains(point))
            .map(|a| HitTarget::Annotation(a.id))
            .unwrap_or(HitTarget::Background)
    }

    fn create(&mut self, min: Pos2, fill: Rgb) -> AnnotationId {
        let id = AnnotationId(self.next_id);
        self.next_id += 1;
        self.annotations.push(Annotation {
            id,
            min,
            size: Vec2::ZERO,
            fill,
        });
        id
    }

    fn remove(&mut self, id: AnnotationId) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        self.annotations.len() != before
    }

    fn annotation_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|a| a.id == id)
    }

    fn bounds(&self) -> Vec2 {
        self.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn contains_id(scene: &Scene, id: AnnotationId) -> bool {
        scene.annotations().iter().any(|a| a.id == id)
    }

    fn boxed(scene: &mut Scene, x: f32, y: f32, w: f32, h: f32) -> AnnotationId {
        let id = scene.create(egui::pos2(x, y), Rgb::RED);
        scene.annotation_mut(id).unwrap().size = egui::vec2(w, h);
        id
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut scene = Scene::new(egui::vec2(200.0, 200.0));
        let below = boxed(&mut scene, 0.0, 0.0, 100.0, 100.0);
        let above = boxed(&mut scene, 50.0, 50.0, 100.0, 100.0);

        assert_eq!(scene.hit_test(egui::pos2(75.0, 75.0)), HitTarget::Annotation(above));
        assert_eq!(scene.hit_test(egui::pos2(25.0, 25.0)), HitTarget::Annotation(below));
        assert_eq!(scene.hit_test(egui::pos2(190.0, 10.0)), HitTarget::Background);
    }

    #[test]
    fn test_zero_size_is_not_hittable() {
        let mut scene = Scene::new(egui::vec2(200.0, 200.0));
        scene.create(egui::pos2(10.0, 10.0), Rgb::RED);
        assert_eq!(scene.hit_test(egui::pos2(10.0, 10.0)), HitTarget::Background);
    }

    #[test]
    fn test_remove_is_exact_and_idempotent() {
        let mut scene = Scene::new(egui::vec2(200.0, 200.0));
        let a = boxed(&mut scene, 0.0, 0.0, 10.0, 10.0);
        let b = boxed(&mut scene, 20.0, 20.0, 10.0, 10.0);

        assert!(scene.remove(a));
        assert!(!scene.remove(a));
        assert_eq!(scene.annotations().len(), 1);
        assert!(contains_id(&scene, b));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut scene = Scene::new(egui::vec2(200.0, 200.0));
        let a = scene.create(egui::pos2(0.0, 0.0), Rgb::RED);
        scene.remove(a);
        let b = scene.create(egui::pos2(0.0, 0.0), Rgb::RED);
        assert_ne!(a, b);
    }

    #[test]
    fn test_background_drives_size_and_keeps_annotations() {
        let mut scene = Scene::new(egui::vec2(800.0, 600.0));
        assert_eq!(scene.size(), egui::vec2(800.0, 600.0));
        let id = boxed(&mut scene, 1.0, 1.0, 5.0, 5.0);

        let first = Background {
            path: PathBuf::from("first.png"),
            image: DynamicImage::ImageRgba8(RgbaImage::new(320, 240)),
        };
        assert!(scene.set_background(first).is_none());
        assert_eq!(scene.size(), egui::vec2(320.0, 240.0));

        let second = Background {
            path: PathBuf::from("second.png"),
            image: DynamicImage::ImageRgba8(RgbaImage::new(64, 48)),
        };
        let previous = scene.set_background(second).unwrap();
        assert_eq!(previous.path, PathBuf::from("first.png"));
        assert_eq!(scene.bounds(), egui::vec2(64.0, 48.0));
        assert!(contains_id(&scene, id));
    }
}
