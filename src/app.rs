use eframe::egui;

use crate::color::{ActiveColor, Rgb};
use crate::dialogs;
use crate::gesture::{GestureController, GestureState};
use crate::imaging;
use crate::input::{route_event, CanvasInput, ClickCounter};
use crate::scene::Scene;
use crate::settings::Settings;

pub struct RectAnnotateApp {
    scene: Scene,
    gesture: GestureController,
    clicks: ClickCounter,
    texture: Option<egui::TextureHandle>,
    /// Draft colour while the colour picker is open.
    picker: Option<egui::Color32>,
}

impl RectAnnotateApp {
    pub fn new(settings: &Settings) -> Self {
        let [w, h] = settings.canvas_size;
        Self {
            scene: Scene::new(egui::vec2(w, h)),
            gesture: GestureController::new(ActiveColor::new(settings.default_color)),
            clicks: ClickCounter::new(
                settings.multi_click_interval,
                settings.multi_click_radius,
            ),
            texture: None,
            picker: None,
        }
    }

    fn open_image(&mut self, ctx: &egui::Context) {
        let Some(path) = dialogs::pick_image() else {
            log::debug!("open cancelled");
            return;
        };
        match imaging::load_background(&path) {
            Ok(background) => {
                let rgba = background.image.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                self.texture = Some(ctx.load_texture(
                    "background",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
                let title = format!(
                    "rect-annotate — {}",
                    background
                        .path
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                );
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
                self.scene.set_background(background);
            }
            Err(err) => {
                log::error!("{err}");
                dialogs::show_error(&err);
            }
        }
    }

    fn save_image(&self) {
        let Some(path) = dialogs::pick_save_path() else {
            log::debug!("save cancelled");
            return;
        };
        if let Err(err) = imaging::save_png(&self.scene, &path) {
            log::error!("{err}");
            dialogs::show_error(&err);
        }
    }

    /// Feed this frame's pointer events to the gesture controller.
    fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        canvas: egui::Rect,
        visible: egui::Rect,
    ) {
        let (events, time) = ctx.input(|i| (i.events.clone(), i.time));
        for event in &events {
            match route_event(event, canvas, visible, time, &mut self.clicks) {
                Some(CanvasInput::Press {
                    button,
                    pos,
                    clicks,
                }) => self.gesture.press(&mut self.scene, button, pos, clicks),
                Some(CanvasInput::Release(button)) => {
                    self.gesture.release(&mut self.scene, button)
                }
                Some(CanvasInput::Move(pos)) => self.gesture.moved(&mut self.scene, pos),
                None => {}
            }
        }
    }

    fn draw_scene(&self, painter: &egui::Painter, canvas: egui::Rect) {
        if let Some(ref tex) = self.texture {
            painter.image(
                tex.id(),
                canvas,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            painter.rect_filled(canvas, 0.0, egui::Color32::WHITE);
        }
        for ann in self.scene.annotations() {
            if let Some(rect) = on_screen(ann.rect(), canvas) {
                painter.rect_filled(rect, 0.0, ann.fill.to_egui());
            }
        }
    }

    fn toolbar_ui(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            if ui.button("Open Image").clicked() {
                self.open_image(ctx);
            }
            if ui.button("Save Image").clicked() {
                self.save_image();
            }
            ui.separator();
            if ui.button("Color").clicked() && self.picker.is_none() {
                self.picker = Some(self.gesture.active_color().get().to_egui());
            }
            let (swatch, _) =
                ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2.0, self.gesture.active_color().get().to_egui());
            ui.separator();
            if ui.button("Help").clicked() {
                dialogs::show_help();
            }
        });
    }

    /// Modal colour dialog; OK applies the draft, Cancel/Escape discards it.
    fn color_picker_window(&mut self, ctx: &egui::Context) {
        let Some(mut draft) = self.picker else {
            return;
        };
        let mut open = true;
        let mut result: Option<Option<Rgb>> = None;

        egui::Window::new("Pick a color")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut draft,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        result = Some(Some(Rgb::from_egui(draft)));
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(None);
                    }
                });
            });

        if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = Some(None);
        }
        match result {
            Some(picked) => {
                self.gesture.active_color_mut().accept(picked);
                self.picker = None;
            }
            None => self.picker = Some(draft),
        }
    }
}

/// Screen rect of a canvas-space rectangle, clipped to the canvas like the
/// exported PNG. `None` when nothing of it is visible.
fn on_screen(rect: egui::Rect, canvas: egui::Rect) -> Option<egui::Rect> {
    let clipped = rect.translate(canvas.min.to_vec2()).intersect(canvas);
    clipped.is_positive().then_some(clipped)
}

// ── eframe App impl ────────────────────────────────────────────────────────

impl eframe::App for RectAnnotateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard shortcuts
        let (open, save, help) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::O),
                i.modifiers.ctrl && i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::F1),
            )
        });
        let modal = self.picker.is_some();
        if !modal {
            if open {
                self.open_image(ctx);
            }
            if save {
                self.save_image();
            }
            if help {
                dialogs::show_help();
            }
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(!modal, |ui| self.toolbar_ui(ui, ctx));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let (response, painter) =
                    ui.allocate_painter(self.scene.size(), egui::Sense::click_and_drag());
                let canvas = response.rect;
                let visible = canvas.intersect(ui.clip_rect());

                if !modal {
                    self.handle_canvas_input(ctx, canvas, visible);
                }
                match self.gesture.state() {
                    GestureState::Moving { .. } => ctx.set_cursor_icon(egui::CursorIcon::Grabbing),
                    GestureState::Drawing { .. } | GestureState::Editing { .. } => {
                        ctx.set_cursor_icon(egui::CursorIcon::Crosshair)
                    }
                    GestureState::Idle => {}
                }
                self.draw_scene(&painter, canvas);
            });
        });

        self.color_picker_window(ctx);
    }
}
