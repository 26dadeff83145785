use eframe::egui::{self, PointerButton, Pos2, Vec2};

use crate::color::ActiveColor;
use crate::scene::{AnnotationId, HitTarget, SceneHost};

// ── Gesture State ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    /// Sizing a rectangle created by this press.
    Drawing { anchor: Pos2, target: AnnotationId },
    /// Re-sizing an existing rectangle from the press point.
    Editing { anchor: Pos2, target: AnnotationId },
    /// Dragging an existing rectangle; `origin` is its top-left at press time.
    Moving {
        anchor: Pos2,
        origin: Pos2,
        target: AnnotationId,
    },
}

/// Turns pointer presses, moves and releases into edits on a [`SceneHost`].
pub struct GestureController {
    state: GestureState,
    color: ActiveColor,
}

impl GestureController {
    pub fn new(color: ActiveColor) -> Self {
        Self {
            state: GestureState::Idle,
            color,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != GestureState::Idle
    }

    pub fn active_color(&self) -> &ActiveColor {
        &self.color
    }

    pub fn active_color_mut(&mut self) -> &mut ActiveColor {
        &mut self.color
    }

    pub fn press<S: SceneHost>(
        &mut self,
        scene: &mut S,
        button: PointerButton,
        pos: Pos2,
        clicks: u32,
    ) {
        match button {
            PointerButton::Primary => {}
            PointerButton::Secondary => {
                if let HitTarget::Annotation(id) = scene.hit_test(pos) {
                    if scene.remove(id) {
                        log::debug!("removed {id:?}");
                    }
                }
                return;
            }
            _ => return,
        }

        if self.is_active() {
            log::trace!("press ignored while {:?}", self.state);
            return;
        }

        self.state = match (scene.hit_test(pos), clicks) {
            (HitTarget::Background, _) => {
                let target = scene.create(pos, self.color.get());
                GestureState::Drawing {
                    anchor: pos,
                    target,
                }
            }
            (HitTarget::Annotation(target), 2) => match scene.annotation_mut(target) {
                Some(ann) => GestureState::Moving {
                    anchor: pos,
                    origin: ann.min,
                    target,
                },
                None => GestureState::Idle,
            },
            (HitTarget::Annotation(target), 3) => {
                if let Some(ann) = scene.annotation_mut(target) {
                    ann.fill = self.color.get();
                }
                GestureState::Idle
            }
            (HitTarget::Annotation(target), _) => GestureState::Editing {
                anchor: pos,
                target,
            },
        };
        log::debug!("press x{clicks} at {pos:?} -> {:?}", self.state);
    }

    pub fn moved<S: SceneHost>(&mut self, scene: &mut S, pos: Pos2) {
        match self.state {
            GestureState::Idle => {}
            GestureState::Drawing { anchor, target } | GestureState::Editing { anchor, target } => {
                if let Some(ann) = scene.annotation_mut(target) {
                    ann.min = anchor.min(pos);
                    ann.size = (pos - anchor).abs();
                }
            }
            GestureState::Moving {
                anchor,
                origin,
                target,
            } => {
                let bounds = scene.bounds();
                if let Some(ann) = scene.annotation_mut(target) {
                    ann.min = clamp_to_bounds(origin + (pos - anchor), ann.size, bounds);
                }
            }
        }
    }

    pub fn release<S: SceneHost>(&mut self, scene: &mut S, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if let GestureState::Drawing { target, .. } | GestureState::Editing { target, .. } =
            self.state
        {
            // zero width or height: invisible and unhittable, so never kept
            let degenerate = scene
                .annotation_mut(target)
                .is_some_and(|ann| ann.is_degenerate());
            if degenerate {
                scene.remove(target);
            }
        }
        if self.is_active() {
            log::debug!("release, leaving {:?}", self.state);
        }
        self.state = GestureState::Idle;
    }
}

/// Keep a rectangle of `size` with top-left `min` inside `[0, bounds]`.
fn clamp_to_bounds(min: Pos2, size: Vec2, bounds: Vec2) -> Pos2 {
    let max = (bounds - size).max(Vec2::ZERO);
    egui::pos2(min.x.clamp(0.0, max.x), min.y.clamp(0.0, max.y))
}
