use eframe::egui::{self, PointerButton, Pos2};

/// Derives multi-click counts from individual primary presses.
///
/// egui only reports single presses; double and triple clicks are rebuilt
/// here from press timestamps (`egui::InputState::time`) and positions.
pub struct ClickCounter {
    interval: f64,
    radius: f32,
    last: Option<(f64, Pos2)>,
    count: u32,
}

impl ClickCounter {
    pub fn new(interval: f64, radius: f32) -> Self {
        Self {
            interval,
            radius,
            last: None,
            count: 0,
        }
    }

    /// Record a press and return its position in the click sequence, from 1.
    pub fn register(&mut self, time: f64, pos: Pos2) -> u32 {
        let continues = self.last.is_some_and(|(t, p)| {
            time - t <= self.interval && p.distance(pos) <= self.radius
        });
        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((time, pos));
        self.count
    }
}

/// A pointer event in canvas coordinates, ready for the gesture controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasInput {
    Press {
        button: PointerButton,
        pos: Pos2,
        clicks: u32,
    },
    Release(PointerButton),
    Move(Pos2),
}

/// Translate one egui event for a canvas drawn at `canvas` (screen space).
///
/// Presses count only inside `visible`; moves and releases always pass so a
/// drag that leaves the canvas still ends. Only primary presses feed `clicks`.
pub fn route_event(
    event: &egui::Event,
    canvas: egui::Rect,
    visible: egui::Rect,
    time: f64,
    clicks: &mut ClickCounter,
) -> Option<CanvasInput> {
    let to_canvas = |pos: Pos2| (pos - canvas.min).to_pos2();
    match *event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed: true,
            ..
        } => {
            if !visible.contains(pos) {
                return None;
            }
            let pos = to_canvas(pos);
            let clicks = match button {
                PointerButton::Primary => clicks.register(time, pos),
                _ => 1,
            };
            Some(CanvasInput::Press {
                button,
                pos,
                clicks,
            })
        }
        egui::Event::PointerButton {
            button,
            pressed: false,
            ..
        } => Some(CanvasInput::Release(button)),
        egui::Event::PointerMoved(pos) => Some(CanvasInput::Move(to_canvas(pos))),
        _ => None,
    }
}
