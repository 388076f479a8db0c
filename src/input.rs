use egui::{Color32, Context, Pos2, Rect, Response};

use crate::tools::Tool;

/// A color choice from the tools panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorChoice {
    /// Index into the configured palette
    Palette(usize),
    /// Arbitrary color from the picker
    Custom(Color32),
}

/// Everything the drawing controller reacts to.
///
/// Pointer positions are in canvas-local pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released anywhere
    PointerUp,
    SelectTool(Tool),
    SelectColor(ColorChoice),
    SetBrushWidth(u32),
    SetFill(bool),
    /// Wipe the canvas back to the background color
    Clear,
    /// Save the current canvas as an image
    Export,
}

/// Pointer state sampled from egui for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    /// Screen position of the pointer, `None` if it left the window
    pub position: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
    /// The canvas widget owns the pointer: no popup or window is on top of it
    pub over_canvas: bool,
}

/// Converts raw egui pointer input into canvas-local `InputEvent`s
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Translate a screen position into canvas-local coordinates
    pub fn to_canvas(&self, screen_pos: Pos2) -> Pos2 {
        (screen_pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// `canvas` is the response of the drawing area for this frame; presses
    /// and moves only count while it is hovered or being dragged, so input
    /// aimed at a popup over the canvas never draws.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let over_canvas = canvas.hovered() || canvas.dragged();
        let sample = ctx.input(|input| PointerSample {
            position: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
            over_canvas,
        });
        self.translate(sample)
    }

    /// Generate events for one frame of pointer state.
    ///
    /// Moves come first so a release in the same frame still draws the final
    /// segment.
    pub fn translate(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = sample.position {
            let in_canvas = sample.over_canvas && self.canvas_rect.contains(pos);

            if in_canvas && Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove {
                    position: self.to_canvas(pos),
                });
            }

            if in_canvas && sample.primary_pressed {
                events.push(InputEvent::PointerDown {
                    position: self.to_canvas(pos),
                });
            }
        }

        if sample.primary_released {
            events.push(InputEvent::PointerUp);
        }

        self.last_pointer_pos = sample.position;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(pos2(100.0, 50.0), pos2(500.0, 350.0)))
    }

    #[test]
    fn test_positions_are_canvas_local() {
        let mut input = handler();
        let events = input.translate(PointerSample {
            position: Some(pos2(110.0, 70.0)),
            primary_pressed: true,
            over_canvas: true,
            ..Default::default()
        });
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { position: pos2(10.0, 20.0) },
                InputEvent::PointerDown { position: pos2(10.0, 20.0) },
            ]
        );
    }

    #[test]
    fn test_unchanged_position_is_not_a_move() {
        let mut input = handler();
        let sample = PointerSample {
            position: Some(pos2(200.0, 200.0)),
            over_canvas: true,
            ..Default::default()
        };
        assert_eq!(input.translate(sample).len(), 1);
        assert!(input.translate(sample).is_empty());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.translate(PointerSample {
            position: Some(pos2(20.0, 20.0)),
            primary_pressed: true,
            over_canvas: true,
            ..Default::default()
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_on_layer_above_canvas_is_ignored() {
        let mut input = handler();
        // Inside the canvas rect, but a popup owns the pointer
        let covered = PointerSample {
            position: Some(pos2(200.0, 200.0)),
            primary_pressed: true,
            over_canvas: false,
            ..Default::default()
        };
        assert!(input.translate(covered).is_empty());

        let released = PointerSample {
            primary_pressed: false,
            primary_released: true,
            ..covered
        };
        assert_eq!(input.translate(released), vec![InputEvent::PointerUp]);
    }

    #[test]
    fn test_release_is_reported_anywhere() {
        let mut input = handler();
        let events = input.translate(PointerSample {
            position: None,
            primary_released: true,
            ..Default::default()
        });
        assert_eq!(events, vec![InputEvent::PointerUp]);
    }
}
