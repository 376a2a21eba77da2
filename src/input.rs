use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events delivered to the drawing surface, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger or primary button went down on the canvas
    Down(Pos2),
    /// Pointer moved while held
    Move(Pos2),
    /// Finger lifted or button released
    Up,
}

/// Raw pointer state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Latest known pointer position in screen coordinates
    pub pos: Option<Pos2>,
    /// Primary button (or touch) went down this frame
    pub pressed: bool,
    /// Primary button (or touch) is currently held
    pub down: bool,
    /// Primary button (or touch) was released this frame
    pub released: bool,
}

impl PointerSample {
    /// Read this frame's primary pointer state from egui.
    /// Touches are reported by egui as the primary pointer.
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.latest_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            down: input.pointer.button_down(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        })
    }
}

/// Converts per-frame pointer samples into down/move/up events.
///
/// A gesture only starts on a press inside the canvas; once started it keeps
/// reporting moves wherever the pointer goes until it is released.
#[derive(Debug, Default)]
pub struct PointerTracker {
    active: bool,
    last_pos: Option<Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press on the canvas is currently held
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Process egui's input for this frame
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<PointerEvent> {
        self.process_sample(PointerSample::from_egui(ctx), canvas_rect)
    }

    /// Turn one frame's sample into events, in down, move, up order
    pub fn process_sample(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if sample.pressed && !self.active {
            if let Some(pos) = sample.pos.filter(|pos| canvas_rect.contains(*pos)) {
                events.push(PointerEvent::Down(to_local(pos)));
                self.active = true;
                self.last_pos = Some(pos);
            }
        }

        if self.active && sample.down {
            if let Some(pos) = sample.pos {
                if Some(pos) != self.last_pos {
                    events.push(PointerEvent::Move(to_local(pos)));
                    self.last_pos = Some(pos);
                }
            }
        }

        if self.active && (sample.released || !sample.down) {
            events.push(PointerEvent::Up);
            self.active = false;
            self.last_pos = None;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(0.0, 48.0), vec2(360.0, 592.0))
    }

    fn sample(pos: Pos2, pressed: bool, down: bool, released: bool) -> PointerSample {
        PointerSample {
            pos: Some(pos),
            pressed,
            down,
            released,
        }
    }

    #[test]
    fn test_press_drag_release() {
        let mut tracker = PointerTracker::new();
        let rect = canvas();

        let events = tracker.process_sample(sample(pos2(10.0, 58.0), true, true, false), rect);
        assert_eq!(events, vec![PointerEvent::Down(pos2(10.0, 10.0))]);
        assert!(tracker.is_active());

        let events = tracker.process_sample(sample(pos2(15.0, 60.0), false, true, false), rect);
        assert_eq!(events, vec![PointerEvent::Move(pos2(15.0, 12.0))]);

        // No movement, no event
        let events = tracker.process_sample(sample(pos2(15.0, 60.0), false, true, false), rect);
        assert!(events.is_empty());

        let events = tracker.process_sample(sample(pos2(15.0, 60.0), false, false, true), rect);
        assert_eq!(events, vec![PointerEvent::Up]);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut tracker = PointerTracker::new();
        let rect = canvas();

        // Toolbar area above the canvas
        let events = tracker.process_sample(sample(pos2(10.0, 20.0), true, true, false), rect);
        assert!(events.is_empty());
        let events = tracker.process_sample(sample(pos2(10.0, 80.0), false, true, false), rect);
        assert!(events.is_empty());
        let events = tracker.process_sample(sample(pos2(10.0, 80.0), false, false, true), rect);
        assert!(events.is_empty());
    }

    #[test]
    fn test_drag_leaving_canvas_keeps_reporting() {
        let mut tracker = PointerTracker::new();
        let rect = canvas();
        tracker.process_sample(sample(pos2(10.0, 58.0), true, true, false), rect);

        let events = tracker.process_sample(sample(pos2(10.0, 8.0), false, true, false), rect);
        assert_eq!(events, vec![PointerEvent::Move(pos2(10.0, -40.0))]);
    }

    #[test]
    fn test_tap_within_one_frame() {
        let mut tracker = PointerTracker::new();
        let events = tracker.process_sample(sample(pos2(5.0, 50.0), true, false, true), canvas());
        assert_eq!(
            events,
            vec![PointerEvent::Down(pos2(5.0, 2.0)), PointerEvent::Up]
        );
    }

    #[test]
    fn test_idle_context_produces_nothing() {
        let ctx = Context::default();
        let mut tracker = PointerTracker::new();
        assert!(tracker.process_input(&ctx, canvas()).is_empty());
    }
}
