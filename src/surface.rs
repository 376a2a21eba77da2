use egui::{Color32, Painter, Pos2, Vec2};

use crate::color::DEFAULT_COLOR;
use crate::config::{DEFAULT_ERASE_THRESHOLD, DEFAULT_LINE_WIDTH};
use crate::input::PointerEvent;
use crate::stroke::Stroke;

/// The drawing canvas model: every stroke drawn so far, the color used for
/// new strokes and whether pointer input draws or erases.
///
/// Coordinates are canvas-local and unconstrained; every operation is total.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    /// Draw order, which is also render order
    strokes: Vec<Stroke>,
    current_color: Color32,
    eraser_mode: bool,
    /// True between a pointer-down in draw mode and the matching pointer-up.
    /// The in-progress stroke is always `strokes.last()`.
    drawing: bool,
    line_width: f32,
    erase_threshold: f32,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH, DEFAULT_ERASE_THRESHOLD)
    }
}

impl DrawingSurface {
    pub fn new(line_width: f32, erase_threshold: f32) -> Self {
        Self {
            strokes: Vec::new(),
            current_color: DEFAULT_COLOR,
            eraser_mode: false,
            drawing: false,
            line_width,
            erase_threshold,
        }
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Erase at `pos` in eraser mode, otherwise start a new stroke there
    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.eraser_mode {
            self.erase_at(pos);
            return;
        }

        self.strokes
            .push(Stroke::new(self.current_color, self.line_width, pos));
        self.drawing = true;
        log::debug!("Stroke {} started at {:?}", self.strokes.len(), pos);
    }

    /// Erase at `pos` in eraser mode, otherwise extend the stroke in progress
    pub fn pointer_move(&mut self, pos: Pos2) {
        if self.eraser_mode {
            self.erase_at(pos);
            return;
        }

        if let Some(stroke) = self.current_stroke_mut() {
            stroke.add_point(pos);
        }
    }

    /// Finish the stroke in progress, if any
    pub fn pointer_up(&mut self) {
        if !self.drawing {
            return;
        }
        self.drawing = false;
        if let Some(stroke) = self.strokes.last() {
            log::debug!("Stroke finished with {} points", stroke.points().len());
        }
    }

    /// Remove every point within the erase threshold of `pos` on both axes.
    ///
    /// Strokes are thinned in place and never split, so a stroke can end up
    /// with gaps or no points at all. Returns the number of points removed.
    pub fn erase_at(&mut self, pos: Pos2) -> usize {
        let threshold = self.erase_threshold;
        let removed: usize = self
            .strokes
            .iter_mut()
            .map(|stroke| stroke.erase_near(pos, threshold))
            .sum();
        if removed > 0 {
            log::debug!("Erased {} points around {:?}", removed, pos);
        }
        removed
    }

    /// Color for strokes started from now on. Existing strokes keep theirs.
    pub fn set_color(&mut self, color: Color32) {
        self.current_color = color;
    }

    pub fn toggle_eraser(&mut self) {
        self.set_eraser(!self.eraser_mode);
    }

    pub fn set_eraser(&mut self, enabled: bool) {
        self.eraser_mode = enabled;
        log::info!("Eraser mode {}", if enabled { "on" } else { "off" });
    }

    pub fn delete_all(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    /// Delete all strokes and restore the default color and draw mode
    pub fn reset(&mut self) {
        self.delete_all();
        self.current_color = DEFAULT_COLOR;
        self.eraser_mode = false;
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current_color(&self) -> Color32 {
        self.current_color
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser_mode
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn erase_threshold(&self) -> f32 {
        self.erase_threshold
    }

    /// Total number of points across all strokes
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.points().len()).sum()
    }

    /// Paint all strokes in draw order, with local coordinates anchored at `origin`
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset: Vec2 = origin.to_vec2();
        for stroke in &self.strokes {
            stroke.paint(painter, offset);
        }
    }

    fn current_stroke_mut(&mut self) -> Option<&mut Stroke> {
        if self.drawing {
            self.strokes.last_mut()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_surface_starts_idle() {
        let surface = DrawingSurface::default();
        assert!(surface.strokes().is_empty());
        assert_eq!(surface.current_color(), Color32::BLACK);
        assert!(!surface.is_eraser());
        assert!(!surface.is_drawing());
        assert_eq!(surface.line_width(), 2.0);
        assert_eq!(surface.erase_threshold(), 10.0);
    }

    #[test]
    fn test_in_progress_stroke_is_last() {
        let mut surface = DrawingSurface::default();
        surface.pointer_down(pos2(0.0, 0.0));
        surface.pointer_up();
        surface.pointer_down(pos2(100.0, 100.0));
        surface.pointer_move(pos2(101.0, 101.0));

        assert!(surface.is_drawing());
        assert_eq!(surface.strokes()[0].points(), &[pos2(0.0, 0.0)]);
        assert_eq!(
            surface.strokes()[1].points(),
            &[pos2(100.0, 100.0), pos2(101.0, 101.0)]
        );
    }

    #[test]
    fn test_move_after_up_is_ignored() {
        let mut surface = DrawingSurface::default();
        surface.pointer_down(pos2(0.0, 0.0));
        surface.pointer_up();
        surface.pointer_move(pos2(9.0, 9.0));
        assert_eq!(surface.point_count(), 1);
    }

    #[test]
    fn test_pointer_up_without_stroke_is_noop() {
        let mut surface = DrawingSurface::default();
        surface.pointer_up();
        assert!(!surface.is_drawing());
        assert!(surface.strokes().is_empty());
    }

    #[test]
    fn test_eraser_down_does_not_create_stroke() {
        let mut surface = DrawingSurface::default();
        surface.toggle_eraser();
        surface.pointer_down(pos2(0.0, 0.0));
        surface.pointer_move(pos2(1.0, 1.0));
        assert!(surface.strokes().is_empty());
        assert!(!surface.is_drawing());
    }

    #[test]
    fn test_custom_threshold_applies() {
        let mut surface = DrawingSurface::new(2.0, 3.0);
        surface.pointer_down(pos2(0.0, 0.0));
        surface.pointer_move(pos2(5.0, 0.0));
        surface.pointer_up();
        assert_eq!(surface.erase_at(pos2(0.0, 0.0)), 1);
        assert_eq!(surface.strokes()[0].points(), &[pos2(5.0, 0.0)]);
    }

    #[test]
    fn test_delete_all_ends_stroke_in_progress() {
        let mut surface = DrawingSurface::default();
        surface.pointer_down(pos2(0.0, 0.0));
        surface.delete_all();
        assert!(!surface.is_drawing());
        surface.pointer_move(pos2(2.0, 2.0));
        assert!(surface.strokes().is_empty());
    }
}
