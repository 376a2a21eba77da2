use egui::{Color32, Painter, Pos2, Shape, Stroke as EguiStroke, Vec2};

/// One freehand line: an ordered run of points with a color and width that
/// are fixed when the stroke is started.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    /// Start a stroke at `start`
    pub fn new(color: Color32, thickness: f32, start: Pos2) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop every point lying inside the square of half-size `threshold`
    /// around `center`, keeping the rest in their original order.
    ///
    /// A point survives when it is farther than `threshold` on at least one
    /// axis. Returns how many points were removed.
    pub fn erase_near(&mut self, center: Pos2, threshold: f32) -> usize {
        let before = self.points.len();
        self.points
            .retain(|p| (p.x - center.x).abs() > threshold || (p.y - center.y).abs() > threshold);
        before - self.points.len()
    }

    /// Paint the stroke, shifting its local points by `offset`.
    ///
    /// Erasing may leave gaps between surviving points; the survivors are
    /// still drawn as a single polyline.
    pub fn paint(&self, painter: &Painter, offset: Vec2) {
        match self.points.as_slice() {
            [] => {}
            [single] => {
                painter.circle_filled(*single + offset, self.thickness / 2.0, self.color);
            }
            points => {
                let shifted: Vec<Pos2> = points.iter().map(|p| *p + offset).collect();
                painter.add(Shape::line(
                    shifted,
                    EguiStroke::new(self.thickness, self.color),
                ));
            }
        }
    }
}
