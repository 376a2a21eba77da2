use egui::{Color32, Response, Sense, Ui};

use crate::app::AppAction;

/// Square icon button used in the toolbar
pub struct ToolButton {
    pub action: AppAction,
    pub icon: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub const SIZE: f32 = 40.0;

    pub fn new(action: AppAction, icon: &'static str, selected: bool) -> Self {
        Self {
            action,
            icon,
            selected,
        }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let button_size = egui::vec2(Self::SIZE, Self::SIZE);
        let (rect, response) = ui.allocate_exact_size(button_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                Color32::from_gray(225)
            } else {
                Color32::TRANSPARENT
            };

            ui.painter().rect_filled(rect, 20.0, bg_color);

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(24.0),
                if ui.is_enabled() {
                    Color32::from_gray(40)
                } else {
                    Color32::from_gray(170)
                },
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    20.0,
                    egui::Stroke::new(2.0, Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.action.label())
    }
}
