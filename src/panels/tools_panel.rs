use crate::app::{AppAction, SketchApp};
use crate::components::ToolButton;

/// Height of the toolbar strip above the canvas
pub const TOOLBAR_HEIGHT: f32 = 48.0;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel")
        .resizable(false)
        .exact_height(TOOLBAR_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                // The color picker is modal: the toolbar is inert while it is open
                let enabled = !app.color_dialog().is_open();
                ui.add_enabled_ui(enabled, |ui| {
                    for action in AppAction::ALL {
                        let selected = action == AppAction::ToggleEraser && app.surface().is_eraser();
                        if ToolButton::new(action, action.icon(), selected).show(ui).clicked() {
                            app.perform(action);
                        }
                    }
                });
            });
        });
}
