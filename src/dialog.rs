use egui::color_picker::{self, Alpha};
use egui::Color32;

use crate::color;
use crate::error::ColorResult;

/// Window title, also the id of the window's area
pub const TITLE: &str = "Choose Color";

/// Result of a user interaction with the color picker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    Selected(Color32),
    Cancelled,
}

/// Visibility of the color picker. The draft only exists while it is open.
///
/// The draft holds straight-alpha channels in 0.0–1.0; they are validated
/// when the user confirms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        draft: [f32; 4],
    },
}

/// Modal color chooser shown over the canvas
#[derive(Debug, Default)]
pub struct ColorPickerDialog {
    state: DialogState,
}

impl ColorPickerDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    /// Open the picker seeded with `initial`. Reopening keeps the current draft.
    pub fn open(&mut self, initial: Color32) {
        if !self.is_open() {
            self.state = DialogState::Open {
                draft: color::to_rgba_unit(initial),
            };
        }
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Replace the color being edited. Ignored while closed.
    pub fn set_draft(&mut self, color: Color32) {
        if let DialogState::Open { draft } = &mut self.state {
            *draft = color::to_rgba_unit(color);
        }
    }

    /// Validate the draft and close, handing back the chosen color.
    ///
    /// Returns `Ok(None)` when closed. An invalid draft leaves the dialog open.
    pub fn confirm(&mut self) -> ColorResult<Option<Color32>> {
        let DialogState::Open { draft: [r, g, b, a] } = self.state else {
            return Ok(None);
        };
        let chosen = color::from_rgba_unit(r, g, b, a)?;
        self.close();
        Ok(Some(chosen))
    }

    /// Close without choosing a color
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Render the dialog if open and report what the user did this frame
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        let DialogState::Open { draft } = &mut self.state else {
            return None;
        };

        let mut select_clicked = false;
        let mut cancel_clicked = false;
        egui::Window::new(TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let parsed = color::from_rgba_unit(draft[0], draft[1], draft[2], draft[3]);

                if let Ok(mut preview) = parsed {
                    if color_picker::color_picker_color32(ui, &mut preview, Alpha::OnlyBlend) {
                        *draft = color::to_rgba_unit(preview);
                    }
                }

                // Channels typed by hand are not clamped; out of range values block Select
                ui.horizontal(|ui| {
                    for (label, channel) in ["R", "G", "B", "A"].into_iter().zip(draft.iter_mut()) {
                        ui.label(label);
                        ui.add(egui::DragValue::new(channel).speed(0.01).max_decimals(3));
                    }
                });
                if let Err(err) = &parsed {
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                }

                ui.separator();
                ui.horizontal(|ui| {
                    select_clicked = ui
                        .add_enabled(parsed.is_ok(), egui::Button::new("Select"))
                        .clicked();
                    cancel_clicked = ui.button("Cancel").clicked();
                });
            });

        if cancel_clicked {
            self.cancel();
            return Some(DialogOutcome::Cancelled);
        }
        if select_clicked {
            match self.confirm() {
                Ok(chosen) => return chosen.map(DialogOutcome::Selected),
                Err(err) => log::warn!("Color not applied: {}", err),
            }
        }
        None
    }
}
