use egui::Color32;

use crate::config::Settings;
use crate::dialog::{ColorPickerDialog, DialogOutcome};
use crate::input::{PointerEvent, PointerTracker};
use crate::panels::{central_panel, tools_panel};
use crate::surface::DrawingSurface;

/// The user-facing actions offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    OpenColorPicker,
    ToggleEraser,
    DeleteAll,
    Reset,
}

impl AppAction {
    /// Toolbar order
    pub const ALL: [AppAction; 4] = [
        AppAction::OpenColorPicker,
        AppAction::ToggleEraser,
        AppAction::DeleteAll,
        AppAction::Reset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AppAction::OpenColorPicker => "Choose color",
            AppAction::ToggleEraser => "Eraser",
            AppAction::DeleteAll => "Delete all",
            AppAction::Reset => "Reset",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppAction::OpenColorPicker => "🎨",
            AppAction::ToggleEraser => "⌫",
            AppAction::DeleteAll => "🗑",
            AppAction::Reset => "🔄",
        }
    }
}

/// Top-level application: a toolbar over a drawing canvas
pub struct SketchApp {
    settings: Settings,
    surface: DrawingSurface,
    color_dialog: ColorPickerDialog,
    pointer: PointerTracker,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let settings = Settings::load(cc.storage);
        log::info!("Starting with {:?}", settings);
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        let settings = settings.sanitized();
        Self {
            settings,
            surface: DrawingSurface::new(settings.line_width, settings.erase_threshold),
            color_dialog: ColorPickerDialog::new(),
            pointer: PointerTracker::new(),
        }
    }

    /// Run one toolbar action.
    ///
    /// While the color picker is open only `Reset` goes through, and it
    /// dismisses the picker.
    pub fn perform(&mut self, action: AppAction) {
        if self.color_dialog.is_open() && action != AppAction::Reset {
            log::debug!("Ignoring {} while the color picker is open", action.label());
            return;
        }

        log::info!("Action: {}", action.label());
        match action {
            AppAction::OpenColorPicker => self.color_dialog.open(self.surface.current_color()),
            AppAction::ToggleEraser => self.surface.toggle_eraser(),
            AppAction::DeleteAll => self.surface.delete_all(),
            AppAction::Reset => {
                self.surface.reset();
                self.color_dialog.close();
            }
        }
    }

    /// Apply what the user did in the color picker
    pub fn apply_dialog_outcome(&mut self, outcome: DialogOutcome) {
        self.color_dialog.close();
        match outcome {
            DialogOutcome::Selected(color) => {
                log::info!("Draw color set to {:?}", color);
                self.surface.set_color(color);
            }
            DialogOutcome::Cancelled => log::debug!("Color selection cancelled"),
        }
    }

    /// Lay out one frame: toolbar, canvas, then the color picker on top
    pub fn ui(&mut self, ctx: &egui::Context) {
        tools_panel(self, ctx);
        central_panel(self, ctx);

        if let Some(outcome) = self.color_dialog.show(ctx) {
            self.apply_dialog_outcome(outcome);
        }
    }

    /// Forward pointer events to the canvas. Ignored while the picker is open.
    pub fn handle_pointer_events(&mut self, events: &[PointerEvent]) {
        if self.color_dialog.is_open() {
            return;
        }
        for event in events {
            self.surface.handle(*event);
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    pub fn color_dialog(&self) -> &ColorPickerDialog {
        &self.color_dialog
    }

    pub fn color_dialog_mut(&mut self) -> &mut ColorPickerDialog {
        &mut self.color_dialog
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn background(&self) -> Color32 {
        self.settings.background
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save settings before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
