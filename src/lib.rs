#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod dialog;
pub mod error;
pub mod input;
pub mod panels;
pub mod stroke;
pub mod surface;

pub use app::{AppAction, SketchApp};
pub use config::Settings;
pub use dialog::{ColorPickerDialog, DialogOutcome, DialogState};
pub use error::ColorError;
pub use input::{PointerEvent, PointerSample, PointerTracker};
pub use stroke::Stroke;
pub use surface::DrawingSurface;
