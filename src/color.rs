//! Draw colors.
//!
//! Colors are stored as [`Color32`] everywhere, which already covers 0–255
//! channels. The color chooser edits unit floats (0.0–1.0, straight alpha);
//! these helpers convert between the two.

use egui::Color32;

use crate::error::{ColorError, ColorResult};

/// Color of new strokes at startup and after a reset: opaque black.
pub const DEFAULT_COLOR: Color32 = Color32::BLACK;

/// Builds a color from 0.0–1.0 channels.
///
/// Every channel is validated; NaN and values outside the unit range are
/// rejected rather than clamped.
pub fn from_rgba_unit(r: f32, g: f32, b: f32, a: f32) -> ColorResult<Color32> {
    Ok(Color32::from_rgba_unmultiplied(
        unit_to_byte("red", r)?,
        unit_to_byte("green", g)?,
        unit_to_byte("blue", b)?,
        unit_to_byte("alpha", a)?,
    ))
}

/// Splits a color back into unit-float channels.
pub fn to_rgba_unit(color: Color32) -> [f32; 4] {
    color
        .to_srgba_unmultiplied()
        .map(|channel| channel as f32 / 255.0)
}

fn unit_to_byte(channel: &'static str, value: f32) -> ColorResult<u8> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorError::ChannelOutOfRange { channel, value });
    }
    Ok((value * 255.0).round() as u8)
}
