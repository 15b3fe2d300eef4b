//! Status item icons, drawn in memory.
//!
//! Normal mode is a sun, power-saving mode a crescent moon. Only the alpha
//! channel matters: the icons are installed as macOS template images.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use nap_toggler_core::CombinedMode;
use tray_icon::Icon;

/// Edge length of the square icon in pixels.
pub const ICON_SIZE: u32 = 32;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

const SUN_RADIUS: f32 = 7.0;
const RAY_INNER: f32 = 10.0;
const RAY_OUTER: f32 = 14.0;
const RAY_COUNT: f32 = 8.0;
const RAY_HALF_WIDTH: f32 = 0.12;

const MOON_RADIUS: f32 = 12.0;
const MOON_CUT_RADIUS: f32 = 10.0;
const MOON_CUT_OFFSET: (f32, f32) = (6.0, -4.0);

/// Rasterize the icon for `mode`.
pub fn render(mode: CombinedMode) -> RgbaImage {
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;

    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;

        let filled = match mode {
            CombinedMode::Normal => is_sun(dx, dy),
            CombinedMode::PowerSaving => is_moon(dx, dy),
        };

        if filled { INK } else { CLEAR }
    })
}

/// Build a tray icon for `mode`.
#[track_caller]
pub fn load(mode: CombinedMode) -> AppResult<Icon> {
    let rgba = render(mode);
    let (width, height) = (rgba.width(), rgba.height());

    Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::IconError {
        reason: format!("Failed to create icon from RGBA: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn is_sun(dx: f32, dy: f32) -> bool {
    let distance = dx.hypot(dy);
    if distance <= SUN_RADIUS {
        return true;
    }
    if !(RAY_INNER..=RAY_OUTER).contains(&distance) {
        return false;
    }

    // Angle in units of "rays"; close to a whole number means on a ray.
    let rays = dy.atan2(dx) / std::f32::consts::TAU * RAY_COUNT;
    (rays - rays.round()).abs() <= RAY_HALF_WIDTH
}

fn is_moon(dx: f32, dy: f32) -> bool {
    let in_disc = dx.hypot(dy) <= MOON_RADIUS;
    let in_cut = (dx - MOON_CUT_OFFSET.0).hypot(dy - MOON_CUT_OFFSET.1) <= MOON_CUT_RADIUS;
    in_disc && !in_cut
}
