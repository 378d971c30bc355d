//! Colour data carried by bodies for the renderer
//!
//! Colours are plain RGBA bytes; the physics never reads them

use rand::Rng;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with opacity scaled by `factor` (clamped to [0, 1])
    pub fn faded(self, factor: f64) -> Self {
        let a = (self.a as f64 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

/// Core fill and halo stroke colour of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    pub core: Rgba,
    pub halo: Rgba,
}

pub const WHITE_STAR_SET: ColorSet = ColorSet {
    core: Rgba::rgb(253, 253, 255),
    halo: Rgba::rgb(128, 168, 237),
};

pub const PINK_STAR_SET: ColorSet = ColorSet {
    core: Rgba::rgb(255, 255, 255),
    halo: Rgba::rgb(250, 222, 226),
};

impl Default for ColorSet {
    fn default() -> Self {
        WHITE_STAR_SET
    }
}

/// Named colour sets selectable from scenario files
/// `color_set: "white"` or `color_set: "pink"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSetName {
    #[default]
    #[serde(rename = "white")]
    White,

    #[serde(rename = "pink")]
    Pink,
}

impl From<ColorSetName> for ColorSet {
    fn from(name: ColorSetName) -> Self {
        match name {
            ColorSetName::White => WHITE_STAR_SET,
            ColorSetName::Pink => PINK_STAR_SET,
        }
    }
}

/// Alpha of every trail dot
pub const TRAIL_ALPHA: u8 = 150;

/// Pick a semi-transparent bluish trail colour
/// red in [200, 255], green in [100, 255], full blue
pub fn random_trail_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    Rgba::rgba(
        rng.gen_range(200..=255),
        rng.gen_range(100..=255),
        255,
        TRAIL_ALPHA,
    )
}
