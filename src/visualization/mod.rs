pub mod render;
pub mod glow;
pub mod twostar_vis2d;
pub mod headless;
