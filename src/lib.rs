//! # hsv-picker-core
//!
//! Color-space and pointer-geometry core for HSV color pickers.
//!
//! Provides RGB ↔ HSV conversion, the mappings between pointer positions and
//! HSV components for the hue wheel, palette squares and linear sliders, and
//! a theme-color sampler for bitmaps. Views (for example a Floem widget) feed
//! it center-relative pointer vectors and get plain colors back; geometry
//! uses the `kurbo` types Floem re-exports.
//!
//! ## Usage
//!
//! ```rust
//! use floem::kurbo::{Size, Vec2};
//! use hsv_picker_core::{Hsv, Rgba, WheelLayout, WheelRegion};
//!
//! let layout = WheelLayout::from_size(Size::new(200.0, 200.0));
//! let hsv = Rgba::from_hex("3B82F6").unwrap().to_hsv();
//!
//! // A press on the ring straight below the center picks hue 90°.
//! let v = Vec2::new(0.0, layout.radius());
//! assert_eq!(layout.hit(v), Some(WheelRegion::Ring));
//! let picked: Hsv = layout.apply(WheelRegion::Ring, hsv, v);
//! assert!((picked.h() - 90.0).abs() < 1e-9);
//! ```

mod color;
pub mod constants;
mod error;
pub mod gesture;
pub mod math;
pub mod palette;
pub mod slider;
pub mod square;
pub mod swatches;
pub mod theme;
pub mod wheel;

pub use color::{GradientStop, Hsv, Rgba};
pub use error::ColorError;
pub use gesture::{Drag, DragPhase, DragUpdate};
pub use math::{hsv_to_rgb, hue_to_rgb, normalize_hex, rgb_to_hsv};
pub use palette::{PaletteAxis, PaletteSquare};
pub use slider::{LinearTrack, RgbChannel};
pub use swatches::{gray_ramp, swatch_rows, tonal_ramp, Swatch};
#[cfg(feature = "image")]
pub use theme::theme_color_from_image;
pub use theme::extract_theme_color;
pub use wheel::{WheelLayout, WheelRegion};
