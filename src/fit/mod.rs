//! Local least-squares fitting over index windows.
//!
//! `window` turns half-widths into concrete index windows, `quadratic` fits
//! `y = a0 + a1 x + a2 x^2` over such a window in closed form.

pub mod quadratic;
pub mod window;

pub use quadratic::QuadraticFit;
pub use window::{full_width, select_window_around_pivot};
