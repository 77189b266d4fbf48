//! Front ends for the reconciliation core.
//!
//! [`PolybarRenderer`] prints one polybar line per frame; [`StdoutProgressView`]
//! prints progress fractions for widgets that read them from a pipe.

mod bar;
pub mod icons;
pub mod polybar;
mod progress;
pub mod text;

pub use bar::PolybarRenderer;
pub use progress::StdoutProgressView;
