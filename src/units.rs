//! Energy unit conversions.

use ndarray::{Array, Dimension};

/// Electron-volts per Joule.
pub const JOULES_TO_EV: f64 = 6.242e18;

/// Converts an energy in Joules to electron-volts.
///
/// Zero and negative energies pass through unchanged in sign.
pub fn j2ev(joules: f64) -> f64 {
    joules * JOULES_TO_EV
}

/// Converts an energy in electron-volts to Joules. Inverse of [`j2ev`].
pub fn ev2j(ev: f64) -> f64 {
    ev / JOULES_TO_EV
}

/// Element-wise [`j2ev`] over an array of any dimension.
pub fn j2ev_array<D: Dimension>(joules: &Array<f64, D>) -> Array<f64, D> {
    joules.mapv(j2ev)
}

/// Element-wise [`ev2j`] over an array of any dimension.
pub fn ev2j_array<D: Dimension>(ev: &Array<f64, D>) -> Array<f64, D> {
    ev.mapv(ev2j)
}
