//! Physical and astronomical constants.
//!
//! Values are SI unless the doc comment says otherwise. Derived constants are
//! evaluated at compile time from the literals above them.

pub use std::f64::consts::PI;

// General

/// Gravitational constant in N·m²/kg²
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

// Electrodynamics

/// Elementary charge in C
pub const ELEMENTARY_CHARGE: f64 = 1.60217662e-19;

/// Permeability of free space in N/A²
pub const VACUUM_PERMEABILITY: f64 = (4.0 * PI) * 1e-7;

/// Permittivity of free space in m⁻³·kg⁻¹·s⁴·A²
///
/// \[\epsilon_0 = \frac{1}{\mu_0 c^2}\]
pub const VACUUM_PERMITTIVITY: f64 =
    1.0 / (VACUUM_PERMEABILITY * (SPEED_OF_LIGHT * SPEED_OF_LIGHT));

// Quantum

/// Planck constant in J·s
pub const PLANCK_CONSTANT: f64 = 6.62607004e-34;

/// Reduced Planck constant in J·s
pub const REDUCED_PLANCK_CONSTANT: f64 = PLANCK_CONSTANT / (2.0 * PI);

/// Proton mass in kg
pub const PROTON_MASS: f64 = 1.6726219e-27;

/// Electron mass in kg
pub const ELECTRON_MASS: f64 = 9.10938356e-31;

/// Neutron mass in kg
pub const NEUTRON_MASS: f64 = 1.67492716e-27;

/// Helium-4 mass in kg
pub const HELIUM_MASS: f64 = 6.646476406e-27;

/// Atomic mass unit in kg
pub const ATOMIC_MASS_UNIT: f64 = 1.66053873e-27;

/// Atomic mass unit in MeV/c²
pub const ATOMIC_MASS_UNIT_MEV: f64 = 931.4940123;

/// Avogadro's number in mol⁻¹
pub const AVOGADRO_NUMBER: f64 = 6.02214199e23;

/// Bohr radius in meters
pub const BOHR_RADIUS: f64 = 5.294654075e-11;

// Statistical mechanics and thermodynamics

/// Boltzmann constant in J/K
pub const BOLTZMANN_CONSTANT: f64 = 1.38064852e-23;

/// Boltzmann constant in eV/K
pub const BOLTZMANN_CONSTANT_EV: f64 = 8.6173324e-5;

/// Stefan-Boltzmann constant in W/(m²·K⁴)
///
/// \[\sigma = \frac{2\pi^5 k_B^4}{15 c^2 h^3}\]
pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 2.0
    * (PI * PI * PI * PI * PI)
    * (BOLTZMANN_CONSTANT * BOLTZMANN_CONSTANT * BOLTZMANN_CONSTANT * BOLTZMANN_CONSTANT)
    / (15.0
        * (SPEED_OF_LIGHT * SPEED_OF_LIGHT)
        * (PLANCK_CONSTANT * PLANCK_CONSTANT * PLANCK_CONSTANT));

/// Radiation constant in J/(m³·K⁴)
pub const RADIATION_CONSTANT: f64 = 4.0 * STEFAN_BOLTZMANN_CONSTANT / SPEED_OF_LIGHT;

// Solar

/// Mass of the Sun in kg
pub const SOLAR_MASS: f64 = 1.9891e30;

/// Radius of the Sun in meters
pub const SOLAR_RADIUS: f64 = 6.955e8;

/// Density of the solar core in kg/m³
pub const SOLAR_CORE_DENSITY: f64 = 1.4e5;

/// Luminosity of the Sun in W
pub const SOLAR_LUMINOSITY: f64 = 3.839e26;

/// Effective temperature of the Sun in K
pub const SOLAR_EFFECTIVE_TEMPERATURE: f64 = 5777.0;

// Earth and Moon

/// Mass of the Earth in kg
pub const EARTH_MASS: f64 = 5.9736e24;

/// Radius of the Earth in meters
pub const EARTH_RADIUS: f64 = 6.378136e6;

/// Mass of the Moon in kg
pub const MOON_MASS: f64 = 7.34767309e22;

/// Radius of the Moon in meters
pub const MOON_RADIUS: f64 = 1.7371e6;

// Misc. astronomical

/// Astronomical unit in meters
pub const ASTRONOMICAL_UNIT: f64 = 1.4959787066e11;

/// Light year in meters
pub const LIGHT_YEAR: f64 = 9.460730472e15;

/// Parsec in meters
pub const PARSEC: f64 = 3.0856776e16;

/// Parsec in AU
pub const PARSEC_AU: f64 = 2.06264806e5;

/// Parsec in light years
pub const PARSEC_LY: f64 = 3.2615638;
