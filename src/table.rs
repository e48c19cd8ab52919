//! Registry describing every constant in [`crate::constants`].
//!
//! The registry carries the symbol, unit and domain that the bare `const`
//! bindings cannot, so constants can be listed and looked up by name.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::*;
use crate::error::{PhysCalcError, PhysCalcResult};

/// Physics domain a constant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    General,
    Electrodynamics,
    Quantum,
    /// Statistical mechanics and thermodynamics.
    Thermodynamics,
    Solar,
    /// Earth and Moon.
    Planetary,
    /// Distance scales and other astronomical constants.
    Astronomical,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::General,
        Domain::Electrodynamics,
        Domain::Quantum,
        Domain::Thermodynamics,
        Domain::Solar,
        Domain::Planetary,
        Domain::Astronomical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::General => "general",
            Domain::Electrodynamics => "electrodynamics",
            Domain::Quantum => "quantum",
            Domain::Thermodynamics => "thermodynamics",
            Domain::Solar => "solar",
            Domain::Planetary => "planetary",
            Domain::Astronomical => "astronomical",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = PhysCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PhysCalcError::UnknownDomain(s.to_string()))
    }
}

/// A named, immutable physical constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstant {
    /// Short symbol, e.g. `hbar`.
    pub symbol: &'static str,
    pub name: &'static str,
    pub value: f64,
    /// Informal unit annotation. Not checked.
    pub unit: &'static str,
    pub domain: Domain,
    /// True when the value is computed from other constants.
    pub derived: bool,
}

const fn literal(
    symbol: &'static str,
    name: &'static str,
    value: f64,
    unit: &'static str,
    domain: Domain,
) -> PhysicalConstant {
    PhysicalConstant {
        symbol,
        name,
        value,
        unit,
        domain,
        derived: false,
    }
}

const fn derived(
    symbol: &'static str,
    name: &'static str,
    value: f64,
    unit: &'static str,
    domain: Domain,
) -> PhysicalConstant {
    PhysicalConstant {
        derived: true,
        ..literal(symbol, name, value, unit, domain)
    }
}

/// Every constant, grouped by domain.
#[rustfmt::skip]
pub static CONSTANTS: &[PhysicalConstant] = &[
    literal("G", "Gravitational constant", GRAVITATIONAL_CONSTANT, "N m^2 kg^-2", Domain::General),
    literal("c", "Speed of light", SPEED_OF_LIGHT, "m s^-1", Domain::General),
    literal("e", "Elementary charge", ELEMENTARY_CHARGE, "C", Domain::Electrodynamics),
    derived("mu_0", "Permeability of free space", VACUUM_PERMEABILITY, "N A^-2", Domain::Electrodynamics),
    derived("ep_0", "Permittivity of free space", VACUUM_PERMITTIVITY, "m^-3 kg^-1 s^4 A^2", Domain::Electrodynamics),
    literal("h", "Planck constant", PLANCK_CONSTANT, "J s", Domain::Quantum),
    derived("hbar", "Reduced Planck constant", REDUCED_PLANCK_CONSTANT, "J s", Domain::Quantum),
    literal("mp", "Proton mass", PROTON_MASS, "kg", Domain::Quantum),
    literal("me", "Electron mass", ELECTRON_MASS, "kg", Domain::Quantum),
    literal("mn", "Neutron mass", NEUTRON_MASS, "kg", Domain::Quantum),
    literal("mHe", "Helium mass", HELIUM_MASS, "kg", Domain::Quantum),
    literal("amu", "Atomic mass unit", ATOMIC_MASS_UNIT, "kg", Domain::Quantum),
    literal("amu_ev", "Atomic mass unit energy", ATOMIC_MASS_UNIT_MEV, "MeV c^-2", Domain::Quantum),
    literal("NA", "Avogadro number", AVOGADRO_NUMBER, "mol^-1", Domain::Quantum),
    literal("a0", "Bohr radius", BOHR_RADIUS, "m", Domain::Quantum),
    literal("Kb", "Boltzmann constant", BOLTZMANN_CONSTANT, "J K^-1", Domain::Thermodynamics),
    literal("Kbev", "Boltzmann constant in eV", BOLTZMANN_CONSTANT_EV, "eV K^-1", Domain::Thermodynamics),
    derived("sigmaSB", "Stefan-Boltzmann constant", STEFAN_BOLTZMANN_CONSTANT, "W m^-2 K^-4", Domain::Thermodynamics),
    derived("a_rad", "Radiation constant", RADIATION_CONSTANT, "J m^-3 K^-4", Domain::Thermodynamics),
    literal("Msun", "Solar mass", SOLAR_MASS, "kg", Domain::Solar),
    literal("Rsun", "Solar radius", SOLAR_RADIUS, "m", Domain::Solar),
    literal("rhocore", "Solar core density", SOLAR_CORE_DENSITY, "kg m^-3", Domain::Solar),
    literal("Lsun", "Solar luminosity", SOLAR_LUMINOSITY, "W", Domain::Solar),
    literal("Tsun", "Solar effective temperature", SOLAR_EFFECTIVE_TEMPERATURE, "K", Domain::Solar),
    literal("Mearth", "Earth mass", EARTH_MASS, "kg", Domain::Planetary),
    literal("Rearth", "Earth radius", EARTH_RADIUS, "m", Domain::Planetary),
    literal("Mmoon", "Moon mass", MOON_MASS, "kg", Domain::Planetary),
    literal("Rmoon", "Moon radius", MOON_RADIUS, "m", Domain::Planetary),
    literal("AU", "Astronomical unit", ASTRONOMICAL_UNIT, "m", Domain::Astronomical),
    literal("ly", "Light year", LIGHT_YEAR, "m", Domain::Astronomical),
    literal("pc_m", "Parsec", PARSEC, "m", Domain::Astronomical),
    literal("pc_au", "Parsec in AU", PARSEC_AU, "AU", Domain::Astronomical),
    literal("pc_ly", "Parsec in light years", PARSEC_LY, "ly", Domain::Astronomical),
];

/// Finds a constant by symbol or name.
///
/// An exact symbol match wins; otherwise symbols and names are compared
/// case-insensitively.
pub fn lookup(query: &str) -> PhysCalcResult<&'static PhysicalConstant> {
    let query = query.trim();
    let found = CONSTANTS.iter().find(|c| c.symbol == query).or_else(|| {
        CONSTANTS.iter().find(|c| {
            c.symbol.eq_ignore_ascii_case(query) || c.name.eq_ignore_ascii_case(query)
        })
    });

    match found {
        Some(constant) => {
            log::trace!("{} -> {} = {:e}", query, constant.symbol, constant.value);
            Ok(constant)
        }
        None => {
            log::debug!("no constant matches {:?}", query);
            Err(PhysCalcError::UnknownConstant(query.to_string()))
        }
    }
}

/// Constants belonging to `domain`, in registry order.
pub fn by_domain(domain: Domain) -> impl Iterator<Item = &'static PhysicalConstant> {
    CONSTANTS.iter().filter(move |c| c.domain == domain)
}
