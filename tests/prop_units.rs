//! Property-based tests for the energy conversions and the registry.

use physcalc::constants::*;
use physcalc::table::{lookup, CONSTANTS};
use physcalc::units::{ev2j, j2ev, JOULES_TO_EV};
use proptest::prelude::*;

// ── Joules to electron-volts ─────────────────────────────────────────

proptest! {
    /// The conversion is a fixed scale factor.
    #[test]
    fn j2ev_is_scaling(joules in -1.0e6f64..1.0e6) {
        prop_assert_eq!(j2ev(joules), joules * JOULES_TO_EV);
    }

    /// Sign is preserved, zero maps to zero.
    #[test]
    fn j2ev_preserves_sign(joules in -1.0e3f64..1.0e3) {
        let ev = j2ev(joules);
        prop_assert_eq!(ev == 0.0, joules == 0.0);
        if joules != 0.0 {
            prop_assert_eq!(ev.is_sign_negative(), joules.is_sign_negative());
        }
    }

    /// j2ev(a + b) = j2ev(a) + j2ev(b) up to rounding.
    #[test]
    fn j2ev_is_additive(a in -1.0e-10f64..1.0e-10, b in -1.0e-10f64..1.0e-10) {
        let lhs = j2ev(a + b);
        let rhs = j2ev(a) + j2ev(b);
        let scale = j2ev(a).abs() + j2ev(b).abs();
        prop_assert!((lhs - rhs).abs() <= 1e-12 * scale + f64::MIN_POSITIVE);
    }

    /// ev2j undoes j2ev.
    #[test]
    fn ev2j_inverts_j2ev(joules in -1.0e-6f64..1.0e-6) {
        let back = ev2j(j2ev(joules));
        prop_assert!((back - joules).abs() <= 1e-15 * joules.abs() + f64::MIN_POSITIVE);
    }
}

// ── Registry ─────────────────────────────────────────────────────────

proptest! {
    /// Lookups never drift, however often they are repeated.
    #[test]
    fn lookup_is_stable(index in 0usize..33, repeats in 1usize..16) {
        let constant = &CONSTANTS[index];
        for _ in 0..repeats {
            let found = lookup(constant.symbol).unwrap();
            prop_assert_eq!(found.value.to_bits(), constant.value.to_bits());
            prop_assert_eq!(found.symbol, constant.symbol);
        }
    }

    /// Name lookup ignores case and agrees with symbol lookup.
    #[test]
    fn name_and_symbol_lookup_agree(index in 0usize..33, upper in any::<bool>()) {
        let constant = &CONSTANTS[index];
        let name = if upper {
            constant.name.to_uppercase()
        } else {
            constant.name.to_lowercase()
        };
        let by_name = lookup(&name).unwrap();
        let by_symbol = lookup(constant.symbol).unwrap();
        prop_assert_eq!(by_name, by_symbol);
    }
}

// ── Derived constants ────────────────────────────────────────────────

#[test]
fn derived_relations_hold() {
    let maxwell = VACUUM_PERMITTIVITY * VACUUM_PERMEABILITY * SPEED_OF_LIGHT.powi(2);
    assert!((maxwell - 1.0).abs() < 1e-12);

    let hbar = PLANCK_CONSTANT / (2.0 * PI);
    assert!((REDUCED_PLANCK_CONSTANT - hbar).abs() <= f64::EPSILON * hbar);

    let sigma = 2.0 * PI.powi(5) * BOLTZMANN_CONSTANT.powi(4)
        / (15.0 * SPEED_OF_LIGHT.powi(2) * PLANCK_CONSTANT.powi(3));
    assert!((STEFAN_BOLTZMANN_CONSTANT / sigma - 1.0).abs() < 1e-12);
}

#[test]
fn registry_values_are_the_const_bindings() {
    let pairs = [
        ("G", GRAVITATIONAL_CONSTANT),
        ("ep_0", VACUUM_PERMITTIVITY),
        ("hbar", REDUCED_PLANCK_CONSTANT),
        ("a_rad", RADIATION_CONSTANT),
        ("Tsun", SOLAR_EFFECTIVE_TEMPERATURE),
        ("pc_ly", PARSEC_LY),
    ];
    for (symbol, value) in pairs {
        assert_eq!(lookup(symbol).unwrap().value.to_bits(), value.to_bits());
    }
}
