//! Built-in family table and simulator registrations.

use crate::config::{Config, FamilyConfig, SimulatorConfig};
use crate::registry::Registry;

const FAMILIES: &[(&str, &str, &str)] = &[
    (
        "default_family",
        "Default SIMH simulator family.",
        "The SIMH simulator collection of historical processors and computing systems that do not belong to\n\
         any other simulated system family",
    ),
    (
        "pdp10_family",
        "DEC PDP-10 collection",
        "DEC PDP-10 architecture simulators and variants.",
    ),
    (
        "b5500_family",
        "Burroughs 5500",
        "The Burroughs 5500 system simulator",
    ),
    ("ibm_family", "IBM", "IBM system simulators"),
    (
        "ict_family",
        "ICT",
        "International Computers and Tabulators simulators",
    ),
    ("gould_family", "Gould simulators", "Gould Systems simulators"),
];

const SIMULATORS: &[(&str, &str)] = &[
    ("b5500", "b5500_family"),
    ("i701", "ibm_family"),
    ("i7010", "ibm_family"),
    ("i704", "ibm_family"),
    ("i7070", "ibm_family"),
    ("i7080", "ibm_family"),
    ("i7090", "ibm_family"),
    ("ibm360", "ibm_family"),
    ("icl1900", "ict_family"),
    ("pdp10-ka", "pdp10_family"),
    ("pdp10-ki", "pdp10_family"),
    ("pdp10-kl", "pdp10_family"),
    ("pdp10-ks", "pdp10_family"),
    ("pdp6", "pdp10_family"),
    ("sel32", "gould_family"),
];

pub fn config() -> Config {
    Config {
        families: FAMILIES
            .iter()
            .map(|&(token, display_name, description)| FamilyConfig {
                token: token.to_string(),
                display_name: display_name.to_string(),
                description: description.to_string(),
            })
            .collect(),
        simulators: SIMULATORS
            .iter()
            .map(|&(name, family)| SimulatorConfig {
                name: name.to_string(),
                family: family.to_string(),
                install_flag: true,
            })
            .collect(),
    }
}

/// Fresh registry over the built-in table, nothing encountered yet.
pub fn registry() -> Registry {
    // The tables above are unique and every simulator names a listed family.
    match config().into_registry() {
        Ok(registry) => registry,
        Err(err) => unreachable!("built-in packaging table is invalid: {err}"),
    }
}
