use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use crate::error::{PackagingError, Result};
use crate::family::Family;

/// A simulator's membership in a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    family: String,
    install_flag: bool,
    processed: bool,
}

impl Registration {
    pub fn new(family: impl Into<String>) -> Self {
        Self::with_install_flag(family, true)
    }

    pub fn with_install_flag(family: impl Into<String>, install_flag: bool) -> Self {
        Self {
            family: family.into(),
            install_flag,
            processed: false,
        }
    }

    /// Token of the owning family.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Stored for callers; emission does not consult it.
    pub fn install_flag(&self) -> bool {
        self.install_flag
    }

    pub fn was_processed(&self) -> bool {
        self.processed
    }

    fn encountered(&mut self) {
        self.processed = true;
    }
}

/// Family table plus simulator registrations.
///
/// Every registration is guaranteed to name a family present in the table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    families: BTreeMap<String, Family>,
    registrations: HashMap<String, Registration>,
}

impl Registry {
    pub fn new<F, R>(families: F, registrations: R) -> Result<Self>
    where
        F: IntoIterator<Item = Family>,
        R: IntoIterator<Item = (String, Registration)>,
    {
        let mut table = BTreeMap::new();
        for family in families {
            let token = family.token().to_string();
            if table.insert(token.clone(), family).is_some() {
                return Err(PackagingError::DuplicateFamily(token));
            }
        }

        let mut map = HashMap::new();
        for (name, registration) in registrations {
            if !table.contains_key(registration.family()) {
                return Err(PackagingError::UnknownFamily {
                    simulator: name,
                    family: registration.family().to_string(),
                });
            }
            match map.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(PackagingError::DuplicateSimulator(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(registration);
                }
            }
        }

        Ok(Self {
            families: table,
            registrations: map,
        })
    }

    pub fn family(&self, token: &str) -> Option<&Family> {
        self.families.get(token)
    }

    /// All families in token order, referenced or not.
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    pub fn registration(&self, simulator: &str) -> Option<&Registration> {
        self.registrations.get(simulator)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Record that `simulator` is part of the configured build.
    pub fn mark_encountered(&mut self, simulator: &str) -> Result<()> {
        let registration = self
            .registrations
            .get_mut(simulator)
            .ok_or_else(|| PackagingError::NotFound(simulator.to_string()))?;
        registration.encountered();
        tracing::debug!(simulator, family = registration.family(), "encountered");
        Ok(())
    }

    /// Mark every name in `simulators`, stopping at the first unknown one.
    pub fn mark_all<I, S>(&mut self, simulators: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for simulator in simulators {
            self.mark_encountered(simulator.as_ref())?;
        }
        Ok(())
    }

    /// Distinct families referenced by at least one registration, in token order.
    pub fn referenced_families(&self) -> Vec<&Family> {
        let mut families: Vec<&Family> = self
            .registrations
            .values()
            .filter_map(|registration| self.families.get(registration.family()))
            .collect();
        families.sort();
        families.dedup();
        families
    }

    /// Simulators registered to `token`, sorted.
    pub fn simulators(&self, token: &str) -> Vec<&str> {
        self.collect_simulators(token, |_| true)
    }

    /// Encountered simulators registered to `token`, sorted.
    pub fn processed_simulators(&self, token: &str) -> Vec<&str> {
        self.collect_simulators(token, Registration::was_processed)
    }

    fn collect_simulators(&self, token: &str, keep: impl Fn(&Registration) -> bool) -> Vec<&str> {
        let mut sims: Vec<&str> = self
            .registrations
            .iter()
            .filter(|(_, registration)| registration.family() == token && keep(*registration))
            .map(|(name, _)| name.as_str())
            .collect();
        sims.sort_unstable();
        sims
    }
}
