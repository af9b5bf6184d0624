use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use crate::registry::Registry;

/// A CPack component grouping related simulators.
///
/// Identity is the component token alone: two families with the same token
/// compare equal even if their display text differs.
#[derive(Debug, Clone)]
pub struct Family {
    token: String,
    display_name: String,
    description: String,
}

impl Family {
    pub fn new(
        token: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            display_name: display_name.into(),
            description: description.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Description as emitted: always terminated by a period, with the
    /// processed simulators appended when there are any.
    pub fn component_description(&self, simulators: &[&str]) -> String {
        let mut description = self.description.clone();
        if !description.ends_with('.') {
            description.push('.');
        }
        if !simulators.is_empty() {
            description.push_str(" Simulators: ");
            description.push_str(&simulators.join(", "));
        }
        description
    }

    /// Write the `cpack_add_component` block for this family.
    ///
    /// Writes nothing when no simulator of this family has been encountered.
    pub fn write_component_info<W: Write>(
        &self,
        registry: &Registry,
        stream: &mut W,
        indent: usize,
    ) -> io::Result<()> {
        let sims = registry.processed_simulators(&self.token);
        if sims.is_empty() {
            return Ok(());
        }

        let description = self.component_description(&sims);
        let indent0 = " ".repeat(indent);
        let indent4 = " ".repeat(indent + 4);

        writeln!(stream, "{indent0}cpack_add_component({}", self.token)?;
        writeln!(stream, "{indent4}DISPLAY_NAME \"{}\"", self.display_name)?;
        writeln!(stream, "{indent4}DESCRIPTION \"{description}\"")?;
        writeln!(stream, "{indent0})")?;

        tracing::debug!(family = %self.token, simulators = sims.len(), "emitted component");
        Ok(())
    }
}

impl PartialEq for Family {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Family {}

impl PartialOrd for Family {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Family {
    fn cmp(&self, other: &Self) -> Ordering {
        self.token.cmp(&other.token)
    }
}

impl Hash for Family {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}
