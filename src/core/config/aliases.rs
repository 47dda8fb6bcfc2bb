use crate::core::commands::{AliasError, CommandTable};

/// Alias definitions in the order they were read.
#[derive(Debug, Default)]
pub struct AliasManager {
    aliases: Vec<(Box<str>, Box<str>)>,
}

impl AliasManager {
    pub fn new() -> Self {
        Self {
            aliases: Vec::new(),
        }
    }

    /// Adds or redefines `name`.
    pub fn add(&mut self, name: &str, target: &str) {
        match self.aliases.iter_mut().find(|(existing, _)| &**existing == name) {
            Some(entry) => entry.1 = target.into(),
            None => self.aliases.push((name.into(), target.into())),
        }
    }

    /// Registers every alias with `table`, returning the ones it refused.
    pub fn apply_to(&self, table: &mut CommandTable) -> Vec<AliasError> {
        self.aliases
            .iter()
            .filter_map(|(name, target)| table.add_alias(name, target).err())
            .collect()
    }
}
