use std::collections::BTreeMap;

use rustyline::completion::Pair;

use crate::core::commands::CommandTable;

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeMap<String, ()>,
    aliases: BTreeMap<String, String>,
}

impl CommandCompleter {
    pub fn new(table: &CommandTable) -> Self {
        let mut completer = Self {
            commands: BTreeMap::new(),
            aliases: BTreeMap::new(),
        };
        completer.refresh_commands(table);
        completer
    }

    fn refresh_commands(&mut self, table: &CommandTable) {
        self.commands.clear();
        self.aliases.clear();
        for spec in table.specs() {
            for token in spec.tokens {
                self.commands.insert(token.to_string(), ());
            }
        }
        for (alias, kind) in table.aliases() {
            self.aliases.insert(alias.clone(), kind.to_string());
        }
    }

    pub fn is_command(&self, token: &str) -> bool {
        self.commands.contains_key(token) || self.aliases.contains_key(token)
    }

    pub fn complete_command(&self, line: &str) -> Vec<Pair> {
        let mut matches = Vec::new();
        let input = line.trim();

        self.add_command_matches(&mut matches, input);
        self.add_alias_matches(&mut matches, input);

        matches
    }

    fn add_command_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for cmd in self.commands.keys() {
            if cmd.starts_with(input) {
                matches.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }
    }

    fn add_alias_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for (alias, target) in &self.aliases {
            if alias.starts_with(input) {
                matches.push(Pair {
                    display: format!("{} (alias of {})", alias, target),
                    replacement: format!("{} ", alias),
                });
            }
        }
    }
}
