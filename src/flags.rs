use crate::error::ShellError;
use std::collections::HashMap;

/// Length of the `--username=` prefix stripped from the startup argument.
pub const USERNAME_PREFIX_LEN: usize = 11;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    positionals: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        let mut insert = |name: &str, short: &str, long: &str, description: &str, takes_value: bool| {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        };

        insert("help", "-h", "--help", "Print this help message", false);
        insert("version", "-v", "--version", "Show version information", false);
        insert("config", "-c", "--config", "Read settings from this file instead of ~/.filenavrc", true);
        insert("quiet", "-q", "--quiet", "Only log errors", false);
        insert("debug", "-d", "--debug", "Enable debug logging", false);

        Flags {
            flags,
            positionals: Vec::new(),
        }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long);

            match flag {
                Some(flag) if flag.takes_value => {
                    if i + 1 < args.len() {
                        flag.value = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            arg
                        )));
                    }
                }
                Some(flag) => flag.value = Some("true".to_string()),
                None => self.positionals.push(arg.clone()),
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    /// The first positional argument minus its `--username=` prefix. The
    /// prefix itself is not checked.
    pub fn username(&self) -> Option<String> {
        self.positionals
            .first()
            .map(|arg| arg.chars().skip(USERNAME_PREFIX_LEN).collect())
    }

    pub fn print_help(&self) {
        println!("Usage: filenav [OPTIONS] --username=<name>");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
