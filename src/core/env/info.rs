use super::{EnvError, EnvPaths};
use std::fmt::Write as _;

const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Keys accepted by the `os` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsParam {
    Eol,
    Cpus,
    HomeDir,
    Username,
    Architecture,
}

impl OsParam {
    pub const ALL: [OsParam; 5] = [
        OsParam::Eol,
        OsParam::Cpus,
        OsParam::HomeDir,
        OsParam::Username,
        OsParam::Architecture,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OsParam::Eol => "--EOL",
            OsParam::Cpus => "--cpus",
            OsParam::HomeDir => "--homedir",
            OsParam::Username => "--username",
            OsParam::Architecture => "--architecture",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, EnvError> {
        Self::ALL
            .into_iter()
            .find(|param| param.key() == key)
            .ok_or_else(|| EnvError::UnknownParameter(key.to_string()))
    }

    pub fn value(self) -> Result<String, EnvError> {
        match self {
            OsParam::Eol => Ok(format!("{:?}", LINE_ENDING)),
            OsParam::Cpus => Ok(cpu_summary()),
            OsParam::HomeDir => Ok(EnvPaths::new()?.home().display().to_string()),
            OsParam::Username => Ok(whoami::username()),
            OsParam::Architecture => Ok(std::env::consts::ARCH.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CpuEntry {
    model: String,
    mhz: Option<f64>,
}

fn parse_cpuinfo(text: &str) -> Vec<CpuEntry> {
    let mut entries = Vec::new();
    let mut current: Option<CpuEntry> = None;

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "processor" => {
                if let Some(entry) = current.take() {
                    entries.push(entry);
                }
                current = Some(CpuEntry {
                    model: String::from("unknown"),
                    mhz: None,
                });
            }
            "model name" => {
                if let Some(entry) = current.as_mut() {
                    entry.model = value.trim().to_string();
                }
            }
            "cpu MHz" => {
                if let Some(entry) = current.as_mut() {
                    entry.mhz = value.trim().parse().ok();
                }
            }
            _ => {}
        }
    }
    entries.extend(current);
    entries
}

fn format_cpus(count: usize, entries: &[CpuEntry]) -> String {
    let mut out = format!("Overall amount of CPUS: {}", count);
    for (index, entry) in entries.iter().enumerate() {
        let _ = write!(out, "\n{}. {}", index + 1, entry.model);
        if let Some(mhz) = entry.mhz {
            let _ = write!(out, ", {:.2} GHz", mhz / 1000.0);
        }
    }
    out
}

/// Logical CPU count followed by per-CPU model and clock rate when the platform exposes them.
pub fn cpu_summary() -> String {
    let entries = std::fs::read_to_string("/proc/cpuinfo")
        .map(|text| parse_cpuinfo(&text))
        .unwrap_or_default();
    let count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(entries.len().max(1));
    format_cpus(count, &entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPUINFO: &str = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Test CPU @ 2.40GHz\ncpu MHz\t\t: 2400.000\n\nprocessor\t: 1\nmodel name\t: Test CPU @ 2.40GHz\ncpu MHz\t\t: 1800.500\n";

    #[test]
    fn test_keys_round_trip() {
        for param in OsParam::ALL {
            assert_eq!(OsParam::from_key(param.key()).ok(), Some(param));
        }
        assert!(matches!(
            OsParam::from_key("--nope"),
            Err(EnvError::UnknownParameter(_))
        ));
        assert!(OsParam::from_key("EOL").is_err());
    }

    #[test]
    fn test_eol_is_quoted() {
        let value = OsParam::Eol.value().unwrap();
        assert!(value.starts_with('"') && value.ends_with('"'));
        assert!(value.contains("\\n"));
    }

    #[test]
    fn test_architecture() {
        assert_eq!(
            OsParam::Architecture.value().unwrap(),
            std::env::consts::ARCH
        );
    }

    #[test]
    fn test_parse_cpuinfo() {
        let entries = parse_cpuinfo(CPUINFO);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].model, "Test CPU @ 2.40GHz");
        assert_eq!(entries[1].mhz, Some(1800.5));
    }

    #[test]
    fn test_format_cpus() {
        let entries = parse_cpuinfo(CPUINFO);
        let text = format_cpus(2, &entries);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Overall amount of CPUS: 2");
        assert_eq!(lines[1], "1. Test CPU @ 2.40GHz, 2.40 GHz");
        assert_eq!(lines[2], "2. Test CPU @ 2.40GHz, 1.80 GHz");
    }

    #[test]
    fn test_cpu_summary_has_count() {
        assert!(cpu_summary().starts_with("Overall amount of CPUS: "));
    }
}
