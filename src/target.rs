//! Execution targets the launcher can forward to.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Supported downstream executables. The identifier doubles as the suffix in
/// `settings.<target>.json` and as the command name to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Claude,
    K2,
}

impl Target {
    /// All targets, in selection-menu order.
    pub const ALL: [Target; 2] = [Target::Claude, Target::K2];

    /// Identifier used in file names and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Target::Claude => "claude",
            Target::K2 => "k2",
        }
    }

    /// External executable launched for this target.
    pub fn command(&self) -> &'static str {
        self.id()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(Target::Claude),
            "k2" => Ok(Target::K2),
            other => Err(format!("Unknown target '{}' (expected claude or k2)", other)),
        }
    }
}
