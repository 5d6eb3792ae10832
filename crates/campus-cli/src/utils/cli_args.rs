use clap::Args;
use is_terminal::IsTerminal;

use crate::output::OutputFormat;

/// Shared clap argument for commands that accept an output format.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (`--format` / `-f`)
    #[arg(short = 'f', long = "format", value_enum, env = "CAMPUS_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl FormatArg {
    /// Returns the effective output format. If output is piped and no format
    /// is specified, defaults to JSON for better machine readability.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        self.resolve_with(std::io::stdout().is_terminal())
    }

    fn resolve_with(&self, stdout_is_terminal: bool) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }

        if stdout_is_terminal {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    }
}
