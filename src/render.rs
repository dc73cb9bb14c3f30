use clap::ValueEnum;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Whole result as one bracketed, quoted list
    #[default]
    List,
    /// One name per line
    Lines,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list" => Some(OutputFormat::List),
            "lines" => Some(OutputFormat::Lines),
            _ => None,
        }
    }
}

/// Produce the exact text written to stdout for `names`
pub fn render(names: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::List => format!("{:?}\n", names),
        OutputFormat::Lines => {
            let mut out = String::new();
            for name in names {
                let _ = writeln!(out, "{}", name);
            }
            out
        }
    }
}
