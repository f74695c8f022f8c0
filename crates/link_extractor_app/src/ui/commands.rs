use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use link_extractor_core::FailurePolicy;

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(name = "link_extractor")]
#[command(about = "Extract link URLs from chat export JSON files")]
#[command(no_binary_name = true, disable_version_flag = true)]
#[command(after_help = "Arguments containing spaces can be wrapped in double quotes.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: UiCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Load one or more JSON export files and extract
    Open {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Load every *.json under a folder and extract
    Folder { dir: PathBuf },
    /// Extract again from the loaded files
    Extract,
    /// Show the extracted URLs
    List,
    /// Save the URLs to a text file
    Save,
    /// Choose what happens to unreadable or malformed files
    Policy {
        #[arg(value_enum)]
        policy: PolicyArg,
    },
    /// Exit
    #[command(alias = "exit")]
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Abort the pass on the first bad file
    FailFast,
    /// Report bad files and keep going
    Skip,
}

impl From<PolicyArg> for FailurePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FailFast => FailurePolicy::FailFast,
            PolicyArg::Skip => FailurePolicy::SkipAndContinue,
        }
    }
}

pub fn policy_name(policy: FailurePolicy) -> &'static str {
    match policy {
        FailurePolicy::FailFast => "fail-fast",
        FailurePolicy::SkipAndContinue => "skip",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unclosed quote")]
    UnclosedQuote,
    /// Usage errors and `help` output, already formatted by clap.
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

/// Parse a prompt line. `Ok(None)` means the line was blank.
pub fn parse(line: &str) -> Result<Option<UiCommand>, ParseError> {
    let args = split_args(line)?;
    if args.is_empty() {
        return Ok(None);
    }
    Ok(Some(CommandLine::try_parse_from(args)?.command))
}

/// Whitespace split with double-quoted groups. Backslashes are literal so
/// Windows paths pass through untouched.
pub fn split_args(line: &str) -> Result<Vec<String>, ParseError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnclosedQuote);
    }
    if in_token {
        args.push(current);
    }
    Ok(args)
}
