use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Args;

use crate::{
    error::{Error, Result},
    search::BackEdgeRule,
};

/// Settings that shape an interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Which edges to visited vertices are reported as cycles.
    pub rule: BackEdgeRule,
    /// Whether the breadth-first program starts with the built-in example.
    pub show_example: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rule: BackEdgeRule::default(),
            show_example: true,
        }
    }
}

/// Command-line options shared by both programs.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Which edges to already-visited vertices count as closing a cycle
    #[arg(long, value_enum, default_value_t = BackEdgeRule::Ancestor)]
    pub rule: BackEdgeRule,

    /// Read answers from this file instead of standard input
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Log more detail to standard error (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            rule: self.rule,
            ..SessionConfig::default()
        }
    }

    /// Opens the answer source: the `--input` file, or standard input.
    pub fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path).map_err(|source| Error::Input {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["prog"]).unwrap();
        assert_eq!(cli.common.rule, BackEdgeRule::Ancestor);
        assert_eq!(cli.common.verbose, 0);
        assert!(cli.common.input.is_none());
        assert_eq!(cli.common.session_config(), SessionConfig::default());
    }

    #[test]
    fn test_rule_and_verbosity() {
        let cli =
            TestCli::try_parse_from(["prog", "--rule", "parent-of-current", "-vv"]).unwrap();
        assert_eq!(cli.common.rule, BackEdgeRule::ParentOfCurrent);
        assert_eq!(cli.common.verbose, 2);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        assert!(TestCli::try_parse_from(["prog", "--rule", "sometimes"]).is_err());
    }

    #[test]
    fn test_missing_input_file() {
        let cli = TestCli::try_parse_from(["prog", "--input", "/nonexistent/answers.txt"]).unwrap();
        assert!(matches!(
            cli.common.open_input(),
            Err(Error::Input { .. })
        ));
    }
}
