use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// cfn-guard subcommands the hook can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Validate,
    Test,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "validate" => Ok(Self::Validate),
            "test" => Ok(Self::Test),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }
}

/// The argument vector for one cfn-guard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    /// Build the arguments for running `operation` against `target`.
    ///
    /// Only the first `rules` and `dir` values are used. `test` runs ignore
    /// the target file.
    pub fn build<S: AsRef<str>>(
        operation: &str,
        rules: &[S],
        dir: &[S],
        target: &str,
    ) -> Result<Self> {
        let operation: Operation = operation.parse()?;
        let args = match operation {
            Operation::Validate => {
                let rules = first(rules).ok_or(Error::MissingFlag {
                    operation: operation.as_str(),
                    flag: "--rules",
                })?;
                vec![
                    operation.to_string(),
                    format!("--rules={rules}"),
                    format!("--data={target}"),
                ]
            }
            Operation::Test => {
                let dir = first(dir).ok_or(Error::MissingFlag {
                    operation: operation.as_str(),
                    flag: "--dir",
                })?;
                vec![operation.to_string(), format!("--dir={dir}")]
            }
        };
        Ok(Self { args })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

fn first<S: AsRef<str>>(values: &[S]) -> Option<&str> {
    values.first().map(|v| v.as_ref())
}
