use std::io::Read;
use std::path::Path;
use std::{fs, io};

use flexstr::SharedStr;

use crate::{fib, Error};

const BUF_SIZE: usize = u16::MAX as usize;

const FIB_PROMPT: &str = "Enter the value of n: ";
const EXPR_PROMPT: &str = "Enter an arithmetic expression: ";

// *** Fib section ***

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct FibSection {
    #[serde(default = "default_max_n")]
    max_n: u32,
}

impl Default for FibSection {
    #[inline]
    fn default() -> Self {
        Self { max_n: fib::MAX_N }
    }
}

#[inline]
fn default_max_n() -> u32 {
    fib::MAX_N
}

// *** Prompts section ***

#[derive(Clone, Debug, Default, serde::Deserialize, PartialEq)]
pub struct PromptSection {
    #[serde(default)]
    fib: Option<SharedStr>,
    #[serde(default)]
    expr: Option<SharedStr>,
}

// *** Config ***

/// Optional calculator configuration. Every section has a default, so an
/// empty (or absent) document reproduces the stock behavior.
#[derive(Clone, Debug, Default, serde::Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    fib: FibSection,
    #[serde(default)]
    prompts: PromptSection,
}

impl Config {
    /// Try to load the `Config` from the given TOML reader
    pub fn from_toml_reader(r: impl io::Read) -> Result<Config, Error> {
        let mut reader = io::BufReader::new(r);
        let mut buffer = String::with_capacity(BUF_SIZE);
        reader.read_to_string(&mut buffer)?;

        let config: Config = toml::from_str(&buffer)?;
        config.validate()?;
        Ok(config)
    }

    /// Try to load the `Config` from the given TOML file
    pub fn from_toml_file(cfg_name: impl AsRef<Path>) -> Result<Config, Error> {
        match fs::File::open(cfg_name) {
            // If the file exists, but it can't be deserialized then report that error
            Ok(f) => Self::from_toml_reader(f),
            // Report any other I/O errors
            Err(err) => Err(err.into()),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        // A cap past MAX_N would promise entries the u64 table cannot hold
        if self.fib.max_n > fib::MAX_N {
            return Err(Error::BadLimit(self.fib.max_n, fib::MAX_N));
        }
        Ok(())
    }

    /// The largest `n` the Fibonacci cycle accepts
    #[inline]
    pub fn fib_limit(&self) -> u32 {
        self.fib.max_n
    }

    /// The prompt shown before reading `n`
    #[inline]
    pub fn fib_prompt(&self) -> &str {
        self.prompts.fib.as_deref().unwrap_or(FIB_PROMPT)
    }

    /// The prompt shown before reading an expression line
    #[inline]
    pub fn expr_prompt(&self) -> &str {
        self.prompts.expr.as_deref().unwrap_or(EXPR_PROMPT)
    }
}
