//! Run configuration.

use crate::fit::SampleShape;
use derive_more::Display;
use std::{path::PathBuf, str::FromStr};

/// The edge-list file layout.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Space-delimited, with one header line.
    #[display(fmt = "large")]
    Large,
    /// Comma-delimited, no header.
    #[display(fmt = "small")]
    Small,
}

impl Profile {
    pub fn delimiter(self) -> char {
        match self {
            Profile::Large => ' ',
            Profile::Small => ',',
        }
    }

    pub fn has_header(self) -> bool {
        match self {
            Profile::Large => true,
            Profile::Small => false,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Small
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" => Ok(Profile::Large),
            "small" => Ok(Profile::Small),
            _ => Err(format!("invalid size: {}", s)),
        }
    }
}

/// What to do with a record that is not exactly two tokens.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Abort ingestion at the first malformed record.
    #[display(fmt = "strict")]
    Strict,
    /// Skip malformed records and count them.
    #[display(fmt = "lenient")]
    Lenient,
}

impl Default for MalformedPolicy {
    fn default() -> Self {
        MalformedPolicy::Strict
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub profile: Profile,
    pub policy: MalformedPolicy,
    /// Directory receiving the `<name>.csv` histograms.
    pub output_dir: PathBuf,
    pub sample_shape: SampleShape,
    /// Size of the worker pool, all cores if `None`.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            policy: MalformedPolicy::default(),
            output_dir: PathBuf::from("."),
            sample_shape: SampleShape::default(),
            threads: None,
        }
    }
}

impl Config {
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn sample_shape(mut self, sample_shape: SampleShape) -> Self {
        self.sample_shape = sample_shape;
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}
