//! Selectors used to index into the result documents.

use crate::format::group_digits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Solution-generation approach compared throughout the study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Aleatoria,
    Localizada,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Aleatoria, Strategy::Localizada];

    /// Top-level key in both documents.
    pub fn key(self) -> &'static str {
        match self {
            Strategy::Aleatoria => "aleatoria",
            Strategy::Localizada => "localizada",
        }
    }

    /// Display name used for series and legends.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Aleatoria => "Aleatória",
            Strategy::Localizada => "Localizada",
        }
    }
}

/// Which solution of a run is charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SolutionType {
    #[default]
    Mean,
    Best,
}

impl SolutionType {
    pub const ALL: [SolutionType; 2] = [SolutionType::Mean, SolutionType::Best];

    /// Third-level key in both documents.
    pub fn key(self) -> &'static str {
        match self {
            SolutionType::Mean => "solucao media",
            SolutionType::Best => "melhor solucao",
        }
    }

    /// Noun phrase used inside chart titles.
    pub fn title_phrase(self) -> &'static str {
        match self {
            SolutionType::Mean => "Solução Média",
            SolutionType::Best => "Melhor Solução",
        }
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionType::Mean => write!(f, "mean"),
            SolutionType::Best => write!(f, "best"),
        }
    }
}

impl FromStr for SolutionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" | "media" => Ok(SolutionType::Mean),
            "best" | "melhor" => Ok(SolutionType::Best),
            other => Err(format!("unknown solution type '{other}' (expected mean or best)")),
        }
    }
}

/// Number of annealing iterations a run was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IterationCount(pub u32);

impl IterationCount {
    /// Iteration counts present in the study, in display order.
    pub const FIXED: [IterationCount; 4] = [
        IterationCount(5000),
        IterationCount(10000),
        IterationCount(25000),
        IterationCount(50000),
    ];

    pub fn get(self) -> u32 {
        self.0
    }

    /// Second-level key in both documents.
    pub fn key(self) -> String {
        self.0.to_string()
    }

    /// Thousands-separated count, e.g. `10,000`.
    pub fn label(self) -> String {
        group_digits(&self.0.to_string())
    }

    /// Dropdown option text, e.g. `10,000 Iterações`.
    pub fn option_label(self) -> String {
        format!("{} Iterações", self.label())
    }
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::FIXED[0]
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IterationCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().replace(',', "").parse().map(IterationCount)
    }
}
