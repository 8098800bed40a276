//! Company profile and document types used by the profile-aware scorer and
//! the fit scorer.

use serde::{Deserialize, Serialize};

/// What a company can do: business domains, solution names, held
/// certifications. All matched as lowercase substrings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub certs: Vec<String>,
}

/// Bid strategy knobs that feed the profile-aware scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(default)]
    pub target_agencies: Vec<String>,
}

/// A company's profile, loaded by the caller and passed into scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub strategy: Strategy,
}

impl CompanyProfile {
    /// All keyword-like terms: explicit keywords plus capability domains and
    /// solutions. The scorer matches each against notice text.
    #[must_use]
    pub fn match_terms(&self) -> Vec<String> {
        self.keywords
            .iter()
            .chain(&self.capabilities.domains)
            .chain(&self.capabilities.solutions)
            .filter(|t| !t.is_empty())
            .cloned()
            .collect()
    }
}

/// One company document to be indexed for fit scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDoc {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
