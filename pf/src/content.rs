//! Portfolio content records
//!
//! Everything the portfolio shows is authored as YAML and loaded into these
//! types. A sample document is bundled with the binary and used when no
//! content file is configured.

use std::fs;
use std::path::{Path, PathBuf};

use careertrack::{Period, RoleHistory, RoleHistoryEntry, compute_tenure_at};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Sample content shipped with the binary
const BUILTIN_CONTENT: &str = include_str!("../assets/portfolio.yml");

/// Errors from loading portfolio content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Profile name is empty")]
    MissingName,
}

/// Who the portfolio belongs to: hero, about and contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub quote: String,
    pub location: String,
    pub email: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    /// About-section paragraphs
    pub about: Vec<String>,
}

/// One employer on the career track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Experience {
    pub company: String,
    /// Overall period at the company
    pub period: String,
    #[serde(default)]
    pub location: String,
    /// Single title, for entries written without a role history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Titles held, oldest first
    #[serde(default)]
    pub role_history: RoleHistory,
}

impl Experience {
    /// Fold a lone `role` into the role history
    fn normalize(&mut self) {
        if self.role_history.is_empty()
            && let Some(role) = self.role.take()
        {
            debug!(company = %self.company, %role, "Experience::normalize: promoting legacy role");
            self.role_history = vec![RoleHistoryEntry::new(role, self.period.clone())].into();
        }
    }

    /// Badge for the company-level period
    pub fn tenure_at(&self, today: NaiveDate) -> String {
        compute_tenure_at(&self.period, today)
    }

    /// Tenure from the first role's start to the last role's end
    pub fn aggregate_tenure_at(&self, today: NaiveDate) -> Option<String> {
        self.role_history.aggregate_tenure_at(today)
    }

    /// Most recent title
    pub fn current_role(&self) -> Option<&str> {
        self.role_history.latest().map(|entry| entry.role.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EducationItem {
    pub degree: String,
    pub school: String,
    pub period: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// The complete portfolio document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub education: Vec<EducationItem>,
    pub certifications: Vec<Certification>,
}

impl Portfolio {
    /// Parse, normalize and validate a YAML document
    pub fn from_yaml(text: &str) -> Result<Self, ContentError> {
        debug!(len = text.len(), "Portfolio::from_yaml: called");
        let mut portfolio: Self = serde_yaml::from_str(text)?;
        for experience in &mut portfolio.experiences {
            experience.normalize();
        }
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load a YAML document from disk
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_yaml(&text)?;
        info!("Loaded portfolio content from: {}", path.display());
        Ok(portfolio)
    }

    /// The sample document bundled with the binary
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_CONTENT)
    }

    /// Load `path` if given, otherwise the bundled sample
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Portfolio::load_or_builtin: no content path, using builtin");
                Self::builtin()
            }
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::MissingName);
        }
        for (owner, period) in self.rejected_periods() {
            warn!(%owner, %period, "Unparseable period, tenure badge will be omitted");
        }
        Ok(())
    }

    /// Periods that will not produce a tenure label, with what they belong to
    pub fn rejected_periods(&self) -> Vec<(String, String)> {
        let experiences = self.experiences.iter().flat_map(|exp| {
            std::iter::once((exp.company.clone(), exp.period.clone())).chain(
                exp.role_history
                    .entries()
                    .iter()
                    .map(move |entry| (format!("{} / {}", exp.company, entry.role), entry.period.clone())),
            )
        });
        let education = self
            .education
            .iter()
            .map(|edu| (edu.degree.clone(), edu.period.clone()));

        experiences
            .chain(education)
            .filter(|(_, period)| Period::parse(period).is_err())
            .collect()
    }
}
