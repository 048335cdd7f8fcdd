use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use crate::models::{
    Classification, InterestCategory, ObjectiveCategory, Participant, RoleCategory,
};

/// Number of tokens inspected before a keyword when negation scanning is on
pub const NEGATION_WINDOW: usize = 3;

const NEGATION_MARKERS: &[&str] = &["not", "never", "no", "don't"];

/// Errors that can occur when loading a keyword taxonomy
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Keywords that map free text to one category
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeywordRule<C> {
    pub category: C,
    pub keywords: Vec<String>,
}

impl<C> KeywordRule<C> {
    pub fn new(category: C, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        }
    }
}

/// Ordered keyword rules per axis; the first matching rule wins
///
/// Text that matches no rule falls back to the axis' `Other` category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub objective: Vec<KeywordRule<ObjectiveCategory>>,
    #[serde(default)]
    pub interest: Vec<KeywordRule<InterestCategory>>,
    #[serde(default)]
    pub role: Vec<KeywordRule<RoleCategory>>,
}

impl Taxonomy {
    /// Parse a taxonomy from TOML of the form:
    ///
    /// ```toml
    /// [[objective]]
    /// category = "prize-hunting"
    /// keywords = ["win", "trophy"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, TaxonomyError> {
        let taxonomy: Taxonomy = toml::from_str(content)?;
        Ok(taxonomy.normalized())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Lower-case and trim every keyword, dropping empty ones
    pub fn normalized(mut self) -> Self {
        normalize_rules(&mut self.objective);
        normalize_rules(&mut self.interest);
        normalize_rules(&mut self.role);
        self
    }
}

fn normalize_rules<C>(rules: &mut [KeywordRule<C>]) {
    for rule in rules.iter_mut() {
        rule.keywords = rule
            .keywords
            .iter()
            .map(|keyword| normalize_text(keyword))
            .filter(|keyword| !keyword.is_empty())
            .collect();
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            objective: vec![
                KeywordRule::new(
                    ObjectiveCategory::PrizeHunting,
                    &["win", "first prize", "trophy", "compete", "victory"],
                ),
                KeywordRule::new(
                    ObjectiveCategory::Learning,
                    &["learn", "first time", "new skills", "develop", "experience", "improve"],
                ),
                KeywordRule::new(
                    ObjectiveCategory::Meeting,
                    &["meet", "network", "collaborate", "make friends", "community"],
                ),
            ],
            interest: vec![
                KeywordRule::new(
                    InterestCategory::Tech,
                    &["ai", "machine learning", "data science", "programming", "development"],
                ),
                KeywordRule::new(
                    InterestCategory::Design,
                    &["design", "ui/ux", "product design", "web design"],
                ),
                KeywordRule::new(
                    InterestCategory::Business,
                    &["business", "finance", "startup", "marketing"],
                ),
            ],
            role: vec![
                KeywordRule::new(
                    RoleCategory::Development,
                    &["development", "developer", "coding", "programming"],
                ),
                KeywordRule::new(
                    RoleCategory::Design,
                    &["design", "designer", "ui/ux", "graphic design"],
                ),
                KeywordRule::new(
                    RoleCategory::Analysis,
                    &["analysis", "analyst", "data analysis", "data science"],
                ),
                KeywordRule::new(
                    RoleCategory::Visualization,
                    &["visualization", "visual", "dashboard", "graphics"],
                ),
            ],
        }
    }
}

/// Keyword classifier for objective, interest and role answers
///
/// Matching is a case-insensitive substring test. With `negation_aware`
/// set, a keyword occurrence is ignored when one of the
/// [`NEGATION_WINDOW`] tokens before it is a negation marker.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    taxonomy: Taxonomy,
    negation_aware: bool,
}

impl Classifier {
    pub fn new(taxonomy: Taxonomy, negation_aware: bool) -> Self {
        Self {
            taxonomy: taxonomy.normalized(),
            negation_aware,
        }
    }

    pub fn negation_aware() -> Self {
        Self::new(Taxonomy::default(), true)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn is_negation_aware(&self) -> bool {
        self.negation_aware
    }

    /// Objective labels themselves never classify back into a category.
    pub fn classify_objective(&self, text: &str) -> ObjectiveCategory {
        let normalized = normalize_text(text);
        if ObjectiveCategory::ALL
            .iter()
            .any(|category| category.label() == normalized)
        {
            return ObjectiveCategory::Other;
        }
        self.first_match(&self.taxonomy.objective, &normalized)
            .unwrap_or(ObjectiveCategory::Other)
    }

    /// One category per interest, in input order
    ///
    /// Interest labels are reserved like objective labels.
    pub fn classify_interests(&self, interests: &[String]) -> Vec<InterestCategory> {
        interests
            .iter()
            .map(|interest| {
                let normalized = normalize_text(interest);
                if InterestCategory::ALL
                    .iter()
                    .any(|category| category.label().eq_ignore_ascii_case(&normalized))
                {
                    return InterestCategory::Other;
                }
                self.first_match(&self.taxonomy.interest, &normalized)
                    .unwrap_or(InterestCategory::Other)
            })
            .collect()
    }

    /// Role answers are often a fixed category, so role labels classify to themselves
    pub fn classify_role(&self, text: &str) -> RoleCategory {
        self.first_match(&self.taxonomy.role, &normalize_text(text))
            .unwrap_or(RoleCategory::Other)
    }

    pub fn classify(&self, participant: &Participant) -> Classification {
        Classification {
            objective: self.classify_objective(&participant.objective),
            interests: self.classify_interests(&participant.interests),
            role: self.classify_role(&participant.preferred_role),
        }
    }

    fn first_match<C: Copy>(&self, rules: &[KeywordRule<C>], text: &str) -> Option<C> {
        if text.is_empty() {
            return None;
        }
        rules
            .iter()
            .find(|rule| {
                rule.keywords
                    .iter()
                    .any(|keyword| self.contains_keyword(text, keyword))
            })
            .map(|rule| rule.category)
    }

    fn contains_keyword(&self, text: &str, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }
        if !self.negation_aware {
            return text.contains(keyword);
        }
        text.match_indices(keyword)
            .any(|(start, _)| !is_negated(&text[..start]))
    }
}

/// Lower-case, trim, and fold typographic apostrophes
fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase().replace('\u{2019}', "'")
}

/// Whether one of the last NEGATION_WINDOW tokens of `preceding` negates what follows
fn is_negated(preceding: &str) -> bool {
    preceding
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|token| !token.is_empty())
        .rev()
        .take(NEGATION_WINDOW)
        .any(|token| NEGATION_MARKERS.contains(&token))
}
