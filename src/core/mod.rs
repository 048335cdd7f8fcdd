// Core algorithm exports
pub mod assignment;
pub mod bucketing;
pub mod classifier;
pub mod friends;
pub mod grouping;
pub mod pipeline;
pub mod scoring;
pub mod validator;

pub use assignment::AssignedSet;
pub use bucketing::{bucket, slice_full_teams, sort_by_size_preference, SlicedGroup};
pub use classifier::{Classifier, KeywordRule, Taxonomy, TaxonomyError};
pub use friends::{extract_friend_groups, FriendGroups};
pub use grouping::{group_by_objective_and_interest, group_by_rarity, language_frequencies, CategoryGroup, GroupKey};
pub use pipeline::{Formation, FormationError, FormationSettings, TeamFormer, DEFAULT_TEAM_SIZE};
pub use scoring::{calculate_compatibility, CompatibilityScorer, ScoreBreakdown};
pub use validator::{validate_teams, ValidationError};
