//! Serde mirrors of the remote API shapes. Field selection only; the shapes
//! are dictated by the site, not by this tool.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

/// Response of `/api/problems/all`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemList {
    pub user_name: String,
    #[serde(default)]
    pub num_solved: u32,
    #[serde(default)]
    pub num_total: u32,
    #[serde(default)]
    pub ac_easy: u32,
    #[serde(default)]
    pub ac_medium: u32,
    #[serde(default)]
    pub ac_hard: u32,
    pub stat_status_pairs: Vec<StatStatusPair>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatStatusPair {
    pub stat: Stat,
    /// `"ac"` for solved, `"notac"` for attempted, null for untouched.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub difficulty: Option<DifficultyLevel>,
    #[serde(default)]
    pub paid_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub question_id: u32,
    #[serde(rename = "question__title")]
    pub question_title: String,
    #[serde(rename = "question__title_slug")]
    pub question_title_slug: String,
    #[serde(default)]
    pub total_acs: Option<u64>,
    #[serde(default)]
    pub total_submitted: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyLevel {
    pub level: u8,
}

/// Solved counters reported in the summary, picked off `/api/problems/all`.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub num_solved: u32,
    pub ac_easy: u32,
    pub ac_medium: u32,
    pub ac_hard: u32,
}

impl From<&ProblemList> for Progress {
    fn from(list: &ProblemList) -> Self {
        Self {
            num_solved: list.num_solved,
            ac_easy: list.ac_easy,
            ac_medium: list.ac_medium,
            ac_hard: list.ac_hard,
        }
    }
}

/// Question detail from the GraphQL endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    #[serde(default)]
    pub question_frontend_id: Option<String>,
    pub title: String,
    pub title_slug: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub translated_title: Option<String>,
    #[serde(default)]
    pub translated_content: Option<String>,
    #[serde(default)]
    pub is_paid_only: bool,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub dislikes: Option<i64>,
    #[serde(default)]
    pub similar_questions: Option<String>,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub stats: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub sample_test_case: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub translated_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

/// Topic tag entry from `/problems/api/tags`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub translated_name: Option<String>,
    #[serde(default)]
    pub questions: Vec<u32>,
}

/// Favorite lists from `/problems/api/favorites`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FavoriteList {
    #[serde(default)]
    pub private_favorites: Vec<Favorite>,
    #[serde(default)]
    pub public_favorites: Vec<Favorite>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Favorite {
    pub id_hash: String,
    pub name: String,
}

/// Response of `/submissions/latest`.
#[derive(Debug, Clone, Deserialize)]
pub struct LastSubmission {
    pub code: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

/// Per-question completion status from the `allQuestionsStatuses` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStatus {
    pub question_id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Applied title translation from the `getQuestionTranslation` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTranslation {
    pub question_id: String,
    pub title: String,
}

/// Timestamp-indexed submission counts. The endpoint returns the map as a
/// JSON-encoded string, decoded in the client.
#[derive(Debug, Clone, Default)]
pub struct SubmissionCalendar(pub BTreeMap<String, u32>);

impl SubmissionCalendar {
    pub fn total(&self) -> u64 {
        self.0.values().map(|&count| u64::from(count)).sum()
    }
}

/// A solved problem with everything the renderer needs, assembled from the
/// listing, the question detail, and the latest submission.
#[derive(Debug, Clone)]
pub struct SolvedProblem {
    pub stat: Stat,
    pub question: Question,
    pub last_submission: LastSubmission,
}

impl SolvedProblem {
    pub fn file_name(&self) -> String {
        format!(
            "{}.{}.md",
            self.stat.question_id, self.stat.question_title_slug
        )
    }
}
