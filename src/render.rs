//! Markdown and summary rendering.

use crate::error::Result;
use crate::models::{Difficulty, Progress, SolvedProblem};
use askama::Template;
use serde::Serialize;

#[derive(Debug, Template)]
#[template(path = "problem.md.j2", escape = "none")]
struct ProblemDoc<'a> {
    id: u32,
    title: &'a str,
    slug: &'a str,
    difficulty: Difficulty,
    content: String,
    lang: &'a str,
    code: &'a str,
}

/// Render one solved problem into its markdown document. `fallback_lang`
/// labels the code fence when the submission does not carry a language.
pub fn problem_markdown(problem: &SolvedProblem, fallback_lang: &str) -> Result<String> {
    let content = problem
        .question
        .content
        .clone()
        .unwrap_or_default()
        // bare <br> is not valid MDX
        .replace("<br>", "<br />");

    let doc = ProblemDoc {
        id: problem.stat.question_id,
        title: &problem.stat.question_title,
        slug: &problem.stat.question_title_slug,
        difficulty: problem.question.difficulty,
        content,
        lang: problem.last_submission.lang.as_deref().unwrap_or(fallback_lang),
        code: &problem.last_submission.code,
    };

    Ok(doc.render()?)
}

/// The `summary.json` document written next to the markdown files.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub user_name: String,
    pub slugs: Vec<String>,
    pub progress: Progress,
    pub total_submissions: u64,
}

pub fn summary_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
