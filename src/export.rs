//! The export pipeline: login, list solved problems, fetch detail and the
//! latest submission per problem in parallel, then write markdown files and
//! a summary index.

use crate::client::LeetCodeClient;
use crate::error::Result;
use crate::models::{ProblemList, Progress, SolvedProblem, Stat};
use crate::render::{self, Summary};
use derive_builder::Builder;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Builder)]
pub struct Exporter {
    #[builder(setter(into))]
    base_url: String,
    #[builder(setter(into))]
    username: String,
    #[builder(setter(into))]
    password: String,
    #[builder(setter(into))]
    language: String,
    #[builder(setter(into))]
    output_dir: PathBuf,
}

#[derive(Debug)]
pub struct ExportOutcome {
    /// Slugs of the markdown files that were written, in rendered order.
    pub generated: Vec<String>,
    pub summary_path: PathBuf,
}

impl Exporter {
    pub async fn run(&self) -> Result<ExportOutcome> {
        let mut client = LeetCodeClient::new(&self.base_url)?;
        client.login(&self.username, &self.password).await?;

        let list = client.problems().await?;
        let calendar = client.submission_calendar().await?;
        let progress = Progress::from(&list);
        let user_name = list.user_name.clone();
        let solved = solved_stats(list);
        tracing::info!(user = %user_name, count = solved.len(), "fetching solved problems");

        let client = Arc::new(client);
        let mut handles = Vec::with_capacity(solved.len());
        for stat in solved {
            let client = Arc::clone(&client);
            let lang = self.language.clone();
            handles.push(tokio::spawn(async move {
                let (question, last_submission) = tokio::try_join!(
                    client.question(&stat.question_title_slug),
                    client.last_submission(stat.question_id, &lang),
                )?;

                Ok::<_, crate::Error>(SolvedProblem {
                    stat,
                    question,
                    last_submission,
                })
            }));
        }

        let mut problems = Vec::with_capacity(handles.len());
        for handle in handles {
            problems.push(handle.await??);
        }
        problems.sort_by_key(|problem| problem.stat.question_id);

        fs::create_dir_all(&self.output_dir)?;

        let mut generated = Vec::with_capacity(problems.len());
        for problem in &problems {
            let file = self.output_dir.join(problem.file_name());
            let written = render::problem_markdown(problem, &self.language)
                .and_then(|md| Ok(fs::write(&file, md)?));

            // a single bad file does not stop the batch
            match written {
                Ok(()) => {
                    tracing::info!(file = %file.display(), "wrote");
                    generated.push(problem.stat.question_title_slug.clone());
                }
                Err(err) => {
                    tracing::error!(file = %file.display(), error = %err, "write failed");
                }
            }
        }

        let summary = Summary {
            user_name,
            slugs: problems
                .iter()
                .map(|problem| problem.stat.question_title_slug.clone())
                .collect(),
            progress,
            total_submissions: calendar.total(),
        };

        let summary_path = self.output_dir.join("summary.json");
        fs::write(&summary_path, render::summary_json(&summary)?)?;

        Ok(ExportOutcome {
            generated,
            summary_path,
        })
    }
}

/// Keep only problems the user has accepted solutions for.
fn solved_stats(list: ProblemList) -> Vec<Stat> {
    list.stat_status_pairs
        .into_iter()
        .filter(|pair| pair.status.as_deref() == Some("ac"))
        .map(|pair| pair.stat)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_stats_keeps_only_accepted() {
        let list: ProblemList = serde_json::from_str(
            r#"{
                "user_name": "grace",
                "stat_status_pairs": [
                    {
                        "stat": {
                            "question_id": 1,
                            "question__title": "Two Sum",
                            "question__title_slug": "two-sum"
                        },
                        "status": "ac"
                    },
                    {
                        "stat": {
                            "question_id": 2,
                            "question__title": "Add Two Numbers",
                            "question__title_slug": "add-two-numbers"
                        },
                        "status": "notac"
                    },
                    {
                        "stat": {
                            "question_id": 3,
                            "question__title": "Longest Substring",
                            "question__title_slug": "longest-substring"
                        },
                        "status": null
                    }
                ]
            }"#,
        )
        .unwrap();

        let solved = solved_stats(list);
        assert_eq!(solved.len(), 1);
        assert_eq!(solved[0].question_title_slug, "two-sum");
    }
}
