//! HTTP client for the LeetCode-CN API.
//!
//! Login is cookie based: fetch a CSRF token, post the multipart login form
//! with redirects disabled, and keep the `Set-Cookie` pairs of the 302
//! response as the session cookie for every later request.

use crate::error::{Error, Result};
use crate::models::{
    FavoriteList, LastSubmission, ProblemList, Question, QuestionStatus, QuestionTranslation,
    SubmissionCalendar, Tag,
};
use reqwest::header::{COOKIE, REFERER, SET_COOKIE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub struct LeetCodeClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<String>,
}

#[derive(Deserialize)]
struct GraphqlEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct QuestionData {
    question: Option<Question>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionStatusesData {
    all_questions: Vec<QuestionStatus>,
}

#[derive(Deserialize)]
struct TranslationsData {
    translations: Vec<QuestionTranslation>,
}

#[derive(Deserialize)]
struct TagsResponse {
    topics: Vec<Tag>,
}

#[derive(Deserialize)]
struct FavoritesResponse {
    #[serde(default)]
    favorites: FavoriteList,
}

impl LeetCodeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            session: None,
        })
    }

    /// GET `/api/ensure_csrf` and pull the token out of the first
    /// `Set-Cookie` header.
    pub async fn ensure_csrf(&self) -> Result<String> {
        let url = format!("{}/api/ensure_csrf", self.base_url);
        let response = self.http.get(&url).send().await?;

        let header = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .ok_or(Error::MissingCsrf)?;

        cookie_value(header)
            .map(str::to_string)
            .ok_or(Error::MissingCsrf)
    }

    /// Multipart form login. Success is exactly a 302; its cookies become
    /// the session.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let login_url = format!("{}/accounts/login/", self.base_url);
        let csrf = self.ensure_csrf().await?;

        let form = reqwest::multipart::Form::new()
            .text("csrfmiddlewaretoken", csrf.clone())
            .text("login", username.to_string())
            .text("password", password.to_string())
            .text("next", "/problemset/all/");

        let response = self
            .http
            .post(&login_url)
            .multipart(form)
            .header(REFERER, login_url.as_str())
            .header(COOKIE, format!("csrftoken={csrf}"))
            .send()
            .await?;

        if response.status() != StatusCode::FOUND {
            return Err(Error::LoginFailed(response.status().as_u16()));
        }

        let pairs: Vec<&str> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(cookie_pair)
            .collect();

        if pairs.is_empty() {
            return Err(Error::LoginFailed(response.status().as_u16()));
        }

        self.session = Some(pairs.join(";"));
        tracing::debug!("session established");
        Ok(())
    }

    pub async fn progress(&self) -> Result<serde_json::Value> {
        self.get_json("/api/progress/all").await
    }

    pub async fn problems(&self) -> Result<ProblemList> {
        self.get_json("/api/problems/all").await
    }

    pub async fn tags(&self) -> Result<Vec<Tag>> {
        let response: TagsResponse = self.get_json("/problems/api/tags").await?;
        Ok(response.topics)
    }

    pub async fn favorites(&self) -> Result<FavoriteList> {
        let response: FavoritesResponse = self.get_json("/problems/api/favorites").await?;
        Ok(response.favorites)
    }

    /// The endpoint returns the timestamp→count map as a JSON-encoded
    /// string, so it is decoded twice.
    pub async fn submission_calendar(&self) -> Result<SubmissionCalendar> {
        let raw: String = self.get_json("/api/user_submission_calendar/").await?;
        let counts = serde_json::from_str(&raw)?;
        Ok(SubmissionCalendar(counts))
    }

    pub async fn last_submission(&self, qid: u32, lang: &str) -> Result<LastSubmission> {
        let qid = qid.to_string();
        let request = self
            .http
            .get(format!("{}/submissions/latest", self.base_url))
            .query(&[("qid", qid.as_str()), ("lang", lang)]);

        self.send_json(request, "/submissions/latest").await
    }

    pub async fn question(&self, title_slug: &str) -> Result<Question> {
        let query = format!(
            r#"
            query {{
                question(titleSlug: "{title_slug}") {{
                    questionId
                    questionFrontendId
                    title
                    titleSlug
                    content
                    translatedTitle
                    translatedContent
                    isPaidOnly
                    difficulty
                    likes
                    dislikes
                    similarQuestions
                    topicTags {{
                        name
                        slug
                        translatedName
                    }}
                    codeSnippets {{
                        lang
                        langSlug
                        code
                    }}
                    stats
                    hints
                    sampleTestCase
                }}
            }}"#
        );

        let data: QuestionData = self.graphql(&query).await?;
        data.question
            .ok_or_else(|| Error::QuestionNotFound(title_slug.to_string()))
    }

    pub async fn question_statuses(&self) -> Result<Vec<QuestionStatus>> {
        let query = r#"
            query allQuestionsStatuses {
                allQuestions {
                    questionId
                    status
                }
            }"#;

        let data: QuestionStatusesData = self.graphql(query).await?;
        Ok(data.all_questions)
    }

    pub async fn question_translations(&self) -> Result<Vec<QuestionTranslation>> {
        let query = r#"
            query getQuestionTranslation($lang: String) {
                translations: allAppliedQuestionTranslations(lang: $lang) {
                    title
                    questionId
                }
            }"#;

        let data: TranslationsData = self.graphql(query).await?;
        Ok(data.translations)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.http.get(format!("{}{}", self.base_url, path));
        self.send_json(request, path).await
    }

    async fn graphql<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        let request = self
            .http
            .post(format!("{}/graphql", self.base_url))
            .json(&serde_json::json!({ "query": query }));

        let envelope: GraphqlEnvelope<T> = self.send_json(request, "/graphql").await?;
        Ok(envelope.data)
    }

    /// Attach the session cookie, send, and decode. `path` only labels
    /// errors.
    async fn send_json<T: DeserializeOwned>(
        &self,
        mut request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T> {
        if let Some(cookie) = &self.session {
            request = request.header(COOKIE, cookie.as_str());
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Api {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// `csrftoken=abc; Path=/` → `abc`
fn cookie_value(header: &str) -> Option<&str> {
    header.split(';').next()?.split('=').nth(1)
}

/// `LEETCODE_SESSION=abc; Path=/; HttpOnly` → `LEETCODE_SESSION=abc`
fn cookie_pair(header: &str) -> Option<&str> {
    header.split(';').next()
}
