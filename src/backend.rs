//! HTTP client for the quiz-generation backend.
//!
//! Each sub-command maps to exactly one GET request. Arguments travel as
//! percent-encoded query-string pairs and the response body is treated as an
//! opaque JSON value; the backend's schemas are not modelled here.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use urlencoding::encode;

use crate::config::Settings;

/// Request free-text completion for a prompt.
pub async fn get_output(settings: &Settings, prompt: &str) -> Result<Value> {
    request_json(&get_output_url(&settings.base_url, prompt)).await
}

/// Request multiple-choice questions generated from a passage.
pub async fn generate_mcq(
    settings: &Settings,
    text: &str,
    number_of_questions: u32,
    level: u32,
    image: Option<&str>,
) -> Result<Value> {
    let url = generate_mcq_url(&settings.base_url, text, number_of_questions, level, image);
    request_json(&url).await
}

/// Request a summary of a passage.
pub async fn summarize(settings: &Settings, text: &str, image: Option<&str>) -> Result<Value> {
    request_json(&summarize_url(&settings.base_url, text, image)).await
}

/// Request an evaluation of an answer against its question.
pub async fn evaluate_answer(
    settings: &Settings,
    question: &str,
    answer: &str,
    max_marks: u32,
) -> Result<Value> {
    let url = evaluate_answer_url(&settings.base_url, question, answer, max_marks);
    request_json(&url).await
}

fn get_output_url(base: &str, prompt: &str) -> String {
    format!("{base}/get-output?prompt={prompt}", prompt = encode(prompt))
}

fn generate_mcq_url(
    base: &str,
    text: &str,
    number_of_questions: u32,
    level: u32,
    image: Option<&str>,
) -> String {
    let mut url = format!(
        "{base}/generate-mcq?text={text}&number_of_questions={number_of_questions}&level={level}",
        text = encode(text),
    );
    if let Some(image) = image {
        url.push_str(&format!("&image={}", encode(image)));
    }
    url
}

fn summarize_url(base: &str, text: &str, image: Option<&str>) -> String {
    let mut url = format!("{base}/summarize?text={text}", text = encode(text));
    if let Some(image) = image {
        url.push_str(&format!("&image={}", encode(image)));
    }
    url
}

fn evaluate_answer_url(base: &str, question: &str, answer: &str, max_marks: u32) -> String {
    format!(
        "{base}/evaluate-answer?question={question}&answer={answer}&max_marks={max_marks}",
        question = encode(question),
        answer = encode(answer),
    )
}

/// Send one GET request and decode the body as JSON.
///
/// A non-2xx status fails with the status and the response body so the
/// backend's error message survives into the diagnostic. No retries.
async fn request_json(url: &str) -> Result<Value> {
    let client = http_client()?;
    debug!(%url, "sending backend request");
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("backend returned {status}: {body}");
    }
    let payload: Value = resp
        .json()
        .await
        .context("decoding backend response as JSON")?;
    Ok(payload)
}

fn http_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent("quizbench/0.1")
        .gzip(true)
        .brotli(true)
        .build()?)
}
