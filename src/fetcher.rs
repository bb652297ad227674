use crate::fetch_error::FetchError;
use serde_json::Value;
use std::error::Error;
use std::io::{self, Write};
use tracing::{debug, warn};

pub const TODO_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

const ERROR_LABEL: &str = "Error fetching data:";

/// A response body: parsed JSON, or the raw text when it isn't JSON.
#[derive(Debug)]
pub enum Data {
    Json(Value),
    Text(String),
}

/// What came back from a successful request.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub data: Data,
}

/// Sends exactly one GET to `url`. Any non-2xx status is an error.
///
/// A body that isn't valid JSON is kept as text instead of failing.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Response, FetchError> {
    debug!(url, "sending request");
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!(%status, "received response");
    if !status.is_success() {
        return Err(FetchError::StatusError(status));
    }

    let body = response.text().await?;
    let data = match serde_json::from_str(&body) {
        Ok(value) => Data::Json(value),
        Err(e) => {
            debug!(error = %e, "body is not JSON, passing it through as text");
            Data::Text(body)
        }
    };

    Ok(Response {
        status: status.as_u16(),
        data,
    })
}

/// Writes the body to `out` on success, or the labelled error to `err`.
pub fn report(
    outcome: Result<Response, FetchError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match outcome {
        Ok(response) => {
            debug!(status = response.status, "printing response body");
            match response.data {
                Data::Json(value) => writeln!(out, "{}", serde_json::to_string_pretty(&value)?),
                Data::Text(text) => writeln!(out, "{}", text),
            }
        }
        Err(e) => writeln!(err, "{} {}", ERROR_LABEL, describe(&e)),
    }
}

/// The error's message followed by each cause in its source chain.
fn describe(error: &FetchError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // reqwest's own message is already part of the top-level text
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Fetches `url` once and reports the outcome to `out` or `err`.
pub async fn run_with(
    client: &reqwest::Client,
    url: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let outcome = fetch(client, url).await;
    report(outcome, out, err)
}

/// Fetches the todo and prints it. Failures end up on stderr, never in the
/// exit status.
pub async fn run() {
    let client = reqwest::Client::new();
    if let Err(e) = run_with(&client, TODO_URL, &mut io::stdout(), &mut io::stderr()).await {
        warn!(error = %e, "could not write fetch result");
    }
}
