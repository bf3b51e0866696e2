use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{WorklogOutcome, WorklogRequest};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

const JSON_MIME: &str = "application/json";

#[derive(Clone)]
pub struct WorklogClient {
    http: HttpClient,
    config: ApiConfig,
}

impl WorklogClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    /// Full URL the request will be posted to.
    pub fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    /// Sends one worklog entry. Any HTTP response becomes an outcome; only
    /// transport failures are returned as errors.
    pub async fn submit_worklog(&self, request: &WorklogRequest) -> Result<WorklogOutcome> {
        let url = self.url_for(&request.path());
        debug!(
            url = %url,
            time_spent_seconds = request.time_spent_seconds,
            started = %request.started,
            "submitting worklog"
        );

        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        if status == StatusCode::CREATED {
            debug!(issue = %request.issue_id, "worklog created");
            return Ok(WorklogOutcome::from_response(
                &request.issue_id,
                status,
                String::new(),
            ));
        }

        let body = response.text().await.unwrap_or_default();
        warn!(issue = %request.issue_id, status = status.as_u16(), "worklog rejected");
        Ok(WorklogOutcome::from_response(&request.issue_id, status, body))
    }
}

fn build_http_client(config: &ApiConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    let mut auth_value = header_value(format!("Bearer {}", config.token))?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| ApiError::InvalidConfig(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| ApiError::InvalidConfig(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockito::Matcher;
    use serde_json::json;

    const WORKLOG_PATH: &str = "/rest/api/2/issue/SVCOPS-619/worklog";

    fn sample_request() -> WorklogRequest {
        let started = Utc.with_ymd_and_hms(2024, 5, 6, 9, 30, 0).unwrap();
        WorklogRequest::new(
            "SVCOPS-619",
            started,
            1800,
            "fixed outage (Created by Log Time CLI)",
        )
    }

    fn client_for(server: &mockito::ServerGuard) -> WorklogClient {
        WorklogClient::new(ApiConfig::for_domain(&server.url(), "secret-token")).unwrap()
    }

    #[test]
    fn url_for_joins_api_root_and_path() {
        let client = WorklogClient::new(ApiConfig::for_domain("its.example.com", "t")).unwrap();
        assert_eq!(
            client.url_for(&sample_request().path()),
            "https://its.example.com/rest/api/2/issue/SVCOPS-619/worklog"
        );
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let result = WorklogClient::new(ApiConfig::for_domain("its.example.com", "bad\ntoken"));
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn posts_payload_with_bearer_and_json_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", WORKLOG_PATH)
            .match_header("authorization", "Bearer secret-token")
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .match_body(Matcher::Json(json!({
                "timeSpentSeconds": 1800,
                "started": "2024-05-06T09:30:00.000+0000",
                "comment": "fixed outage (Created by Log Time CLI)",
            })))
            .with_status(201)
            .with_body(r#"{"id":"10001"}"#)
            .create_async()
            .await;

        let outcome = client_for(&server)
            .submit_worklog(&sample_request())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            outcome,
            WorklogOutcome::Success {
                issue_id: "SVCOPS-619".to_string()
            }
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_failure_with_hint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", WORKLOG_PATH)
            .with_status(404)
            .with_body(r#"{"errorMessages":["Issue does not exist"]}"#)
            .create_async()
            .await;

        let outcome = client_for(&server)
            .submit_worklog(&sample_request())
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.message(),
            r#"Failed to log time: HTTP 404 - {"errorMessages":["Issue does not exist"]}"#
        );
        assert_eq!(
            outcome.hint(),
            Some("Issue ID not found. Please check the issue ID and try again.")
        );
    }

    #[tokio::test]
    async fn plain_ok_is_not_treated_as_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", WORKLOG_PATH)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let outcome = client_for(&server)
            .submit_worklog(&sample_request())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            WorklogOutcome::Failure { status, hint: None, .. } if status == StatusCode::OK
        ));
    }

    #[tokio::test]
    async fn unauthorized_carries_token_hint() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", WORKLOG_PATH)
            .with_status(401)
            .create_async()
            .await;

        let outcome = client_for(&server)
            .submit_worklog(&sample_request())
            .await
            .unwrap();

        assert_eq!(outcome.hint(), Some("Check your API token or permissions."));
    }

    #[tokio::test]
    async fn malformed_domain_is_an_invalid_config_error() {
        let client =
            WorklogClient::new(ApiConfig::for_domain("http://[::1", "secret-token")).unwrap();

        let result = client.submit_worklog(&sample_request()).await;
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let client =
            WorklogClient::new(ApiConfig::for_domain("http://127.0.0.1:1", "secret-token"))
                .unwrap();

        let result = client.submit_worklog(&sample_request()).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
