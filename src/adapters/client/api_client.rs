//! reqwest-backed API client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::adapters::http::grades::{GradeResponse, GradeStandingResponse};
use crate::adapters::http::numbers::{NumberPairResponse, NumberResponse};
use crate::adapters::http::DataResponse;
use crate::domain::grade::{ClassPolicy, NewGrade};
use crate::domain::number::NewNumber;

use super::ClientError;

/// Base URL used when none is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client for the numbers and grades API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    default_headers: HeaderMap,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
            http_client: reqwest::Client::new(),
        }
    }

    /// Add or replace a header sent with every request.
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// `GET endpoint`, decoding the JSON body on success.
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ClientError> {
        let request = self
            .http_client
            .get(self.url(endpoint))
            .headers(self.default_headers.clone());
        Self::send(request).await
    }

    /// `POST endpoint` with a JSON body, decoding the JSON body on success.
    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self
            .http_client
            .post(self.url(endpoint))
            .headers(self.default_headers.clone())
            .json(body);
        Self::send(request).await
    }

    async fn send<R: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<R, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let error = ClientError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %error, "API request failed");
            return Err(error);
        }

        Ok(response.json().await?)
    }

    /// Adjacent number pairs, ordered by the first id.
    pub async fn list_number_pairs(&self) -> Result<Vec<NumberPairResponse>, ClientError> {
        let response: DataResponse<Vec<NumberPairResponse>> = self.get("/api/numbers").await?;
        Ok(response.data)
    }

    pub async fn add_number(&self, number: NewNumber) -> Result<NumberResponse, ClientError> {
        let response: DataResponse<NumberResponse> = self.post("/api/numbers", &number).await?;
        Ok(response.data)
    }

    /// Validate raw form input locally, then store it.
    pub async fn submit_number(&self, form: &Value) -> Result<NumberResponse, ClientError> {
        let number = NewNumber::from_json(form)?;
        self.add_number(number).await
    }

    /// Grades with their class statistics.
    pub async fn list_grades(&self) -> Result<Vec<GradeStandingResponse>, ClientError> {
        let response: DataResponse<Vec<GradeStandingResponse>> = self.get("/api/grades").await?;
        Ok(response.data)
    }

    pub async fn add_grade(&self, grade: NewGrade) -> Result<GradeResponse, ClientError> {
        let response: DataResponse<GradeResponse> = self.post("/api/grades", &grade).await?;
        Ok(response.data)
    }

    /// Validate raw form input locally against `policy`, then store it.
    pub async fn submit_grade(
        &self,
        form: &Value,
        policy: &ClassPolicy,
    ) -> Result<GradeResponse, ClientError> {
        let grade = NewGrade::from_json(form, policy)?;
        self.add_grade(grade).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Nothing listens here; any test that reaches the network fails.
    fn offline_client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9")
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/numbers"), "http://localhost:8080/api/numbers");
    }

    #[test]
    fn sends_json_content_type_by_default() {
        let client = ApiClient::default();
        assert_eq!(
            client.default_headers.get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
    }

    #[test]
    fn extra_default_headers_are_kept() {
        let client = ApiClient::default().with_default_header(
            HeaderName::from_static("x-request-source"),
            HeaderValue::from_static("cli"),
        );
        assert_eq!(
            client.default_headers.get("x-request-source"),
            Some(&HeaderValue::from_static("cli"))
        );
    }

    #[tokio::test]
    async fn submit_number_rejects_invalid_form_without_sending() {
        let result = offline_client().submit_number(&json!({ "value": "abc" })).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn submit_grade_rejects_disallowed_class_without_sending() {
        let result = offline_client()
            .submit_grade(&json!({ "class": "Art", "value": 90 }), &ClassPolicy::standard())
            .await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_http_error() {
        let result = offline_client().list_number_pairs().await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }
}
