//! Client for the operator backend.
//!
//! The backend owns authentication, balances and persistence. This client
//! only shapes requests and turns responses into records or errors. Failed
//! requests are reported, never retried.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::records::{AccountHistoryEntry, UserRecord};
use crate::validation::{FundsRequest, LoginRequest, SignupRequest};
use crate::{Error, Result};

const USERS_PATH: &str = "/users";
const ACCOUNT_HISTORY_PATH: &str = "/users/account-history";
const SIGNUP_PATH: &str = "/users/signup";
const ADD_MONEY_PATH: &str = "/users/add-money";
const WITHDRAW_MONEY_PATH: &str = "/users/withdraw-money";
const LOGIN_PATH: &str = "/login";

/// Error body shape shared by every endpoint.
#[derive(Debug, Default, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FundsResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    new_balance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

/// Outcome of a successful add-money or withdraw call.
#[derive(Debug, Clone, PartialEq)]
pub struct FundsReceipt {
    pub phone: String,
    pub amount: f64,
    pub new_balance: f64,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl AdminClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("saffron-admin/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token attached to every subsequent request.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.set_token(token);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Decode a success body, or turn an error body into `Error::Api`
    /// carrying the server's message when it sent one.
    async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: ApiMessage = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        log::warn!("{} {} - {}", fallback, status, body);
        Err(Error::Api(message))
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        log::info!("Fetching users");

        let response = self
            .authorized(self.client.get(self.url(USERS_PATH)))
            .send()
            .await?;
        let users: Vec<UserRecord> = Self::decode(response, "Failed to fetch users").await?;

        log::debug!("Fetched {} user(s)", users.len());
        Ok(users)
    }

    pub async fn account_history(&self) -> Result<Vec<AccountHistoryEntry>> {
        log::info!("Fetching account history");

        let response = self
            .authorized(self.client.get(self.url(ACCOUNT_HISTORY_PATH)))
            .send()
            .await?;
        Self::decode(response, "Failed to fetch account history").await
    }

    /// Register a player. Returns the server's confirmation text.
    pub async fn signup(&self, request: &SignupRequest) -> Result<String> {
        log::info!("Registering player {}", request.phone());

        let response = self
            .authorized(self.client.post(self.url(SIGNUP_PATH)))
            .json(request)
            .send()
            .await?;
        let body: ApiMessage = Self::decode(response, "Something went wrong").await?;

        Ok(body
            .message
            .unwrap_or_else(|| "Player added successfully!".to_string()))
    }

    pub async fn add_money(&self, request: &FundsRequest) -> Result<FundsReceipt> {
        self.move_funds(ADD_MONEY_PATH, request, "Failed to add money")
            .await
    }

    pub async fn withdraw_money(&self, request: &FundsRequest) -> Result<FundsReceipt> {
        self.move_funds(WITHDRAW_MONEY_PATH, request, "Failed to withdraw money")
            .await
    }

    async fn move_funds(
        &self,
        path: &str,
        request: &FundsRequest,
        fallback: &str,
    ) -> Result<FundsReceipt> {
        log::info!("{} for {}: {}", path, request.phone(), request.amount());

        let response = self
            .authorized(self.client.post(self.url(path)))
            .json(request)
            .send()
            .await?;
        let body: FundsResponse = Self::decode(response, fallback).await?;

        Ok(FundsReceipt {
            phone: request.phone().to_string(),
            amount: request.amount(),
            new_balance: body.new_balance.unwrap_or(0.0),
            message: body.message,
        })
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String> {
        log::info!("Logging in as {}", request.phone());

        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(request)
            .send()
            .await?;
        let body: LoginResponse = Self::decode(response, "Login failed").await?;

        body.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Auth("Login response did not include a token".to_string()))
    }
}
