//! Movie API Client
//!
//! This module provides async functions for the movie and auth endpoints.
//! Every request carries `Authorization: Bearer <token>` when the token store
//! holds a live token. Each call is attempted once; there is no retry.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::egui_app::token_store::TokenStore;
use crate::shared::auth::{Credentials, TokenResponse};
use crate::shared::movie::{Movie, MoviePage, NewMovie};
use crate::shared::query::ListQuery;

/// API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, TLS
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Request failed: {status} - {body}")]
    Status { status: u16, body: String },

    /// 2xx response with a body we could not parse
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, for non-2xx responses
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Movie/auth API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: TokenStore) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            config: config.clone(),
            client: builder.build()?,
            tokens,
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET /movies/list`
    pub async fn list_movies(&self, query: &ListQuery) -> Result<MoviePage, ApiError> {
        let url = self.config.api_url("/movies/list");
        let request = self.client.get(&url).query(&query.to_query_pairs());
        let response = self.send(request, &url).await?;
        decode_json(response).await
    }

    /// `POST /movies/add`
    pub async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, ApiError> {
        let url = self.config.api_url("/movies/add");
        let response = self.send(self.client.post(&url).json(movie), &url).await?;
        decode_json(response).await
    }

    /// `PUT /movies/update/:id` with the full record
    pub async fn update_movie(&self, movie: &Movie) -> Result<Movie, ApiError> {
        let url = self.config.api_url(&format!("/movies/update/{}", movie.id));
        let response = self.send(self.client.put(&url).json(movie), &url).await?;
        decode_json(response).await
    }

    /// `DELETE /movies/delete/:id`; the response body is ignored
    pub async fn delete_movie(&self, id: &str) -> Result<(), ApiError> {
        let url = self.config.api_url(&format!("/movies/delete/{}", id));
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let url = self.config.api_url("/auth/login");
        let response = self.send(self.client.post(&url).json(credentials), &url).await?;
        decode_json(response).await
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let url = self.config.api_url("/auth/signup");
        let response = self.send(self.client.post(&url).json(credentials), &url).await?;
        decode_json(response).await
    }

    async fn send(&self, mut request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(url, error = %e, "request failed");
            ApiError::Network(e)
        })?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::warn!(url, status = status.as_u16(), "non-success response");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
