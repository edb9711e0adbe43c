// src/fetch/http.rs
// =============================================================================
// This module fetches one page over HTTP and returns its same-origin links.
//
// Steps for every URL:
// 1. Issue a single GET (redirects are followed by reqwest)
// 2. Take the origin from the *final* URL, so a redirected page is scoped to
//    the site it landed on rather than the one we asked for
// 3. Read the body, hand it to the link extractor
// 4. Normalize + filter the raw hrefs against that origin
//
// Any failure along the way (DNS, refused connection, timeout, 4xx/5xx, a body
// that can't be read) is logged and reported to the crawler as "no links".
// A single bad page never stops the crawl.
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use super::html::{LinkExtractor, ScraperExtractor};
use super::origin::{normalize_and_filter, origin_of};
use super::PageFetcher;

/// Why a page produced no links.
///
/// Never leaves this module as an error; it only shows up in the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("too many redirects")]
    TooManyRedirects,
    #[error("could not resolve hostname")]
    Dns,
    #[error("connection failed")]
    Connect,
    #[error("TLS certificate error")]
    Tls,
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("page has no network origin: {0}")]
    NoOrigin(String),
    #[error("{0}")]
    Other(String),
}

// reqwest errors can happen for many reasons; sort them into the buckets above
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        let error_string = error.to_string().to_lowercase();

        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_redirect() {
            FetchError::TooManyRedirects
        } else if error.is_connect() {
            if error_string.contains("dns") {
                FetchError::Dns
            } else {
                FetchError::Connect
            }
        } else if error.is_body() || error.is_decode() {
            // Headers arrived but the body was cut short or couldn't be decoded
            FetchError::Body(error.to_string())
        } else if error_string.contains("certificate") || error_string.contains("ssl") {
            FetchError::Tls
        } else {
            FetchError::Other(error.to_string())
        }
    }
}

/// Page fetcher backed by a shared reqwest client.
///
/// The client is cheap to clone and pools connections, so one fetcher is
/// shared by every concurrent fetch task of a crawl.
#[derive(Debug, Clone)]
pub struct HttpFetcher<E = ScraperExtractor> {
    client: Client,
    extractor: E,
}

impl HttpFetcher<ScraperExtractor> {
    /// Builds a fetcher with the default `scraper`-based link extractor.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        Self::with_extractor(timeout, user_agent, ScraperExtractor)
    }
}

impl<E: LinkExtractor> HttpFetcher<E> {
    pub fn with_extractor(
        timeout: Duration,
        user_agent: &str,
        extractor: E,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client, extractor })
    }

    // Fetches one page and returns its same-origin links
    //
    // Parameters:
    //   url: the page to fetch (any string; a malformed one fails at send())
    //
    // Returns:
    //   Ok(links) = absolute same-origin links, in page order, without repeats
    //   Err(FetchError) = why the page contributes nothing (only for logging)
    pub async fn try_fetch(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // The request URL after redirects, not the one we started with
        let effective = response.url().clone();
        let origin =
            origin_of(&effective).ok_or_else(|| FetchError::NoOrigin(effective.to_string()))?;

        // text() consumes the response, so the connection is released here
        // on success and by drop on every early return above
        let body = response.text().await?;
        let raw_links = self.extractor.extract_links(&body);

        Ok(normalize_and_filter(raw_links, &origin))
    }
}

#[async_trait]
impl<E: LinkExtractor> PageFetcher for HttpFetcher<E> {
    async fn fetch(&self, url: &str) -> Vec<String> {
        match self.try_fetch(url).await {
            Ok(links) => {
                tracing::debug!(url, links = links.len(), "fetched page");
                links
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "fetch failed, page contributes no links");
                Vec::new()
            }
        }
    }
}
