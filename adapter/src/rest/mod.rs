use reqwest::{header, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    config::StoreConfig,
    error::{AppError, AppResult},
};
use std::time::Duration;

pub mod model;

/// Thin client over the generic collection store. Every call shares the
/// same fixed timeout; on expiry the call fails like any other transport
/// error. Raw transport failures never leave this module, they are logged
/// and collapsed into a generic store failure.
#[derive(Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(cfg: &StoreConfig) -> AppResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(AppError::ClientBuildError)?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<Vec<T>> {
        let res = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        ok_or_status(res, path)?.json().await.map_err(transport)
    }

    /// GET of a single resource; 404 is an absent resource, not an error.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<Option<T>> {
        let res = self.http.get(self.url(path)).send().await.map_err(transport)?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        ok_or_status(res, path)?.json().await.map(Some).map_err(transport)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        ok_or_status(res, path)?.json().await.map_err(transport)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        ok_or_status(res, path)?.json().await.map_err(transport)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .http
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        ok_or_status(res, path)?.json().await.map_err(transport)
    }

    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let res = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        ok_or_status(res, path).map(|_| ())
    }
}

fn transport(err: reqwest::Error) -> AppError {
    tracing::error!(error = %err, "collection store request failed");
    AppError::ExternalServiceError("the collection store could not be reached".into())
}

fn ok_or_status(res: Response, path: &str) -> AppResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    tracing::error!(%status, path, "collection store returned an error status");
    if status == StatusCode::NOT_FOUND {
        Err(AppError::EntityNotFound(format!("resource not found: {path}")))
    } else {
        Err(AppError::ExternalServiceError(format!(
            "the collection store rejected the request ({status})"
        )))
    }
}
