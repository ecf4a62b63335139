use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ContractError;
use crate::spec::{LogDetail, RequestSpec, ResponseSpec, Specification};

/// One request/response pair as it went over the wire
#[derive(Debug, Clone)]
pub struct Exchange {
    pub method: Method,
    pub url: String,
    pub request_body: Option<String>,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl Exchange {
    /// Decode the response body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ContractError> {
        serde_json::from_str(&self.body).map_err(|source| ContractError::Decode {
            model: short_type_name::<T>(),
            source,
            exchange: self.to_string(),
        })
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--> {} {}", self.method, self.url)?;
        if let Some(body) = &self.request_body {
            writeln!(f, "    {body}")?;
        }
        write!(f, "<-- {}", self.status)?;
        if let Some(content_type) = &self.content_type {
            write!(f, " ({content_type})")?;
        }
        if !self.body.is_empty() {
            write!(f, "\n    {}", self.body)?;
        }
        Ok(())
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    head.rsplit("::").next().unwrap_or(head)
}

/// HTTP client that applies an installed [`Specification`] to every call
#[derive(Debug, Clone)]
pub struct ContractClient {
    http: Client,
    installed: Option<Specification>,
}

impl ContractClient {
    pub fn new(timeout: Duration) -> Result<Self, ContractError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            installed: None,
        })
    }

    /// Replaces whatever pair was installed before; nothing is merged.
    pub fn install(&mut self, request: RequestSpec, response: ResponseSpec) -> &Specification {
        self.installed.insert(Specification::new(request, response))
    }

    pub fn specification(&self) -> Option<&Specification> {
        self.installed.as_ref()
    }

    pub async fn get(&self, path: &str) -> Result<Exchange, ContractError> {
        self.call(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Exchange, ContractError> {
        self.call(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Exchange, ContractError> {
        self.call(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Exchange, ContractError> {
        self.call(Method::DELETE, path, None::<&()>).await
    }

    async fn call<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Exchange, ContractError> {
        let specification = self.installed.as_ref().ok_or(ContractError::NotInstalled)?;
        self.execute(specification, method, path, body).await
    }

    /// Sends exactly one request under `specification` and verifies the
    /// response against its response side.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        specification: &Specification,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Exchange, ContractError> {
        let request = &specification.request;
        let url = request.url(path);

        let request_body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(ContractError::Encode)?;

        log_request(request, &method, &url, request_body.as_deref());

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .headers(request.headers().clone());
        if let Some(payload) = &request_body {
            builder = builder.body(payload.clone());
        }

        let response = builder.send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await?;

        let exchange = Exchange {
            method,
            url,
            request_body,
            status,
            content_type,
            body,
        };

        log_response(request.log_detail(), &exchange);

        specification.response.verify(&exchange)?;
        Ok(exchange)
    }
}

fn log_request(request: &RequestSpec, method: &Method, url: &str, body: Option<&str>) {
    match request.log_detail() {
        LogDetail::None => {}
        LogDetail::Summary => {
            tracing::info!(method = %method, url = %url, "sending request");
        }
        LogDetail::All => {
            tracing::info!(
                method = %method,
                url = %url,
                headers = ?request.loggable_headers(),
                body = body.unwrap_or_default(),
                "sending request"
            );
        }
    }
}

fn log_response(detail: LogDetail, exchange: &Exchange) {
    match detail {
        LogDetail::None => {}
        LogDetail::Summary => {
            tracing::info!(
                method = %exchange.method,
                url = %exchange.url,
                status = exchange.status.as_u16(),
                "received response"
            );
        }
        LogDetail::All => {
            tracing::info!(
                method = %exchange.method,
                url = %exchange.url,
                status = exchange.status.as_u16(),
                content_type = exchange.content_type.as_deref().unwrap_or_default(),
                body = %exchange.body,
                "received response"
            );
        }
    }
}
