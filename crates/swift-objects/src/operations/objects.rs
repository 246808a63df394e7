//! The seven object operations: download, list, create, copy, delete,
//! update, and get.

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, ETAG, HeaderMap, LAST_MODIFIED};
use reqwest::{Body, Method, Response, StatusCode};
use time::OffsetDateTime;
use tracing::{debug, error, info, instrument};

use crate::client::expect_status;
use crate::types::http_date;
use crate::types::{
    CopyOpts, CreateOpts, DeleteOpts, DownloadOpts, GetOpts, ListOpts, Object, ObjectMetadata,
    UpdateOpts,
};
use crate::{Error, Result, SwiftClient, TRACING_TARGET_OBJECTS};

/// Returns the non-standard COPY verb.
fn copy_method() -> Method {
    Method::from_bytes(b"COPY").expect("COPY is a valid method token")
}

/// Result of a download request.
///
/// Header accessors are available up front; the body is extracted lazily by
/// [`bytes`](Self::bytes) or [`text`](Self::text), which consume the result.
#[derive(Debug)]
pub struct DownloadResult {
    response: Response,
}

impl DownloadResult {
    fn new(response: Response) -> Self {
        Self { response }
    }

    /// Returns the HTTP status (200, or 206 for ranged downloads).
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Returns the object's content type.
    pub fn content_type(&self) -> Option<&str> {
        header_str(self.response.headers(), CONTENT_TYPE)
    }

    /// Returns the object's size in bytes.
    pub fn content_length(&self) -> Option<u64> {
        header_u64(self.response.headers(), CONTENT_LENGTH)
    }

    /// Returns the object's ETag.
    pub fn etag(&self) -> Option<&str> {
        header_str(self.response.headers(), ETAG)
    }

    /// Returns the object's last-modified timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the `Last-Modified` header isn't a valid HTTP date.
    pub fn last_modified(&self) -> Result<Option<OffsetDateTime>> {
        header_date(self.response.headers())
    }

    /// Returns the object's user metadata.
    pub fn metadata(&self) -> ObjectMetadata {
        ObjectMetadata::from_headers(self.response.headers())
    }

    /// Extracts the object content as bytes.
    pub async fn bytes(self) -> Result<Bytes> {
        Ok(self.response.bytes().await?)
    }

    /// Extracts the object content as a UTF-8 string.
    pub async fn text(self) -> Result<String> {
        Ok(self.response.text().await?)
    }
}

/// One page of a container listing.
///
/// Depending on [`ListOpts::full`] the server answered with a JSON body
/// describing each object or a plaintext body of names; extraction methods
/// decode whichever form was returned.
#[derive(Debug, Clone)]
pub struct ListPage {
    json: bool,
    body: Bytes,
}

impl ListPage {
    fn new(json: bool, body: Bytes) -> Self {
        Self { json, body }
    }

    /// Extracts the full object descriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the page was requested as plaintext names, or the
    /// JSON body is malformed.
    pub fn objects(&self) -> Result<Vec<Object>> {
        if !self.json {
            return Err(Error::Decode(
                "Listing was returned as plaintext names; request it with ListOpts::full"
                    .to_string(),
            ));
        }
        if self.body.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Extracts the object names, from either listing form.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is malformed.
    pub fn names(&self) -> Result<Vec<String>> {
        if self.json {
            return Ok(self.objects()?.into_iter().map(|o| o.name).collect());
        }
        let text = std::str::from_utf8(&self.body)
            .map_err(|_| Error::Decode("Plaintext listing is not valid UTF-8".to_string()))?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Returns the marker continuing the listing after this page, i.e. the
    /// last name on the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is malformed.
    pub fn next_marker(&self) -> Result<Option<String>> {
        Ok(self.names()?.pop())
    }
}

/// Result of a get (HEAD) request: the object's headers.
#[derive(Debug, Clone)]
pub struct GetResult {
    headers: HeaderMap,
}

impl GetResult {
    fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Returns the object's content type.
    pub fn content_type(&self) -> Option<&str> {
        header_str(&self.headers, CONTENT_TYPE)
    }

    /// Returns the object's size in bytes.
    pub fn content_length(&self) -> Option<u64> {
        header_u64(&self.headers, CONTENT_LENGTH)
    }

    /// Returns the object's ETag.
    pub fn etag(&self) -> Option<&str> {
        header_str(&self.headers, ETAG)
    }

    /// Returns the object's last-modified timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the `Last-Modified` header isn't a valid HTTP date.
    pub fn last_modified(&self) -> Result<Option<OffsetDateTime>> {
        header_date(&self.headers)
    }

    /// Extracts the object's user metadata.
    pub fn metadata(&self) -> ObjectMetadata {
        ObjectMetadata::from_headers(&self.headers)
    }
}

/// Receipt for a successful create (upload).
#[derive(Debug, Clone)]
pub struct CreateReceipt {
    /// MD5 checksum the server computed for the stored object.
    pub etag: Option<String>,
    /// Server transaction id (`X-Trans-Id`), useful for support tickets.
    pub transaction_id: Option<String>,
}

impl CreateReceipt {
    fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            etag: header_str(headers, ETAG).map(str::to_string),
            transaction_id: headers
                .get("x-trans-id")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        }
    }
}

fn header_str(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_u64(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<u64> {
    header_str(headers, name).and_then(|v| v.parse().ok())
}

fn header_date(headers: &HeaderMap) -> Result<Option<OffsetDateTime>> {
    match header_str(headers, LAST_MODIFIED) {
        Some(value) => http_date::parse(value).map(Some),
        None => Ok(None),
    }
}

/// Object operations bound to a Swift client.
///
/// Every method issues exactly one HTTP exchange; any concurrency is left to
/// the caller issuing multiple independent calls.
#[derive(Debug, Clone)]
pub struct ObjectOperations {
    client: SwiftClient,
}

impl ObjectOperations {
    /// Creates object operations with a Swift client.
    pub fn new(client: SwiftClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &SwiftClient {
        &self.client
    }

    /// Downloads an object's content, `GET /{container}/{object}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a status other than 200/206.
    #[instrument(skip(self, opts), target = TRACING_TARGET_OBJECTS, fields(container = %container, object = %object))]
    pub async fn download(
        &self,
        container: &str,
        object: &str,
        opts: &DownloadOpts,
    ) -> Result<DownloadResult> {
        let resource = format!("{container}/{object}");
        debug!(target: TRACING_TARGET_OBJECTS, resource = %resource, "Downloading object");

        let url = self.client.object_url(container, object)?;
        let request = opts.apply(self.client.request_json(Method::GET, url))?;

        let result = request.send().await.map_err(Error::Http);
        match result {
            Ok(response) => {
                let response = expect_status(
                    response,
                    &[StatusCode::OK, StatusCode::PARTIAL_CONTENT],
                    &resource,
                )
                .await?;
                info!(
                    target: TRACING_TARGET_OBJECTS,
                    resource = %resource,
                    content_length = ?response.content_length(),
                    "Object download started"
                );
                Ok(DownloadResult::new(response))
            }
            Err(e) => {
                error!(target: TRACING_TARGET_OBJECTS, resource = %resource, error = %e, "Failed to download object");
                Err(e)
            }
        }
    }

    /// Lists one page of a container, `GET /{container}`.
    ///
    /// With [`ListOpts::full`] the page carries JSON object descriptions,
    /// otherwise plaintext names. For marker continuation across pages see
    /// [`pages`](Self::pages).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a status other than 200/204.
    #[instrument(skip(self, opts), target = TRACING_TARGET_OBJECTS, fields(container = %container))]
    pub async fn list(&self, container: &str, opts: &ListOpts) -> Result<ListPage> {
        debug!(
            target: TRACING_TARGET_OBJECTS,
            container = %container,
            full = opts.full,
            marker = ?opts.marker,
            "Listing container"
        );

        let url = self.client.container_url(container)?;
        let accept = if opts.full {
            "application/json"
        } else {
            "text/plain"
        };
        let request = self
            .client
            .request(Method::GET, url)
            .header(ACCEPT, accept)
            .query(opts);

        let result = request.send().await.map_err(Error::Http);
        match result {
            Ok(response) => {
                let response = expect_status(
                    response,
                    &[StatusCode::OK, StatusCode::NO_CONTENT],
                    container,
                )
                .await?;
                let json = header_str(response.headers(), CONTENT_TYPE)
                    .is_some_and(|ct| ct.starts_with("application/json"));
                let body = response.bytes().await?;

                info!(
                    target: TRACING_TARGET_OBJECTS,
                    container = %container,
                    bytes = body.len(),
                    json,
                    "Container listed"
                );
                Ok(ListPage::new(json, body))
            }
            Err(e) => {
                error!(target: TRACING_TARGET_OBJECTS, container = %container, error = %e, "Failed to list container");
                Err(e)
            }
        }
    }

    /// Creates or replaces an object, `PUT /{container}/{object}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a status other than 201.
    #[instrument(skip(self, content, opts), target = TRACING_TARGET_OBJECTS, fields(container = %container, object = %object))]
    pub async fn create(
        &self,
        container: &str,
        object: &str,
        content: impl Into<Body>,
        opts: &CreateOpts,
    ) -> Result<CreateReceipt> {
        let resource = format!("{container}/{object}");
        debug!(target: TRACING_TARGET_OBJECTS, resource = %resource, "Creating object");

        let url = self.client.object_url(container, object)?;
        let request = opts
            .apply(self.client.request_json(Method::PUT, url))?
            .body(content);

        let result = request.send().await.map_err(Error::Http);
        match result {
            Ok(response) => {
                let response = expect_status(response, &[StatusCode::CREATED], &resource).await?;
                let receipt = CreateReceipt::from_headers(response.headers());
                info!(
                    target: TRACING_TARGET_OBJECTS,
                    resource = %resource,
                    etag = ?receipt.etag,
                    "Object created"
                );
                Ok(receipt)
            }
            Err(e) => {
                error!(target: TRACING_TARGET_OBJECTS, resource = %resource, error = %e, "Failed to create object");
                Err(e)
            }
        }
    }

    /// Copies an object server-side, `COPY /{container}/{object}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a status other than 201.
    #[instrument(skip(self, opts), target = TRACING_TARGET_OBJECTS, fields(container = %container, object = %object, destination = %opts.destination))]
    pub async fn copy(&self, container: &str, object: &str, opts: &CopyOpts) -> Result<()> {
        let resource = format!("{container}/{object}");
        debug!(
            target: TRACING_TARGET_OBJECTS,
            resource = %resource,
            destination = %opts.destination,
            "Copying object"
        );

        let url = self.client.object_url(container, object)?;
        let request = opts.apply(self.client.request_json(copy_method(), url))?;

        let result = request.send().await.map_err(Error::Http);
        match result {
            Ok(response) => {
                expect_status(response, &[StatusCode::CREATED], &resource).await?;
                info!(
                    target: TRACING_TARGET_OBJECTS,
                    resource = %resource,
                    destination = %opts.destination,
                    "Object copied"
                );
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_OBJECTS, resource = %resource, error = %e, "Failed to copy object");
                Err(e)
            }
        }
    }

    /// Deletes an object, `DELETE /{container}/{object}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a status other than 204.
    #[instrument(skip(self, _opts), target = TRACING_TARGET_OBJECTS, fields(container = %container, object = %object))]
    pub async fn delete(&self, container: &str, object: &str, _opts: &DeleteOpts) -> Result<()> {
        let resource = format!("{container}/{object}");
        debug!(target: TRACING_TARGET_OBJECTS, resource = %resource, "Deleting object");

        let url = self.client.object_url(container, object)?;
        let request = self.client.request_json(Method::DELETE, url);

        let result = request.send().await.map_err(Error::Http);
        match result {
            Ok(response) => {
                expect_status(response, &[StatusCode::NO_CONTENT], &resource).await?;
                info!(target: TRACING_TARGET_OBJECTS, resource = %resource, "Object deleted");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_OBJECTS, resource = %resource, error = %e, "Failed to delete object");
                Err(e)
            }
        }
    }

    /// Replaces an object's user metadata, `POST /{container}/{object}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a status other than 202.
    #[instrument(skip(self, opts), target = TRACING_TARGET_OBJECTS, fields(container = %container, object = %object))]
    pub async fn update(&self, container: &str, object: &str, opts: &UpdateOpts) -> Result<()> {
        let resource = format!("{container}/{object}");
        debug!(
            target: TRACING_TARGET_OBJECTS,
            resource = %resource,
            entries = opts.metadata.len(),
            "Updating object metadata"
        );

        let url = self.client.object_url(container, object)?;
        let request = opts.apply(self.client.request_json(Method::POST, url))?;

        let result = request.send().await.map_err(Error::Http);
        match result {
            Ok(response) => {
                expect_status(response, &[StatusCode::ACCEPTED], &resource).await?;
                info!(target: TRACING_TARGET_OBJECTS, resource = %resource, "Object metadata updated");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_OBJECTS, resource = %resource, error = %e, "Failed to update object metadata");
                Err(e)
            }
        }
    }

    /// Reads an object's headers without the body, `HEAD /{container}/{object}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a status other than 200/204.
    #[instrument(skip(self, opts), target = TRACING_TARGET_OBJECTS, fields(container = %container, object = %object))]
    pub async fn get(&self, container: &str, object: &str, opts: &GetOpts) -> Result<GetResult> {
        let resource = format!("{container}/{object}");
        debug!(target: TRACING_TARGET_OBJECTS, resource = %resource, "Getting object headers");

        let url = self.client.object_url(container, object)?;
        let request = opts.apply(self.client.request_json(Method::HEAD, url));

        let result = request.send().await.map_err(Error::Http);
        match result {
            Ok(response) => {
                let response = expect_status(
                    response,
                    &[StatusCode::OK, StatusCode::NO_CONTENT],
                    &resource,
                )
                .await?;
                info!(target: TRACING_TARGET_OBJECTS, resource = %resource, "Object headers retrieved");
                Ok(GetResult::new(response.headers().clone()))
            }
            Err(e) => {
                error!(target: TRACING_TARGET_OBJECTS, resource = %resource, error = %e, "Failed to get object headers");
                Err(e)
            }
        }
    }

    /// Returns a pager walking a container listing page by page.
    pub fn pages(&self, container: impl Into<String>, opts: ListOpts) -> super::ObjectPager {
        super::ObjectPager::new(self.clone(), container, opts)
    }
}
