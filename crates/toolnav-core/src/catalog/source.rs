//! Where the catalog document comes from

use std::path::PathBuf;

use async_trait::async_trait;

use crate::types::CatalogDocument;
use super::error::{CatalogError, CatalogResult};

/// A read-only catalog document source
///
/// Fetched once per session. No timeout or retry happens here; a failure is
/// reported to the caller as-is.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Where the document is read from, for log lines
    fn name(&self) -> &str;

    async fn fetch(&self) -> CatalogResult<CatalogDocument>;
}

/// Catalog served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> CatalogResult<CatalogDocument> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<CatalogDocument>().await?)
    }
}

/// Catalog read from a local JSON file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    display: String,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn name(&self) -> &str {
        &self.display
    }

    async fn fetch(&self) -> CatalogResult<CatalogDocument> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Catalog already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    document: CatalogDocument,
}

impl StaticCatalogSource {
    pub fn new(document: CatalogDocument) -> Self {
        Self { document }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> CatalogResult<CatalogDocument> {
        Ok(self.document.clone())
    }
}

/// HTTP source for `http://`/`https://` locations, file source otherwise
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpCatalogSource::new(location))
    } else {
        Box::new(FileCatalogSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolRecord;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tools.json");
        fs::write(
            &path,
            r#"{ "tools": [{ "id": 1, "name": "Fox", "isFree": true }], "categories": [] }"#,
        )
        .unwrap();

        let doc = FileCatalogSource::new(&path).fetch().await.unwrap();
        assert_eq!(doc.tools.len(), 1);
        assert!(doc.tools[0].is_free);
    }

    #[tokio::test]
    async fn test_file_source_errors() {
        let dir = tempdir().unwrap();

        let missing = FileCatalogSource::new(dir.path().join("absent.json"));
        assert!(matches!(missing.fetch().await, Err(CatalogError::Io(_))));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"tools\": [").unwrap();
        let broken = FileCatalogSource::new(&path);
        assert!(matches!(broken.fetch().await, Err(CatalogError::Json(_))));
    }

    #[tokio::test]
    async fn test_static_source() {
        let doc = CatalogDocument::new(vec![ToolRecord::new(1u64, "Fox")]);
        let source = StaticCatalogSource::new(doc.clone());
        assert_eq!(source.fetch().await.unwrap(), doc);
    }

    /// Serve one canned HTTP response on a local port
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/tools.json", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        url
    }

    #[tokio::test]
    async fn test_http_source_decodes_json() {
        let url = serve_once("200 OK", r#"{ "tools": [{ "id": 7, "name": "Fox" }], "categories": [] }"#).await;
        let doc = HttpCatalogSource::new(&url).fetch().await.unwrap();
        assert_eq!(doc.tools.len(), 1);
        assert_eq!(doc.tools[0].name, "Fox");
    }

    #[tokio::test]
    async fn test_http_source_errors() {
        let url = serve_once("404 Not Found", "").await;
        let missing = HttpCatalogSource::new(&url).fetch().await;
        assert!(matches!(missing, Err(CatalogError::Status { status: 404, .. })));

        let url = serve_once("200 OK", r#"{ "tools": ["#).await;
        assert!(matches!(HttpCatalogSource::new(&url).fetch().await, Err(CatalogError::Http(_))));
    }

    #[test]
    fn test_source_for() {
        assert_eq!(source_for("https://example.com/tools.json").name(), "https://example.com/tools.json");
        assert_eq!(source_for("./data/tools.json").name(), "./data/tools.json");
    }
}
