use crate::config::SourceConfig;
use crate::model::{UserPage, UserRecord};
use crate::source::{RecordSource, SourceError, SourceResult};
use std::time::Duration;

/// Fetches one page of users from the remote JSON API.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    nationality: String,
    results: u32,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            nationality: config.nationality.clone(),
            results: config.results,
        })
    }

    pub async fn fetch_page(&self) -> SourceResult<Vec<UserRecord>> {
        let results = self.results.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[("nat", self.nationality.as_str()), ("results", results.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let page: UserPage = response.json().await?;
        tracing::debug!(count = page.results.len(), url = %self.url, "fetched user page");
        Ok(page.results)
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self) -> SourceResult<Vec<UserRecord>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.fetch_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    const TWO_USERS: &str = r#"{"results":[
        {"name":{"first":"Ada","last":"Byron"},"location":{"postcode":12345}},
        {"name":{"first":"Linus","last":"T"},"location":{"postcode":"N2K"}}
    ],"info":{"results":2}}"#;

    /// Serves a single canned response and reports the request line it saw.
    fn serve_once(status: &str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/", listener.local_addr().unwrap());
        let status = status.to_string();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let text = String::from_utf8_lossy(&request);
            let line = text.lines().next().unwrap_or_default().to_string();
            tx.send(line).unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        (url, rx)
    }

    fn source_for(url: String) -> HttpSource {
        let config = SourceConfig {
            url,
            nationality: "us".into(),
            results: 10,
            timeout_secs: 5,
        };
        let mut source = HttpSource::new(&config).unwrap();
        // loopback only; ignore any proxy set in the environment
        source.client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap();
        source
    }

    #[test]
    fn test_fetch_decodes_results_envelope() {
        let (url, requests) = serve_once("200 OK", TWO_USERS);
        let records = source_for(url).fetch().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.first, "Ada");
        assert_eq!(records[0].location.postcode, "12345");
        assert_eq!(records[1].location.postcode, "N2K");

        let line = requests.recv().unwrap();
        assert!(line.starts_with("GET /api/?"), "{}", line);
        assert!(line.contains("nat=us&results=10"), "{}", line);
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let (url, _requests) = serve_once("500 Internal Server Error", "{}");
        let err = source_for(url).fetch().unwrap_err();
        assert!(matches!(err, SourceError::Status(500)), "{:?}", err);
    }
}
