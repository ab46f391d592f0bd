// scraper.rs
use crate::config::ScrapeConfig;
use crate::scraper::models::{RawListing, SearchResults};
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use tracing::debug;

const RESULTS_SELECTOR: &str = r#"script[type="application/ld+json"][id="ld_searchpage_results"]"#;

pub struct ListingScraper {
    client: Client,
    url: String,
}

impl ListingScraper {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.to_string(),
        })
    }

    /// Single GET of the search page. Any non-2xx status is an error.
    pub fn fetch_html(&self) -> Result<String, ScraperError> {
        debug!(url = %self.url, "fetching search page");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        resp.text()
            .map_err(|e| ScraperError::Network(e.to_string()))
    }

    /// Pulls the listings out of the JSON-LD search results block.
    ///
    /// `Ok(None)` means the page has no such block. A block whose body is not
    /// valid JSON is an error.
    pub fn extract_listings(html: &str) -> Result<Option<Vec<RawListing>>, ScraperError> {
        let document = Html::parse_document(html);
        let selector =
            Selector::parse(RESULTS_SELECTOR).map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

        let Some(element) = document.select(&selector).next() else {
            return Ok(None);
        };

        let json_text: String = element.text().collect();
        let results: SearchResults = serde_json::from_str(&json_text)
            .map_err(|e| ScraperError::JsonParse(e.to_string()))?;

        let listings = results
            .item_list_element
            .into_iter()
            .map(|entry| entry.item)
            .collect();

        Ok(Some(listings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    // Answers a single request with `response` and returns the URL to hit.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}/search/cta?purveyor=owner")
    }

    fn scraper_for(url: &str) -> ListingScraper {
        let config = ScrapeConfig::for_endpoint(url, "unused.csv").unwrap();
        ListingScraper::new(&config).unwrap()
    }

    #[test]
    fn fetch_returns_body_on_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<html></html>",
        );

        let html = scraper_for(&url).fetch_html().unwrap();
        assert_eq!(html, "<html></html>");
    }

    #[test]
    fn fetch_fails_on_server_error() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        let err = scraper_for(&url).fetch_html().unwrap_err();
        assert!(matches!(err, ScraperError::HttpStatus { status: 500, .. }));
    }

    fn page(script: &str) -> String {
        format!("<html><head><title>cars</title>{script}</head><body><ol></ol></body></html>")
    }

    #[test]
    fn extracts_items_in_page_order() {
        let html = page(
            r#"<script type="application/ld+json" id="ld_searchpage_results">
            {"@type":"ItemList","itemListElement":[
              {"@type":"ListItem","position":"0","item":{"name":"2012 Ford F-150",
                "offers":{"price":"9500.00","availableAtOrFrom":{
                  "address":{"addressLocality":"Durham"},
                  "geo":{"latitude":35.99,"longitude":-78.9}}}}},
              {"@type":"ListItem","position":"1","item":{"name":"Honda Fit"}}
            ]}
            </script>"#,
        );

        let listings = ListingScraper::extract_listings(&html)
            .unwrap()
            .expect("block should be found");

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name.as_deref(), Some("2012 Ford F-150"));
        assert_eq!(listings[0].locality(), Some("Durham"));
        assert_eq!(listings[0].latitude().and_then(|v| v.as_f64()), Some(35.99));
        assert_eq!(listings[1].name.as_deref(), Some("Honda Fit"));
        assert!(listings[1].price().is_none());
    }

    #[test]
    fn missing_block_is_not_an_error() {
        let html = page(r#"<script type="application/ld+json" id="ld_breadcrumb_data">{}</script>"#);
        assert!(ListingScraper::extract_listings(&html).unwrap().is_none());
    }

    #[test]
    fn block_needs_matching_type() {
        let html = page(r#"<script type="text/javascript" id="ld_searchpage_results">{}</script>"#);
        assert!(ListingScraper::extract_listings(&html).unwrap().is_none());
    }

    #[test]
    fn malformed_json_is_fatal() {
        let html = page(
            r#"<script type="application/ld+json" id="ld_searchpage_results">{"itemListElement": [</script>"#,
        );
        let err = ListingScraper::extract_listings(&html).unwrap_err();
        assert!(matches!(err, ScraperError::JsonParse(_)));
    }

    #[test]
    fn missing_item_list_yields_empty() {
        let html = page(r#"<script type="application/ld+json" id="ld_searchpage_results">{"@type":"ItemList"}</script>"#);
        let listings = ListingScraper::extract_listings(&html).unwrap().unwrap();
        assert!(listings.is_empty());
    }

    #[test]
    fn null_nested_objects_still_produce_a_listing() {
        let html = page(
            r#"<script type="application/ld+json" id="ld_searchpage_results">
            {"itemListElement":[{"item":{"name":"Jeep","offers":null}},{"item":null}]}
            </script>"#,
        );
        let listings = ListingScraper::extract_listings(&html).unwrap().unwrap();
        assert_eq!(listings.len(), 2);
        assert!(listings[0].locality().is_none());
        assert!(listings[1].name.is_none());
    }
}
