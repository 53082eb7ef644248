//! Blocking libcurl transfers shared by the data client and contact delivery.
//!
//! Each call builds its own `Easy` handle; nothing is pooled or cached.
//! Runs in the current thread; call from `spawn_blocking` if used from async code.

use curl::easy::{Easy, Form, List};

/// Status and raw body of a completed transfer.
#[derive(Debug)]
pub(crate) struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Headers asking every cache on the path to revalidate.
const NO_CACHE_HEADERS: [&str; 2] = ["Cache-Control: no-cache, no-store", "Pragma: no-cache"];

fn new_handle(url: &str, headers: &[&str]) -> Result<Easy, curl::Error> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if !headers.is_empty() {
        let mut list = List::new();
        for h in headers {
            list.append(h)?;
        }
        easy.http_headers(list)?;
    }
    Ok(easy)
}

fn perform(mut easy: Easy) -> Result<Response, curl::Error> {
    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    let status = easy.response_code()?;
    Ok(Response { status, body })
}

/// GET `url` accepting JSON, with caching disabled.
pub(crate) fn get_json(url: &str) -> Result<Response, curl::Error> {
    let mut headers = vec!["Accept: application/json"];
    headers.extend_from_slice(&NO_CACHE_HEADERS);
    let easy = new_handle(url, &headers)?;
    perform(easy)
}

/// POST `body` as `application/json`.
pub(crate) fn post_json(url: &str, body: &[u8]) -> Result<Response, curl::Error> {
    let mut easy = new_handle(url, &["Content-Type: application/json", "Accept: application/json"])?;
    easy.post(true)?;
    easy.post_fields_copy(body)?;
    perform(easy)
}

/// POST a `multipart/form-data` body.
pub(crate) fn post_form(url: &str, form: Form) -> Result<Response, curl::Error> {
    let mut easy = new_handle(url, &["Accept: application/json"])?;
    easy.httppost(form)?;
    perform(easy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let ok = |status| Response { status, body: Vec::new() }.is_success();
        assert!(ok(200));
        assert!(ok(204));
        assert!(!ok(199));
        assert!(!ok(301));
        assert!(!ok(404));
        assert!(!ok(500));
    }

    #[test]
    fn invalid_url_is_transport_error() {
        assert!(get_json("not a url at all").is_err());
    }
}
