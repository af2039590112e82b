//! Blocking HTTP GET via the curl crate (libcurl).

use std::time::Duration;

use url::Url;

use super::UpdateError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(60);

fn transport(url: &Url, source: curl::Error) -> UpdateError {
    UpdateError::Transport {
        url: url.to_string(),
        source,
    }
}

/// Fetch `url` with a single GET, following redirects, and return the body.
/// Any non-2xx status is an error; no partial body is ever returned.
pub fn fetch(url: &Url) -> Result<Vec<u8>, UpdateError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).map_err(|e| transport(url, e))?;
    easy.follow_location(true).map_err(|e| transport(url, e))?;
    easy.max_redirections(10).map_err(|e| transport(url, e))?;
    easy.connect_timeout(CONNECT_TIMEOUT)
        .map_err(|e| transport(url, e))?;
    easy.timeout(TOTAL_TIMEOUT).map_err(|e| transport(url, e))?;
    // The GitHub API rejects requests without a User-Agent.
    easy.useragent("csdb").map_err(|e| transport(url, e))?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(|e| transport(url, e))?;
        transfer.perform().map_err(|e| transport(url, e))?;
    }

    let code = easy.response_code().map_err(|e| transport(url, e))?;
    if !(200..300).contains(&code) {
        return Err(UpdateError::Http {
            url: url.to_string(),
            code,
        });
    }
    Ok(body)
}
