use std::{path::Path, time::Duration};

use anyhow::Context;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    foundation::error::BinderyResult,
};

/// One-shot GET timeout for cover downloads.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load every cover source in order, strictly sequentially.
///
/// A source is fetched over HTTP when it starts with `http://` or `https://`
/// and read from disk otherwise. Any failure (transport, non-success status,
/// decode) is logged and yields `None` in that slot so the collage planner can
/// substitute a placeholder; order is always preserved.
#[tracing::instrument(skip(sources), fields(count = sources.len()))]
pub fn fetch_covers<S: AsRef<str>>(sources: &[S]) -> Vec<Option<PreparedImage>> {
    let mut loaded = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.as_ref();
        match load_cover(source) {
            Ok(img) => loaded.push(Some(img)),
            Err(e) => {
                tracing::warn!(source, error = %e, "failed to load cover");
                loaded.push(None);
            }
        }
    }
    loaded
}

/// Load a single cover source: `http(s)://` URLs over HTTP, anything else from disk.
pub fn load_cover(source: &str) -> BinderyResult<PreparedImage> {
    let bytes = if is_remote(source) {
        fetch_bytes(source)?
    } else {
        std::fs::read(Path::new(source))
            .with_context(|| format!("read cover bytes from '{source}'"))?
    };
    decode_image(&bytes)
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_bytes(url: &str) -> BinderyResult<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("build http client")?;
    let resp = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("GET '{url}'"))?;
    let body = resp
        .bytes()
        .with_context(|| format!("read body of '{url}'"))?;
    Ok(body.to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fetch.rs"]
mod tests;
