use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use shared::protocol::{RecommendRequest, RecommendResponse};
use url::Url;

pub mod lifecycle;
pub mod presenter;
pub mod report;
pub mod transport;

pub use lifecycle::{LifecycleSnapshot, Phase, RequestLifecycle};
pub use presenter::{ProductCard, ResultPresenter, ResultView, DEFAULT_DISPLAY_CAP};
pub use transport::{HttpTransport, JsonTransport, TransportReply};

pub type RecommendLifecycle = RequestLifecycle<RecommendRequest, RecommendResponse>;

const RECOMMEND_PATH: &str = "recommend";

/// `<base>/recommend`, tolerating a base with or without a trailing slash.
pub fn recommend_endpoint(base_url: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = Url::parse(&base).with_context(|| format!("invalid service url '{base_url}'"))?;
    base.join(RECOMMEND_PATH)
        .with_context(|| format!("failed to build recommend endpoint from '{base_url}'"))
}

pub fn http_lifecycle(base_url: &str, timeout: Duration) -> Result<RecommendLifecycle> {
    let endpoint = recommend_endpoint(base_url)?;
    let transport = HttpTransport::new(timeout)?;
    Ok(RequestLifecycle::new(endpoint, Arc::new(transport)))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
