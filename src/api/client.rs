use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build a default client.
///
/// The timeout keeps a hung upstream from hanging the whole run.
pub fn try_new() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()?)
}
