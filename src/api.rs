use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use url::Url;

use crate::profile::{CharacterProfile, parse_profile};
use crate::roster::Character;

const PROFILE_PATH: &str = "api/v1/characters/profile";
const PROFILE_FIELDS: &str =
    "mythic_plus_best_runs:all:1,mythic_plus_scores_by_season:current,gear";

pub struct ApiHandle {
    client: Client,
    base_url: Url,
    rt: tokio::runtime::Runtime,
}

impl ApiHandle {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mplus-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create http client")?;
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        Ok(Self {
            client,
            base_url,
            rt,
        })
    }

    pub fn profile_url(&self, character: &Character) -> Result<Url> {
        profile_url(&self.base_url, character)
    }

    pub fn fetch_profile(&self, character: &Character) -> Result<CharacterProfile> {
        let url = self.profile_url(character)?;
        tracing::info!(character = %character.label(), "fetching Raider.IO profile");
        let body = self.rt.block_on(async {
            let res = self
                .client
                .get(url.clone())
                .send()
                .await
                .with_context(|| format!("GET {url}"))?;
            let status = res.status();
            if !status.is_success() {
                return Err(anyhow!("Raider.IO returned {status}"));
            }
            res.text().await.context("read Raider.IO response body")
        })?;
        parse_profile(&body).context("decode Raider.IO profile")
    }
}

fn parse_base(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).with_context(|| format!("invalid API base url {base_url}"))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("invalid API base url {base_url}"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn profile_url(base: &Url, character: &Character) -> Result<Url> {
    let mut url = base
        .join(PROFILE_PATH)
        .context("build Raider.IO profile url")?;
    url.query_pairs_mut()
        .append_pair("region", &character.region)
        .append_pair("realm", &character.realm)
        .append_pair("name", &character.name)
        .append_pair("fields", PROFILE_FIELDS);
    Ok(url)
}
