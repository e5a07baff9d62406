use crate::storage::save_image;
use crate::{Error, Result};
use chrono::NaiveDate;
use log::info;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const ARCHIVE_HOST: &str = "https://www.bing.com";
const ID_PREFIX: &str = "/th?id=";
const UHD_SUFFIX: &str = "_UHD.jpg";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Envelope of `/HPImageArchive.aspx?format=xml&n=1`. The feed carries more
/// children per `<image>` than listed here; unknown elements are ignored.
#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    image: ArchiveImage,
}

#[derive(Debug, Deserialize)]
struct ArchiveImage {
    #[serde(rename = "urlBase")]
    url_base: String,
    startdate: String,
    copyright: String,
}

/// One day's featured image, as described by the archive feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Filename stem, `url_base` without its `/th?id=` prefix.
    pub id: String,
    pub start_date: NaiveDate,
    pub url_base: String,
    pub title: String,
}

impl ImageInfo {
    fn from_archive(raw: ArchiveImage) -> Result<Self> {
        let id = raw
            .url_base
            .strip_prefix(ID_PREFIX)
            .unwrap_or(&raw.url_base)
            .to_string();

        // The id becomes a filename; refuse anything that could escape the
        // download folder.
        if id.is_empty() || id.contains(['/', '\\']) {
            return Err(Error::MalformedResponse(format!(
                "unusable image id {:?}",
                id
            )));
        }

        if raw.startdate.len() != 8 || !raw.startdate.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::MalformedResponse(format!(
                "startdate {:?} is not an 8-digit date",
                raw.startdate
            )));
        }
        let start_date = NaiveDate::parse_from_str(&raw.startdate, "%Y%m%d").map_err(|_| {
            Error::MalformedResponse(format!("startdate {:?} is not a calendar date", raw.startdate))
        })?;

        Ok(Self {
            id,
            start_date,
            url_base: raw.url_base,
            title: raw.copyright,
        })
    }
}

pub struct BingClient {
    client: Client,
    base_url: String,
}

impl BingClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(ARCHIVE_HOST)
    }

    /// Client against a non-default host, used by the integration tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.into(),
        })
    }

    /// Fetches the descriptor of the image featured `days_before` days ago
    /// (0 = today).
    pub async fn get_image_info(&self, days_before: u32) -> Result<ImageInfo> {
        let url = format!(
            "{}/HPImageArchive.aspx?format=xml&idx={}&n=1",
            self.base_url, days_before
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: ArchiveResponse = quick_xml::de::from_str(&body)
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        ImageInfo::from_archive(parsed.image)
    }

    /// Fetches the raw image bytes at UHD resolution. The body is taken as-is;
    /// nothing checks that it decodes as a JPEG.
    pub async fn get_image_content(&self, info: &ImageInfo) -> Result<Vec<u8>> {
        let response = self.client.get(self.content_url(info)).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Full pipeline for one run: descriptor fetch, content fetch, write.
    /// Returns the path of the written file.
    pub async fn download_image(&self, folder: &Path, days_before: u32) -> Result<PathBuf> {
        let info = self.get_image_info(days_before).await?;
        info!("Downloading image: {}", info.title);

        let bytes = self.get_image_content(&info).await?;
        let path = save_image(folder, &info, &bytes)?;
        info!("Saved to {}", path.display());

        Ok(path)
    }

    fn content_url(&self, info: &ImageInfo) -> String {
        format!("{}{}{}", self.base_url, info.url_base, UHD_SUFFIX)
    }
}
