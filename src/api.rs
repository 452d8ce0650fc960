use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use thiserror::Error;

/// One breadcrumb segment from the root to the current folder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocationFragment {
    pub name: String,
    pub path: String,
}

/// A child folder with a representative thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub time: i64,
    pub url: String,
}

/// A leaf image. `name` is unique within one listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub time: i64,
}

/// Full server response for one path
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlbumView {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub location: Vec<LocationFragment>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub folders: Vec<FolderEntry>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub images: Vec<ImageEntry>,
}

impl AlbumView {
    /// Placeholder shown while the first fetch for a path is in flight
    pub fn loading() -> Self {
        Self {
            name: "Loading...".to_string(),
            location: Vec::new(),
            folders: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Index of the image called `name`, if present
    pub fn image_index(&self, name: &str) -> Option<usize> {
        self.images.iter().position(|image| image.name == name)
    }
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Pixel dimensions used in the `img/<w>x<h>` URL convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scale both sides by `factor`, rounding to the nearest pixel (never below 1)
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |side: u32| ((side as f64 * factor).round() as u32).max(1);
        Self {
            width: scale(self.width),
            height: scale(self.height),
        }
    }
}

/// Build the resized image path for a relative image URL: `img/<w>x<h><url>`
pub fn image_path(relative_url: &str, dims: Dimensions) -> String {
    format!("img/{}x{}{}", dims.width, dims.height, relative_url)
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("could not decode album for path {path:?}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request { source, .. } => source.status().map(|s| s.as_u16()),
            FetchError::Decode { .. } => None,
        }
    }
}

#[derive(Clone)]
pub struct GalleryClient {
    base_url: String,
    client: Client,
}

impl GalleryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Metadata endpoint for a logical path
    pub fn album_url(&self, path: &str) -> String {
        format!("{}/a/?path={}", self.base_url, urlencoding::encode(path))
    }

    /// Absolute URL of a resized image
    pub fn image_url(&self, relative_url: &str, dims: Dimensions) -> String {
        format!("{}/{}", self.base_url, image_path(relative_url, dims))
    }

    pub async fn fetch_album(&self, path: &str) -> Result<AlbumView, FetchError> {
        let url = self.album_url(path);
        let text = self.get_text(&url).await?;

        serde_json::from_str(&text).map_err(|source| FetchError::Decode {
            path: path.to_string(),
            source,
        })
    }

    pub async fn fetch_image(
        &self,
        relative_url: &str,
        dims: Dimensions,
    ) -> Result<Vec<u8>, FetchError> {
        let url = self.image_url(relative_url, dims);
        let response = self.send(&url).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request { url, source })?;

        Ok(bytes.to_vec())
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.send(url).await?;
        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_deserializes_null_lists() {
        let json = r#"{"name":"Empty","location":null,"folders":null,"images":null}"#;
        let album: AlbumView = serde_json::from_str(json).unwrap();
        assert_eq!(album.name, "Empty");
        assert!(album.location.is_empty());
        assert!(album.folders.is_empty());
        assert!(album.images.is_empty());
    }

    #[test]
    fn test_album_deserializes_full_response() {
        let json = r#"{
            "name": "trip",
            "location": [{"name": "2020", "path": "2020/"}, {"name": "trip", "path": "2020/trip/"}],
            "folders": [{"name": "day1", "path": "2020/trip/day1/", "time": 1577836800, "url": "/2020/trip/day1/a.jpg"}],
            "images": [{"name": "a.jpg", "url": "/2020/trip/a.jpg", "time": 1577836800}]
        }"#;
        let album: AlbumView = serde_json::from_str(json).unwrap();
        assert_eq!(album.location.len(), 2);
        assert_eq!(album.folders[0].path, "2020/trip/day1/");
        assert_eq!(album.image_index("a.jpg"), Some(0));
        assert_eq!(album.image_index("b.jpg"), None);
    }

    #[test]
    fn test_image_path_convention() {
        let dims = Dimensions::new(1920, 1080);
        assert_eq!(image_path("/2020/a.jpg", dims), "img/1920x1080/2020/a.jpg");
    }

    #[test]
    fn test_thumbnail_dimensions_round() {
        let dims = Dimensions::new(1920, 1080).scaled(0.15);
        assert_eq!(dims, Dimensions::new(288, 162));

        let odd = Dimensions::new(1366, 768).scaled(0.15);
        // 204.9 -> 205, 115.2 -> 115
        assert_eq!(odd, Dimensions::new(205, 115));
    }

    #[test]
    fn test_album_url_encodes_path() {
        let client = GalleryClient::new("http://host/gallery/".to_string());
        assert_eq!(client.base_url(), "http://host/gallery");
        assert_eq!(
            client.album_url("2020/my trip/"),
            "http://host/gallery/a/?path=2020%2Fmy%20trip%2F"
        );
        assert_eq!(
            client.image_url("/2020/a.jpg", Dimensions::new(10, 20)),
            "http://host/gallery/img/10x20/2020/a.jpg"
        );
    }
}
