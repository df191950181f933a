pub mod error;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::model::comment::{CommentListEnvelope, CommentRegisterResponse};
use crate::model::music::{MusicCategory, MusicCategoryEnvelope, MusicListEnvelope, MusicQuery};
use crate::model::paging::PageQuery;

pub use error::ApiError;

/// CSRF header name and token, read once from page metadata and attached to
/// every state-changing request.
#[derive(Debug, Clone)]
pub struct CsrfPair {
    pub header: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

/// Payload of `POST /comment/register`, sent as a multipart form.
#[derive(Debug, Clone, Default)]
pub struct CommentSubmission {
    pub post_id: u64,
    pub blog_id: u64,
    pub contents: String,
    pub is_anonymous: bool,
    pub nickname: String,
    pub password: String,
    pub is_secret: bool,
    pub thumbnail_image: Option<String>,
}

impl CommentSubmission {
    fn into_form(self) -> Form {
        let mut form = Form::new()
            .text("commentPostId", self.post_id.to_string())
            .text("commentBlogId", self.blog_id.to_string())
            .text("commentContents", self.contents);

        if self.is_anonymous {
            form = form
                .text("commentIsAnonymous", "on")
                .text("commentUserNickname", self.nickname)
                .text("commentUserPassword", self.password);
        }
        if self.is_secret {
            form = form.text("secretComment", "on");
        }
        if let Some(image) = self.thumbnail_image {
            form = form.text("commentThumbnailImage", image);
        }
        form
    }
}

pub struct ApiService {
    client: reqwest::Client,
    base_url: String,
    csrf: Option<CsrfPair>,
}

impl ApiService {
    pub async fn new() -> color_eyre::Result<Self> {
        let base_url = std::env::var("BLOG_BASE_URL")
            .map_err(|_| color_eyre::eyre::eyre!("BLOG_BASE_URL environment variable must be set"))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().build()?;

        let csrf = Self::fetch_csrf_pair(&client, &base_url).await;
        if csrf.is_none() {
            warn!("no CSRF metadata found; state-changing requests go out without the header");
        }

        Ok(Self {
            client,
            base_url,
            csrf,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn comment_list_url(post_id: u64, blog_id: u64) -> String {
        format!("/comment/{post_id}/{blog_id}")
    }

    pub async fn fetch_comments(
        &self,
        url: &str,
        query: &PageQuery,
    ) -> Result<CommentListEnvelope, ApiError> {
        self.get_json(url, &query.as_params()).await
    }

    pub async fn register_comment(
        &self,
        submission: CommentSubmission,
    ) -> Result<CommentRegisterResponse, ApiError> {
        self.post_multipart_json("/comment/register", submission.into_form())
            .await
    }

    /// Uploads an attached image ahead of the comment itself; the reply body
    /// is the bare image URL, or a bare message on failure.
    pub async fn upload_comment_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("post_comment_image_file_input", part);
        self.post_multipart_text("/comment/upload/comment-thumbnail-image", form)
            .await
    }

    pub async fn fetch_music_categories(&self) -> Result<Vec<MusicCategory>, ApiError> {
        let envelope: MusicCategoryEnvelope = self.get_json("/music-category/list", &[]).await?;
        Ok(envelope.music_pagination_response)
    }

    pub async fn fetch_music_list(
        &self,
        url: &str,
        query: &MusicQuery,
    ) -> Result<MusicListEnvelope, ApiError> {
        self.get_json(url, &query.as_params()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let message = response
                .json::<ServerMessage>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(ApiError::status(status.as_u16(), message));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn post_multipart_json<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form);
        if let Some(csrf) = &self.csrf {
            request = request.header(csrf.header.as_str(), csrf.token.as_str());
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let message = response
                .json::<ServerMessage>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(ApiError::status(status.as_u16(), message));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn post_multipart_text(&self, path: &str, form: Form) -> Result<String, ApiError> {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form);
        if let Some(csrf) = &self.csrf {
            request = request.header(csrf.header.as_str(), csrf.token.as_str());
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;
        if status.is_client_error() || status.is_server_error() {
            return Err(ApiError::status(status.as_u16(), body));
        }
        Ok(body)
    }

    async fn fetch_csrf_pair(client: &reqwest::Client, base_url: &str) -> Option<CsrfPair> {
        let page = client
            .get(format!("{base_url}/"))
            .send()
            .await
            .ok()?
            .text()
            .await
            .ok()?;

        let pair = extract_csrf_pair(&page);
        if let Some(pair) = &pair {
            info!(header = %pair.header, "CSRF metadata loaded");
        }
        pair
    }
}

/// Pulls the `_csrf` / `_csrf_header` meta contents out of a page, whatever
/// the attribute order inside the tags.
pub fn extract_csrf_pair(html: &str) -> Option<CsrfPair> {
    let token = meta_content(html, "_csrf")?;
    let header = meta_content(html, "_csrf_header")?;
    Some(CsrfPair { header, token })
}

fn meta_content(html: &str, name: &str) -> Option<String> {
    let name_attr = format!("name=\"{name}\"");
    let mut rest = html;
    while let Some(start) = rest.find("<meta") {
        let tag_rest = &rest[start..];
        let end = tag_rest.find('>')?;
        let tag = &tag_rest[..end];
        if tag.contains(&name_attr) {
            return attr_value(tag, "content");
        }
        rest = &tag_rest[end..];
    }
    None
}

fn attr_value(tag: &str, attr: &str) -> Option<String> {
    let marker = format!("{attr}=\"");
    let start = tag.find(&marker)? + marker.len();
    let value = &tag[start..];
    let end = value.find('"')?;
    Some(value[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csrf_pair_is_read_from_page_metadata() {
        let html = r#"<html><head>
            <meta charset="utf-8">
            <meta name="_csrf" content="token-123">
            <meta content="X-CSRF-TOKEN" name="_csrf_header">
        </head></html>"#;

        let pair = extract_csrf_pair(html).unwrap();
        assert_eq!(pair.token, "token-123");
        assert_eq!(pair.header, "X-CSRF-TOKEN");
    }

    #[test]
    fn page_without_metadata_yields_none() {
        assert!(extract_csrf_pair("<html><head></head></html>").is_none());
        assert!(extract_csrf_pair(r#"<meta name="_csrf" content="only-token">"#).is_none());
    }

    #[test]
    fn comment_list_url_carries_post_then_blog() {
        assert_eq!(ApiService::comment_list_url(7, 3), "/comment/7/3");
    }
}
