//! # Comments Client
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/recipes/{id}/comments?page&size` | List comments (params advisory) |
//! | POST   | `/recipes/{id}/comments` | Create comment |
//! | PUT    | `/comments/{id}` | Update comment |
//! | DELETE | `/comments/{id}?userId=` | Delete comment |
//! | POST   | `/comments/media` | Upload one media attachment |
//!
//! The backend may ignore `page`/`size` and return the full comment set;
//! callers must treat the listing response as complete. Create, update,
//! delete, and upload require a logged-in session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kitchenhub_core::{CommentId, RecipeId, Session, UserId};

use crate::error::HubApiError;

/// A media attachment on a comment. `kind` is a MIME-like string; values
/// starting with `video/` select the video playback widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl MediaAttachment {
    /// Whether this attachment should render in a video widget.
    pub fn is_video(&self) -> bool {
        self.kind.starts_with("video/")
    }
}

/// A user-authored comment on a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub content: String,
    /// Absent on legacy rows.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Denormalized display name; may already be present on the record.
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub media: Vec<MediaAttachment>,
}

/// Body for `POST /recipes/{id}/comments`. The `media` key is omitted
/// entirely when there are no attachments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentRequest {
    pub content: String,
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaAttachment>,
}

/// Body for `PUT /comments/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    pub content: String,
    pub user_id: UserId,
    pub media: Vec<MediaAttachment>,
}

/// A file to upload as a comment attachment.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Response from the media upload endpoint. The backend is lenient here:
/// either field may be missing, in which case the upload is unusable and
/// callers drop it.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUploadResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl MediaUploadResponse {
    /// Convert to an attachment, or `None` if either field is missing.
    pub fn into_attachment(self) -> Option<MediaAttachment> {
        match (self.url, self.kind) {
            (Some(url), Some(kind)) => Some(MediaAttachment {
                id: None,
                url,
                kind,
            }),
            _ => None,
        }
    }
}

/// Client for comment endpoints.
#[derive(Debug, Clone)]
pub struct CommentsClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl CommentsClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List a recipe's comments. `page`/`size` are advisory - the server
    /// may ignore them, so the response must be treated as the full set.
    ///
    /// Calls `GET {base}/recipes/{id}/comments?page={page}&size={size}`.
    pub async fn list(
        &self,
        session: &Session,
        recipe_id: RecipeId,
        page: usize,
        size: usize,
    ) -> Result<Vec<Comment>, HubApiError> {
        let endpoint = format!("GET /recipes/{recipe_id}/comments");
        let url = crate::join_url(&self.base_url, &format!("recipes/{recipe_id}/comments"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(
                self.http
                    .get(&url)
                    .query(&[("page", page), ("size", size)]),
                session,
            )
            .send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        resp.json().await.map_err(|e| HubApiError::Deserialization {
            endpoint,
            source: e,
        })
    }

    /// Create a comment on a recipe. Requires a logged-in session.
    ///
    /// Calls `POST {base}/recipes/{id}/comments`.
    pub async fn create(
        &self,
        session: &Session,
        recipe_id: RecipeId,
        req: &NewCommentRequest,
    ) -> Result<Comment, HubApiError> {
        crate::require_token(session, "create comment")?;

        let endpoint = format!("POST /recipes/{recipe_id}/comments");
        let url = crate::join_url(&self.base_url, &format!("recipes/{recipe_id}/comments"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(self.http.post(&url).json(req), session).send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        resp.json().await.map_err(|e| HubApiError::Deserialization {
            endpoint,
            source: e,
        })
    }

    /// Update a comment's content and media set. Requires a logged-in
    /// session.
    ///
    /// Calls `PUT {base}/comments/{id}`.
    pub async fn update(
        &self,
        session: &Session,
        comment_id: CommentId,
        req: &UpdateCommentRequest,
    ) -> Result<Comment, HubApiError> {
        crate::require_token(session, "update comment")?;

        let endpoint = format!("PUT /comments/{comment_id}");
        let url = crate::join_url(&self.base_url, &format!("comments/{comment_id}"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(self.http.put(&url).json(req), session).send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        resp.json().await.map_err(|e| HubApiError::Deserialization {
            endpoint,
            source: e,
        })
    }

    /// Delete a comment. Destructive - callers must have obtained explicit
    /// user confirmation before invoking this. Requires a logged-in
    /// session.
    ///
    /// Calls `DELETE {base}/comments/{id}?userId={requester}`.
    pub async fn delete(
        &self,
        session: &Session,
        comment_id: CommentId,
        requester: UserId,
    ) -> Result<(), HubApiError> {
        crate::require_token(session, "delete comment")?;

        let endpoint = format!("DELETE /comments/{comment_id}");
        let url = crate::join_url(&self.base_url, &format!("comments/{comment_id}"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(
                self.http
                    .delete(&url)
                    .query(&[("userId", requester.as_i64())]),
                session,
            )
            .send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        crate::expect_success(resp, &endpoint).await?;
        Ok(())
    }

    /// Upload one media file for attachment to a comment. Requires a
    /// logged-in session.
    ///
    /// Calls `POST {base}/comments/media` as multipart form data.
    pub async fn upload_media(
        &self,
        session: &Session,
        file: &MediaFile,
    ) -> Result<MediaUploadResponse, HubApiError> {
        crate::require_token(session, "upload comment media")?;

        let endpoint = "POST /comments/media".to_string();
        let url = crate::join_url(&self.base_url, "comments/media");

        // The form is consumed per attempt, so it is rebuilt inside the
        // retry closure.
        let resp = crate::retry::retry_send(|| async {
            let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)?;
            let form = reqwest::multipart::Form::new().part("file", part);
            crate::authorize(self.http.post(&url).multipart(form), session)
                .send()
                .await
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        resp.json().await.map_err(|e| HubApiError::Deserialization {
            endpoint,
            source: e,
        })
    }
}
