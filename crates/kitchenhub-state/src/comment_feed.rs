//! # Comment Feed
//!
//! Presents a recipe's comments in fixed-size pages despite an unreliable
//! server-side pagination contract: whatever the backend returns for a
//! page request is treated as the **complete** comment set and re-paged
//! client-side in windows of [`PAGE_SIZE`].
//!
//! Mutations (create/edit/delete) are server round-trips followed by a
//! re-fetch - local state is never merged optimistically beyond clearing
//! the draft. A create reloads page 0 (new comments surface at the top);
//! an edit or delete reloads the current page, since neither changes
//! ordering.

use kitchenhub_client::comments::{
    Comment, MediaAttachment, MediaFile, NewCommentRequest, UpdateCommentRequest,
};
use kitchenhub_client::{HubApiError, HubClient};
use kitchenhub_core::{CommentId, RecipeId, Session};

use crate::error::ScreenError;

/// Fixed page size for the comment window.
pub const PAGE_SIZE: usize = 5;

/// Maximum number of page buttons shown at once.
const WINDOW: usize = 5;

/// A comment being drafted. Kept by the caller so a failed submit never
/// loses the user's text.
#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
    pub content: String,
    pub files: Vec<MediaFile>,
}

impl CommentDraft {
    /// Whether the draft has no usable text.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Reset after a successful submit.
    pub fn clear(&mut self) {
        self.content.clear();
        self.files.clear();
    }
}

/// An in-progress edit of an existing comment. `retained_media` is the
/// original attachment set minus anything the user marked for deletion.
#[derive(Debug, Clone)]
pub struct CommentEdit {
    pub content: String,
    pub retained_media: Vec<MediaAttachment>,
    pub new_files: Vec<MediaFile>,
}

/// Paginated comment window for one recipe.
#[derive(Debug)]
pub struct CommentFeed {
    recipe_id: RecipeId,
    all_comments: Vec<Comment>,
    current_page: usize,
    loading: bool,
}

impl CommentFeed {
    /// An empty feed for the given recipe. Call [`load_page`] to populate.
    ///
    /// [`load_page`]: CommentFeed::load_page
    pub fn new(recipe_id: RecipeId) -> Self {
        Self {
            recipe_id,
            all_comments: Vec::new(),
            current_page: 0,
            loading: false,
        }
    }

    pub fn recipe_id(&self) -> RecipeId {
        self.recipe_id
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Zero-based index of the displayed page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of comments across all pages.
    pub fn total_comments(&self) -> usize {
        self.all_comments.len()
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        std::cmp::max(1, self.all_comments.len().div_ceil(PAGE_SIZE))
    }

    /// Whether pages exist beyond the current one.
    ///
    /// `total_pages` is at least one, so the subtraction cannot wrap; the
    /// page index itself is unconstrained (it arrives from user input)
    /// and must never feed a multiplication.
    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.total_pages() - 1
    }

    /// The slice of comments on the current page; at most [`PAGE_SIZE`].
    pub fn displayed(&self) -> &[Comment] {
        let start = std::cmp::min(
            self.current_page.saturating_mul(PAGE_SIZE),
            self.all_comments.len(),
        );
        let end = std::cmp::min(start + PAGE_SIZE, self.all_comments.len());
        &self.all_comments[start..end]
    }

    /// Visible page buttons: a sliding window of at most five page
    /// indices that always contains the current page. See
    /// [`page_numbers`].
    pub fn page_numbers(&self) -> Vec<usize> {
        page_numbers(self.total_pages(), self.current_page)
    }

    /// Load a page of comments and replace the window.
    ///
    /// The request carries `page`/`size`, but the response is treated as
    /// the full comment set regardless (the backend has been observed
    /// ignoring the params). On failure the prior window is left
    /// untouched and the error is returned for callers that want a
    /// surface; nothing is shown by default.
    ///
    /// Idempotent: repeating the same `page` against unchanged backing
    /// data yields the same displayed slice.
    pub async fn load_page(
        &mut self,
        client: &HubClient,
        session: &Session,
        page: usize,
    ) -> Result<(), ScreenError> {
        self.loading = true;
        let result = client
            .comments()
            .list(session, self.recipe_id, page, PAGE_SIZE)
            .await;
        self.loading = false;

        match result {
            Ok(comments) => {
                self.all_comments = comments;
                self.current_page = page;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    recipe_id = %self.recipe_id,
                    page,
                    "comment load failed, keeping previous window: {e}"
                );
                Err(e.into())
            }
        }
    }

    /// Advance one page, if one exists.
    pub async fn load_more(
        &mut self,
        client: &HubClient,
        session: &Session,
    ) -> Result<(), ScreenError> {
        if !self.has_more_pages() {
            return Ok(());
        }
        let next = self.current_page + 1;
        self.load_page(client, session, next).await
    }

    /// Submit a new comment from the draft.
    ///
    /// Whitespace-only drafts are rejected before any network call.
    /// Media files upload concurrently; failed or incomplete uploads are
    /// dropped without aborting the submit. On success the feed reloads
    /// page 0 and the draft is cleared; on failure the draft is left
    /// intact so the user's text is not lost.
    pub async fn submit_comment(
        &mut self,
        client: &HubClient,
        session: &Session,
        draft: &mut CommentDraft,
    ) -> Result<(), ScreenError> {
        if draft.is_blank() {
            return Err(ScreenError::EmptyComment);
        }
        let user_id = session
            .user_id()
            .ok_or(HubApiError::NotAuthenticated {
                operation: "create comment",
            })?;

        let media = upload_all(client, session, &draft.files).await;

        let req = NewCommentRequest {
            content: draft.content.trim().to_string(),
            user_id,
            media,
        };
        client
            .comments()
            .create(session, self.recipe_id, &req)
            .await?;

        // The comment exists server-side now; the draft is done even if
        // the reload below fails.
        draft.clear();
        self.load_page(client, session, 0).await
    }

    /// Save an edit to an existing comment.
    ///
    /// New files upload concurrently with the same drop-on-failure
    /// semantics as submit; the final media set is the retained existing
    /// attachments plus whatever uploaded. On success the **current**
    /// page reloads (edits do not change ordering); on failure the
    /// caller's edit state stays intact for retry.
    pub async fn save_edit(
        &mut self,
        client: &HubClient,
        session: &Session,
        comment_id: CommentId,
        edit: &CommentEdit,
    ) -> Result<(), ScreenError> {
        let user_id = session
            .user_id()
            .ok_or(HubApiError::NotAuthenticated {
                operation: "update comment",
            })?;

        let mut media = edit.retained_media.clone();
        media.extend(upload_all(client, session, &edit.new_files).await);

        let req = UpdateCommentRequest {
            content: edit.content.clone(),
            user_id,
            media,
        };
        client.comments().update(session, comment_id, &req).await?;

        let page = self.current_page;
        self.load_page(client, session, page).await
    }

    /// Delete a comment and reload the current page.
    ///
    /// Destructive: callers must have obtained explicit user confirmation
    /// before invoking this.
    pub async fn delete_comment(
        &mut self,
        client: &HubClient,
        session: &Session,
        comment_id: CommentId,
    ) -> Result<(), ScreenError> {
        let user_id = session
            .user_id()
            .ok_or(HubApiError::NotAuthenticated {
                operation: "delete comment",
            })?;

        client
            .comments()
            .delete(session, comment_id, user_id)
            .await?;

        let page = self.current_page;
        self.load_page(client, session, page).await
    }
}

/// Upload files concurrently (fan-out/fan-in). The action settles every
/// branch: successes are kept, failures and incomplete responses are
/// dropped with a warning. One bad upload never aborts the batch.
pub(crate) async fn upload_all(
    client: &HubClient,
    session: &Session,
    files: &[MediaFile],
) -> Vec<MediaAttachment> {
    let mut tasks = tokio::task::JoinSet::new();
    for file in files.iter().cloned() {
        let client = client.clone();
        let session = session.clone();
        tasks.spawn(async move { client.comments().upload_media(&session, &file).await });
    }

    let mut media = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(resp)) => match resp.into_attachment() {
                Some(attachment) => media.push(attachment),
                None => {
                    tracing::warn!("media upload response missing url or type, dropping")
                }
            },
            Ok(Err(e)) => tracing::warn!("media upload failed, dropping attachment: {e}"),
            Err(e) => tracing::warn!("media upload task aborted: {e}"),
        }
    }
    media
}

/// Compute the visible page buttons for a pager.
///
/// At most five indices, always including `current_page`:
/// - five or fewer pages: all of them;
/// - near the left edge (`current < 3`): the first five;
/// - near the right edge (`current > total - 4`): the last five;
/// - otherwise: one page behind the current through three ahead.
///
/// The window slides without jumping at the boundaries.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<usize> {
    if total_pages <= WINDOW {
        (0..total_pages).collect()
    } else if current_page < 3 {
        (0..WINDOW).collect()
    } else if current_page > total_pages - 4 {
        (total_pages - WINDOW..total_pages).collect()
    } else {
        (current_page - 1..=current_page + 3).collect()
    }
}
