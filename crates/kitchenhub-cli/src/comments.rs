//! # Comments Subcommand
//!
//! - `list` - one page of a recipe's comments, with resolved author names.
//! - `post` - submit a comment, optionally with media attachments.
//! - `delete` - delete a comment after an explicit y/N confirmation
//!   (the destructive-action gate lives here, not in the state layer).

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use kitchenhub_client::comments::MediaFile;
use kitchenhub_core::{CommentId, RecipeId};
use kitchenhub_state::{AuthorDirectory, CommentDraft, CommentFeed};

use crate::CliContext;

/// Arguments for the `khub comments` subcommand.
#[derive(Args, Debug)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub command: CommentsCommand,
}

#[derive(Subcommand, Debug)]
pub enum CommentsCommand {
    /// List one page of a recipe's comments.
    List {
        /// Recipe identifier.
        recipe_id: i64,
        /// Zero-based page to display.
        #[arg(long, default_value_t = 0)]
        page: usize,
    },

    /// Post a comment on a recipe.
    Post {
        /// Recipe identifier.
        recipe_id: i64,
        /// Comment text.
        content: String,
        /// Media files to attach; failed uploads are dropped.
        #[arg(long)]
        media: Vec<PathBuf>,
    },

    /// Delete a comment (asks for confirmation).
    Delete {
        /// Recipe identifier (for the post-delete reload).
        recipe_id: i64,
        /// Comment identifier.
        comment_id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_comments(args: &CommentsArgs, ctx: &CliContext) -> Result<u8> {
    match &args.command {
        CommentsCommand::List { recipe_id, page } => {
            let mut feed = CommentFeed::new(RecipeId::new(*recipe_id));
            feed.load_page(&ctx.client, &ctx.session, *page).await?;

            let directory = AuthorDirectory::new();
            directory
                .sync(&ctx.client, &ctx.session, feed.displayed())
                .await;

            println!(
                "page {}/{} ({} comments)",
                feed.current_page() + 1,
                feed.total_pages(),
                feed.total_comments()
            );
            for comment in feed.displayed() {
                println!("[{}] {}: {}", comment.id, directory.label(comment), comment.content);
                for media in &comment.media {
                    let widget = if media.is_video() { "video" } else { "image" };
                    println!("        {widget}: {}", media.url);
                }
            }
            let pages: Vec<String> = feed
                .page_numbers()
                .iter()
                .map(|p| {
                    if *p == feed.current_page() {
                        format!("[{}]", p + 1)
                    } else {
                        format!("{}", p + 1)
                    }
                })
                .collect();
            println!("pages: {}", pages.join(" "));
            Ok(0)
        }
        CommentsCommand::Post {
            recipe_id,
            content,
            media,
        } => {
            let files = media
                .iter()
                .map(|path| read_media_file(path))
                .collect::<Result<Vec<_>>>()?;

            let mut feed = CommentFeed::new(RecipeId::new(*recipe_id));
            let mut draft = CommentDraft {
                content: content.clone(),
                files,
            };
            feed.submit_comment(&ctx.client, &ctx.session, &mut draft)
                .await?;
            println!("comment posted");
            Ok(0)
        }
        CommentsCommand::Delete {
            recipe_id,
            comment_id,
            yes,
        } => {
            if !yes && !confirm(&format!("delete comment {comment_id}?"))? {
                println!("aborted");
                return Ok(1);
            }
            let mut feed = CommentFeed::new(RecipeId::new(*recipe_id));
            feed.delete_comment(&ctx.client, &ctx.session, CommentId::new(*comment_id))
                .await?;
            println!("comment {comment_id} deleted");
            Ok(0)
        }
    }
}

/// y/N prompt on stdin; anything but an explicit yes declines.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush().context("flushing prompt")?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("reading confirmation")?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn read_media_file(path: &Path) -> Result<MediaFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading media file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mime = guess_mime(path).to_string();
    Ok(MediaFile {
        file_name,
        bytes,
        mime,
    })
}

/// Best-effort MIME guess from the file extension; the backend only
/// distinguishes video from everything else.
fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}
