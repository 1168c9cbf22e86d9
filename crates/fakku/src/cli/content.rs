use crate::prelude::{println, *};
use colored::Colorize;
use fakku::{CommentPage, ContentItem, DownloadListing, ReadableContent};
use fakku_core::content::join_attributes;
use fakku_core::text::{format_timestamp, plain_text};
use serde::Serialize;

/// Identifies a content item on the command line
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ContentOptions {
    /// Content category (e.g., "manga" or "doujinshi")
    pub category: String,

    /// Content name as it appears in the catalog URL (e.g., "example-manga")
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CommentsOptions {
    #[clap(flatten)]
    pub content: ContentOptions,

    /// Comment page number (0 requests the default page)
    #[arg(short, long, default_value = "0", conflicts_with = "top")]
    pub page: u32,

    /// Show the top-ranked comments instead of a page
    #[arg(long)]
    pub top: bool,
}

pub async fn run_content(options: ContentOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let result = client
        .content_information(&options.category, &options.name)
        .await;

    if let Some(item) = or_report(result) {
        if options.json {
            println!("{}", format_json(&item)?);
        } else {
            println!("{}", format_content_text(&item));
        }
    }

    Ok(())
}

pub async fn run_comments(options: CommentsOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let content = &options.content;
    let result = if options.top {
        client
            .content_top_comments(&content.category, &content.name)
            .await
    } else {
        client
            .content_comments_page(&content.category, &content.name, options.page)
            .await
    };

    if let Some(page) = or_report(result) {
        if content.json {
            println!("{}", format_json(&page)?);
        } else {
            println!("{}", format_comments_text(&page));
        }
    }

    Ok(())
}

pub async fn run_read(options: ContentOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let result = client
        .content_read_online(&options.category, &options.name)
        .await;

    if let Some(readable) = or_report(result) {
        if options.json {
            println!("{}", format_json(&readable)?);
        } else {
            println!("{}", format_reader_text(&readable));
        }
    }

    Ok(())
}

pub async fn run_downloads(options: ContentOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;
    let result = client
        .content_downloads(&options.category, &options.name)
        .await;

    if let Some(listing) = or_report(result) {
        if options.json {
            println!("{}", format_json(&listing)?);
        } else {
            println!("{}", format_downloads_text(&listing));
        }
    }

    Ok(())
}

fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn timestamp_or_unknown(timestamp: u64) -> String {
    format_timestamp(timestamp).unwrap_or_else(|| "(unknown)".to_string())
}

fn header(title: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        "=".repeat(80).bright_cyan(),
        title.bright_cyan().bold(),
        "=".repeat(80).bright_cyan()
    )
}

/// Build formatted text output for a content item
fn format_content_text(item: &ContentItem) -> String {
    let mut result = header(&item.name);

    let fields = [
        ("URL", item.url.clone()),
        ("Category", item.category.clone()),
        ("Language", item.language.clone()),
        ("Published", timestamp_or_unknown(item.date)),
        ("Size", format!("{} MB", item.file_size)),
        ("Pages", item.pages.to_string()),
        ("Favorites", item.favorites.to_string()),
        ("Comments", item.comments.to_string()),
        ("Poster", item.poster.clone()),
        ("Artists", join_attributes(&item.artists)),
        ("Translators", join_attributes(&item.translators)),
        ("Series", join_attributes(&item.series)),
        ("Tags", join_attributes(&item.tags)),
        ("Cover", item.images.cover.clone()),
        ("Sample", item.images.sample.clone()),
    ];

    for (label, value) in fields {
        if !value.is_empty() {
            result.push_str(&format!("{}: {}\n", label.green(), value));
        }
    }

    let description = plain_text(&item.description);
    if !description.is_empty() {
        result.push_str(&format!("\n{}\n", description.bright_white()));
    }

    result
}

/// Build formatted text output for a comment page
fn format_comments_text(page: &CommentPage) -> String {
    let mut result = header(&format!(
        "COMMENTS (Page {} of {}, {} total)",
        page.page, page.pages, page.total
    ));

    if page.comments.is_empty() {
        result.push_str(&format!("\n{}\n", "No comments on this page.".yellow()));
        return result;
    }

    for comment in &page.comments {
        result.push_str(&format!(
            "\n{} {} {} ({}: {})\n",
            format!("[Comment #{}]", comment.id).yellow().bold(),
            "by".bright_black(),
            comment.poster.bright_white(),
            "Reputation".bright_black(),
            comment.reputation.to_string().bright_magenta()
        ));
        result.push_str(&format!(
            "{}: {}\n",
            "Time".green(),
            timestamp_or_unknown(comment.date).bright_black()
        ));
        result.push_str(&format!("{}\n", plain_text(&comment.text).white()));
    }

    result
}

/// Build formatted text output for the reader pages of a work
fn format_reader_text(readable: &ReadableContent) -> String {
    let mut result = header(&format!(
        "{} ({} pages)",
        readable.content.name,
        readable.pages.len()
    ));

    let mut table = new_table();
    table.add_row(prettytable::row!["Page", "Image", "Thumbnail"]);
    for page in &readable.pages {
        table.add_row(prettytable::row![page.id, page.image, page.thumb]);
    }

    result.push_str(&table.to_string());
    result
}

/// Build formatted text output for a download listing
fn format_downloads_text(listing: &DownloadListing) -> String {
    let mut result = header(&format!("DOWNLOADS ({} total)", listing.total));

    if listing.downloads.is_empty() {
        result.push_str(&format!("\n{}\n", "No downloads available.".yellow()));
        return result;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Type", "URL", "Info", "Downloads", "Updated", "Poster"]);
    for download in &listing.downloads {
        table.add_row(prettytable::row![
            download.kind,
            download.url,
            download.info,
            download.count,
            timestamp_or_unknown(download.time),
            download.poster
        ]);
    }

    result.push_str(&table.to_string());
    result
}
