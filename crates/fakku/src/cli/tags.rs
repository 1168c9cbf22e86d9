use crate::prelude::{println, *};
use fakku::Tag;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TagsOptions {
    /// Print descriptions of the tags
    #[arg(short, long)]
    pub verbose: bool,
}

pub async fn run(options: TagsOptions, global: crate::Global) -> Result<()> {
    let client = global.client()?;

    let Some(tags) = or_report(client.tags().await) else {
        return Ok(());
    };

    for tag in &tags {
        match format_tag_line(tag, options.verbose) {
            Ok(line) => println!("{}", line),
            Err(err) => {
                // Listing stops at the first tag whose link cannot be resolved
                println!("{}", err);
                return Ok(());
            }
        }
    }

    Ok(())
}

/// Build one output line: the name, or `name - description - url` when verbose
fn format_tag_line(tag: &Tag, verbose: bool) -> std::result::Result<String, url::ParseError> {
    if verbose {
        let url = tag.url()?;
        Ok(format!("{} - {} - {}", tag.name, tag.description, url))
    } else {
        Ok(tag.name.clone())
    }
}
