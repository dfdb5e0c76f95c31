use anyhow::{anyhow, Result};

use crate::config::Config;
use crate::list_renderer::render_post_list;
use crate::post_list::PostList;
use crate::readme::{update_readme, Markers, SyncMode};

/// One full run: collect the posts, render the list, patch the README.
/// Zero accepted posts is a hard failure - the README is left alone.
pub fn sync_posts(config: &Config, mode: SyncMode) -> Result<()> {
    println!("Reading blog posts from: {}", config.paths.content_dir.display());

    let post_list = PostList {
        content_dir: config.paths.content_dir.clone(),
        base_url: config.sync.base_url.clone(),
    };
    let posts = post_list.collect_posts()?;

    if posts.is_empty() {
        return Err(anyhow!("No blog posts found!"));
    }

    println!("Found {} blog posts:", posts.len());
    for post in &posts {
        println!("  - {}", post);
    }
    println!();

    let rendered = render_post_list(&posts);

    let markers = Markers {
        start: config.sync.start_marker.clone(),
        end: config.sync.end_marker.clone(),
    };
    update_readme(&config.paths.readme_path, &markers, &rendered, mode)?;

    if mode == SyncMode::Preview {
        println!();
        println!("Run with --write to apply changes");
    }

    Ok(())
}
