use std::{fs, io};
use std::path::PathBuf;

use spdlog::{error, warn};

use crate::post::{Post, PostScan};

pub struct PostList {
    pub content_dir: PathBuf,
    pub base_url: String,
}

impl PostList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = vec![];
        let entries = fs::read_dir(self.content_dir.as_path())?;
        for entry in entries {
            if let Ok(entry) = entry {
                if let Ok(file_type) = entry.file_type() {
                    if !file_type.is_file() {
                        continue;
                    }
                    let file_name = entry.file_name();
                    if let Some(file_name) = file_name.to_str() {
                        // Check if the file has a .md extension
                        if file_name.ends_with(".md") {
                            files.push(entry.path());
                        }
                    }
                }
            }
        }
        Ok(files)
    }

    /// Reads every post in the content directory. Posts with an incomplete
    /// or broken header are skipped with a warning; the rest come back
    /// sorted by date, newest first. A missing directory yields no posts.
    pub fn collect_posts(&self) -> io::Result<Vec<Post>> {
        if !self.content_dir.exists() {
            error!("Blog directory not found: {}", self.content_dir.display());
            return Ok(vec![]);
        }

        let mut posts = vec![];
        for file in self.retrieve_files()? {
            let name = file.file_name().unwrap().to_str().unwrap();
            match Post::from_file(&file, &self.base_url)? {
                PostScan::Accepted(post) => posts.push(post),
                PostScan::MissingField(field) => warn!("Skipping {}: missing {}", name, field),
                PostScan::MalformedDate(raw) => warn!("Skipping {}: invalid pubDate '{}'", name, raw),
            }
        }

        // Most recent first
        posts.sort_by(|a, b| {
            b.date.cmp(&a.date)
        });

        Ok(posts)
    }
}
