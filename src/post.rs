use fmt::Display;
use std::fmt::Formatter;
use std::{fmt, fs, io};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::front_matter::parse_front_matter;
use crate::text_utils::{format_short_date, parse_pub_date};

#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub url: String,
}

/// What scanning one content file produced. Incomplete or broken headers
/// are skipped by the collector with a warning each - one bad post must not
/// abort the whole run.
pub enum PostScan {
    Accepted(Post),
    MissingField(&'static str),
    MalformedDate(String),
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, format_short_date(&self.date))
    }
}

/// Example of post
/// ---
/// title: 'What I learned after 20+ years of software development'
/// pubDate: 2022-04-02
/// ---
///
/// # What I learned after 20+ years of software development
impl Post {
    pub fn from_file(file_path: &PathBuf, base_url: &str) -> io::Result<PostScan> {
        let content = fs::read_to_string(file_path)?;
        let slug = file_path.file_stem().unwrap().to_str().unwrap();

        Ok(Self::from_string(slug, &content, base_url))
    }

    pub fn from_string(slug: &str, content: &str, base_url: &str) -> PostScan {
        let fields = parse_front_matter(content);

        let title = fields.get("title").map(String::as_str).unwrap_or("");
        if title.is_empty() {
            return PostScan::MissingField("title");
        }

        let pub_date = fields.get("pubDate").map(String::as_str).unwrap_or("");
        if pub_date.is_empty() {
            return PostScan::MissingField("pubDate");
        }

        let date = match parse_pub_date(pub_date) {
            Ok(date) => date,
            Err(_) => return PostScan::MalformedDate(pub_date.to_string()),
        };

        PostScan::Accepted(Post {
            title: title.to_string(),
            slug: slug.to_string(),
            date,
            url: post_url(base_url, slug),
        })
    }
}

fn post_url(base_url: &str, slug: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), slug)
}

#[cfg(test)]
mod tests {
    use crate::test_data::POST_DATA;

    use super::*;

    const BASE_URL: &str = "https://atsentia.ai/blog/";

    #[test]
    fn test_from_string() {
        let scan = Post::from_string("hello-world", POST_DATA, BASE_URL);
        let post = match scan {
            PostScan::Accepted(post) => post,
            _ => panic!("expected an accepted post"),
        };

        assert_eq!(post.title, "What I learned after 20+ years of software development");
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2022, 4, 2).unwrap());
        assert_eq!(post.url, "https://atsentia.ai/blog/hello-world/");
    }

    #[test]
    fn test_missing_title_is_flagged() {
        let content = "---\npubDate: 2024-01-01\n---\nbody";
        assert!(matches!(
            Post::from_string("a-post", content, BASE_URL),
            PostScan::MissingField("title")
        ));

        // An empty value counts as missing
        let content = "---\ntitle: ''\npubDate: 2024-01-01\n---\nbody";
        assert!(matches!(
            Post::from_string("a-post", content, BASE_URL),
            PostScan::MissingField("title")
        ));
    }

    #[test]
    fn test_missing_pub_date_is_flagged() {
        let content = "---\ntitle: A Post\n---\nbody";
        assert!(matches!(
            Post::from_string("a-post", content, BASE_URL),
            PostScan::MissingField("pubDate")
        ));
    }

    #[test]
    fn test_malformed_date_is_flagged() {
        let content = "---\ntitle: A Post\npubDate: April 2nd\n---\nbody";
        match Post::from_string("a-post", content, BASE_URL) {
            PostScan::MalformedDate(raw) => assert_eq!(raw, "April 2nd"),
            _ => panic!("expected a malformed date"),
        }
    }

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("https://atsentia.ai/blog/", "hello"), "https://atsentia.ai/blog/hello/");
        assert_eq!(post_url("https://atsentia.ai/blog", "hello"), "https://atsentia.ai/blog/hello/");
    }

    #[test]
    fn test_display() {
        let scan = Post::from_string("hello-world", POST_DATA, BASE_URL);
        let PostScan::Accepted(post) = scan else {
            panic!("expected an accepted post");
        };
        assert_eq!(
            post.to_string(),
            "What I learned after 20+ years of software development (Apr 2, 2022)"
        );
    }
}
