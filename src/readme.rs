use std::{fs, io};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Sentinel comments framing the auto-managed region of the README.
/// Whatever sits between them is owned by this tool and fully replaced
/// on every run.
pub struct Markers {
    pub start: String,
    pub end: String,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SyncMode {
    /// Show what would change, leave the README alone
    Preview,
    /// Overwrite the README with the new content
    Write,
}

/// Rebuilds the document with `post_list` between the first occurrence of
/// each marker. Fails without touching anything when a marker is missing
/// or the end marker shows up before the start marker.
pub fn splice_post_list(content: &str, markers: &Markers, post_list: &str) -> io::Result<String> {
    let start = content.find(&markers.start);
    let end = content.find(&markers.end);

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Could not find markers - expected '{}' and '{}'", markers.start, markers.end),
            ));
        }
    };

    if end < start {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("End marker '{}' appears before start marker '{}'", markers.end, markers.start),
        ));
    }

    let mut new_content = String::with_capacity(content.len() + post_list.len());
    new_content.push_str(&content[..start + markers.start.len()]);
    new_content.push('\n');
    new_content.push_str(post_list);
    new_content.push('\n');
    new_content.push_str(&content[end..]);

    Ok(new_content)
}

pub fn update_readme(readme_path: &PathBuf, markers: &Markers, post_list: &str, mode: SyncMode) -> io::Result<()> {
    let content = fs::read_to_string(readme_path)?;

    let new_content = match splice_post_list(&content, markers, post_list) {
        Ok(new_content) => new_content,
        Err(e) => {
            return Err(io::Error::new(e.kind(), format!("{} - file={}", e, readme_path.display())));
        }
    };

    match mode {
        SyncMode::Preview => {
            println!("=== Preview of changes ===");
            println!("Would update {}", readme_path.display());
            println!();
            println!("New blog post section:");
            println!("{}", markers.start);
            println!("{}", post_list);
            println!("{}", markers.end);
        }
        SyncMode::Write => {
            fs::write(readme_path, new_content)?;
            println!("Updated {}", readme_path.display());
        }
    }

    Ok(())
}
