use crate::post::Post;
use crate::text_utils::format_short_date;

/// Renders the sorted post list as markdown bullet links, one line per
/// post. No trailing newline - the patcher frames the block itself.
pub fn render_post_list(posts: &[Post]) -> String {
    let mut lines = vec![];
    for post in posts {
        let date = format_short_date(&post.date);
        lines.push(format!("- [{}]({}) — {}", post.title, post.url, date));
    }

    lines.join("\n")
}
