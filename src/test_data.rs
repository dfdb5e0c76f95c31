#[cfg(test)]
pub const POST_DATA: &str = "---
title: 'What I learned after 20+ years of software development'
pubDate: 2022-04-02
description: \"Lessons I wish someone had told me when I started\"
---

# What I learned after 20+ years of software development

How to be a great software engineer?

Someone asked me this question today and I didn't have an answer. After thinking for a while, I came up with a list of what I try to do myself.
";

#[cfg(test)]
pub const README_DATA: &str = "# Atsentia

Building useful things with language models.

## Latest blog posts

<!-- BLOG-POST-LIST:START -->
- [An Old Entry](https://atsentia.ai/blog/an-old-entry/) — Dec 1, 2020
<!-- BLOG-POST-LIST:END -->

## Contact

hello@atsentia.ai
";
