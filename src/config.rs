use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Paths {
    pub content_dir: PathBuf,
    pub readme_path: PathBuf,
}

#[derive(Deserialize)]
pub struct Sync {
    pub base_url: String,
    pub start_marker: String,
    pub end_marker: String,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub sync: Sync,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().unwrap();
        let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
        let str_path = path.to_str().unwrap();
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir),
        readme_path: parse_path(cfg.paths.readme_path),
    };

    Ok(cfg)
}

/// Built-in defaults, used when no postsync.toml is found anywhere: the
/// website checkout sits next to the tool and the README next to the tool.
pub fn default_config() -> Config {
    Config {
        paths: Paths {
            content_dir: parse_path(PathBuf::from("${exe_dir}/../atsentia-website/atsentia/src/content/blog")),
            readme_path: parse_path(PathBuf::from("${exe_dir}/README.md")),
        },
        sync: Sync {
            base_url: "https://atsentia.ai/blog/".to_string(),
            start_marker: "<!-- BLOG-POST-LIST:START -->".to_string(),
            end_marker: "<!-- BLOG-POST-LIST:END -->".to_string(),
        },
        log: None,
    }
}
