use std::env;
use std::path::PathBuf;

use clap::Parser;
use spdlog::warn;

use postsync::config::{default_config, read_config, Config};
use postsync::logger::configure_logger;
use postsync::readme::SyncMode;
use postsync::sync::sync_posts;

const CFG_FILE_NAME: &str = "postsync.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Write changes to the README (default: preview only)
    #[arg(short, long)]
    write: bool,

    /// Directory holding the blog posts, overriding the configured one
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn get_config_path() -> Option<PathBuf> {
    let exe_path = env::current_exe().unwrap();
    let exe_dir = exe_path.parent().unwrap();
    let cur_dir = env::current_dir().unwrap();

    if exe_dir.join(CFG_FILE_NAME).exists() {
        return Some(exe_dir.join(CFG_FILE_NAME));
    }

    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    let cfg_dir = dirs::config_dir().expect("Could not find user config dir");
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        // No config anywhere is fine - the built-in defaults apply
        None => return Ok(default_config()),
        Some(x) => x,
    };

    println!("Reading config from {}", config_path.to_str().unwrap());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        let location = log.location.unwrap_or_else(|| {
            dirs::cache_dir().unwrap().join("postsync").join("log").join("sync.log")
        });
        log.location = Some(location);
        config.log = Some(log);
    }

    Ok(config)
}

fn main() {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let mut config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run postsync --help");
            std::process::exit(1);
        }
    };

    if let Some(content_dir) = args.content_dir {
        config.paths.content_dir = content_dir;
    }

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let mode = if args.write { SyncMode::Write } else { SyncMode::Preview };

    if let Err(err) = sync_posts(&config, mode) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
