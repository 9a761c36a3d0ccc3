use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

pub fn open_log_file(path: &Path) -> Result<File> {
    let path = expand_path(path);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at path: {}", path.display()))
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();
    builder
}

/// The terminal UI owns the screen, so logs go to a file instead.
pub fn init_file_logger(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    builder(LevelFilter::Info)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .with_context(|| "Failed to initialise logger")
}

pub fn init_stderr_logger() -> Result<()> {
    builder(LevelFilter::Warn)
        .target(Target::Stderr)
        .try_init()
        .with_context(|| "Failed to initialise logger")
}
