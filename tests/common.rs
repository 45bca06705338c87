#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, TimeZone};
use std::path::PathBuf;
use tempfile::TempDir;
use worktime::models::record::Timestamp;

pub fn wt() -> Command {
    cargo_bin_cmd!("worktime")
}

/// Isolated config + database pair living in its own temp dir.
pub struct Sandbox {
    pub dir: TempDir,
    pub config: String,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("worktime.conf").to_string_lossy().to_string();
        let db = dir.path().join("worktime.sqlite").to_string_lossy().to_string();
        Self { dir, config, db }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `worktime --config <conf> --db <db> <args...>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = wt();
        cmd.args(["--config", &self.config, "--db", &self.db]);
        cmd.args(args);
        cmd
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}
