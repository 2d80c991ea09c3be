// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{Params, Stage};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    println!("Done: {} issues in catalog", summary.issues);
    for p in &summary.files_written {
        println!("Wrote {}", p.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--sheet" => params.sheet = PathBuf::from(args.next().ok_or("Missing value for --sheet")?),
            "--links" => params.links = PathBuf::from(args.next().ok_or("Missing value for --links")?),
            "-o" | "--out" => params.out = PathBuf::from(args.next().ok_or("Missing output path")?),
            "--covers-dir" => {
                params.covers_dir = PathBuf::from(args.next().ok_or("Missing value for --covers-dir")?);
            }
            "--medium-dir" => {
                params.medium_dir = PathBuf::from(args.next().ok_or("Missing value for --medium-dir")?);
            }
            "--store-dir" => {
                params.store_dir = PathBuf::from(args.next().ok_or("Missing value for --store-dir")?);
            }
            "--fetch-covers" => params.fetch_covers = true,
            "--delay-ms" => {
                params.delay_ms = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
            }
            "--stage" => {
                let v = args.next().ok_or("Missing value for --stage")?;
                params.stage = Some(match v.to_ascii_lowercase().as_str() {
                    "reconcile" => Stage::Reconcile,
                    "fetch" => Stage::Fetch,
                    "images" => Stage::Images,
                    "render" => Stage::Render,
                    other => return Err(format!("Unknown stage: {}", other).into()),
                });
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

/// Prints stage progress as plain lines.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        println!("({}/{}) {}", self.done, self.total, label);
    }
    fn item_failed(&mut self, label: &str) {
        self.done += 1;
        println!("({}/{}) FAILED {}", self.done, self.total, label);
    }
    fn finish(&mut self) {}
}
