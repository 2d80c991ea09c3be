// src/download.rs
// Cover image fetch stage. Filenames are fixed from the reconciled order
// before any request goes out, so completion order never affects naming.

use std::{
    error::Error,
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
    time::Duration,
};

use crate::catalog::assets::cover_filename;
use crate::catalog::records::YearGroup;
use crate::config::consts::{JITTER_MS, WORKERS};
use crate::core::net::Fetch;
use crate::file::{ensure_directory, write_bytes};
use crate::progress::Progress;

pub struct DownloadSummary {
    pub fetched: usize,
    pub failed: usize,
}

/// Download every issue's cover into `out_dir` under its canonical
/// filename. One failed item is logged and skipped; the batch continues.
pub fn download_covers(
    groups: &[YearGroup],
    out_dir: &Path,
    fetch: &(dyn Fetch + Sync),
    pause_ms: u64,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<DownloadSummary, Box<dyn Error>> {
    ensure_directory(out_dir)?;

    // Deterministic work list: (url, filename) pairs in catalog order.
    let jobs: Vec<(String, String)> = groups
        .iter()
        .flat_map(|g| g.issues.iter())
        .filter(|i| !i.image_url.is_empty())
        .map(|i| (i.image_url.clone(), cover_filename(i)))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(jobs.len());
    }

    let cursor = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<Result<String, (String, String)>>();
    let workers = WORKERS.min(jobs.len()).max(1);

    let (fetched, failed) = thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let cursor = &cursor;
            let jobs = &jobs;
            scope.spawn(move || {
                loop {
                    let i = cursor.fetch_add(1, Ordering::Relaxed);
                    if i >= jobs.len() {
                        break;
                    }
                    let (url, name) = &jobs[i];
                    let result = match fetch.get(url) {
                        Ok(bytes) => write_bytes(&out_dir.join(name), &bytes)
                            .map(|_| name.clone())
                            .map_err(|e| (name.clone(), e.to_string())),
                        Err(e) => Err((name.clone(), e.to_string())),
                    };
                    let _ = tx.send(result);
                    let jitter = (i as u64) % JITTER_MS;
                    thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
                }
            });
        }
        drop(res_tx); // this thread is sole receiver now

        let mut fetched = 0usize;
        let mut failed = 0usize;
        for _ in 0..jobs.len() {
            match res_rx.recv() {
                Ok(Ok(name)) => {
                    fetched += 1;
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&name);
                    }
                }
                Ok(Err((name, msg))) => {
                    failed += 1;
                    loge!("Download: {}: {}", name, msg);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&name);
                    }
                }
                Err(_) => break, // workers ended early; bail gracefully
            }
        }
        (fetched, failed)
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(DownloadSummary { fetched, failed })
}
