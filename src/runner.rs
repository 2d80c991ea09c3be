// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    catalog::{assets::AssetResolver, loaders, reconcile::reconcile, records::YearGroup},
    config::options::{Params, Stage},
    core::net::HttpFetch,
    download,
    file::write_text,
    images,
    progress::Progress,
    render, scrape, store,
};

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub issues: usize,
}

/// Top-level runner: either one named stage against the stored catalog, or
/// the full build (reconcile, optional cover fetch and resize, render).
///
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut written: Vec<PathBuf> = Vec::new();

    // Later stages replay the persisted catalog instead of re-scraping.
    let groups: Vec<YearGroup> = match params.stage {
        Some(Stage::Fetch) | Some(Stage::Images) | Some(Stage::Render) => {
            store::load_catalog(&params.store_dir)?
        }
        _ => {
            let groups = load_and_reconcile(params, progress.as_deref_mut())?;
            written.push(store::save_catalog(&params.store_dir, &groups)?);
            written.push(store::save_manifest(&params.store_dir, &groups)?);
            groups
        }
    };

    let issues = groups.iter().map(|g| g.issues.len()).sum::<usize>();

    match params.stage {
        Some(Stage::Reconcile) => {}
        Some(Stage::Fetch) => run_fetch(params, &groups, progress.as_deref_mut())?,
        Some(Stage::Images) => run_images(params, progress.as_deref_mut())?,
        Some(Stage::Render) => written.push(run_render(params, &groups)?),
        None => {
            if params.fetch_covers {
                run_fetch(params, &groups, progress.as_deref_mut())?;
                run_images(params, progress.as_deref_mut())?;
            }
            written.push(run_render(params, &groups)?);
        }
    }

    Ok(RunSummary { files_written: written, issues })
}

/// Fatal-load failures (missing CSV, empty table extraction) escalate from
/// here; everything row-level was already skipped and logged by the loaders.
fn load_and_reconcile(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<YearGroup>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Loading sources…");
    }

    let sheet = scrape::sheet::load(&params.sheet)?;
    let sources = loaders::source_records_from_rows(&sheet.rows);
    if sources.is_empty() {
        return Err(format!("{}: no usable rows in the scraped table", params.sheet.display()).into());
    }
    let links = loaders::load_link_records(&params.links)?;

    let groups = reconcile(&sources, &links);
    logf!(
        "Reconciled {} issues across {} years ({} sheet rows, {} link rows)",
        groups.iter().map(|g| g.issues.len()).sum::<usize>(),
        groups.len(),
        sources.len(),
        links.len()
    );
    Ok(groups)
}

fn run_fetch(
    params: &Params,
    groups: &[YearGroup],
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<(), Box<dyn Error>> {
    let fetch = HttpFetch;
    let summary =
        download::download_covers(groups, &params.covers_dir, &fetch, params.delay_ms, progress)?;
    logf!("Download: {} fetched, {} failed", summary.fetched, summary.failed);
    Ok(())
}

fn run_images(params: &Params, progress: Option<&mut (dyn Progress + '_)>) -> Result<(), Box<dyn Error>> {
    images::process_covers(&params.covers_dir, &params.medium_dir, progress)?;
    Ok(())
}

fn run_render(params: &Params, groups: &[YearGroup]) -> Result<PathBuf, Box<dyn Error>> {
    // The page refers to covers with forward slashes regardless of platform.
    let rel = params.medium_dir.to_string_lossy().replace('\\', "/");
    let assets = AssetResolver::new(&params.medium_dir, &rel);
    let doc = render::render_catalog(groups, &assets);
    write_text(&params.out, &doc)?;
    Ok(params.out.clone())
}
