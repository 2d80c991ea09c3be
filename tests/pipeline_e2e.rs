// tests/pipeline_e2e.rs
use std::fs;
use std::path::PathBuf;

use cover_archive::config::options::{Params, Stage};
use cover_archive::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cover_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const SHEET: &str = r#"
<html><body>
  <table class="waffle">
    <tr><td>Дата</td><td>Выпуск</td><td>Обложка</td></tr>
    <tr><td>1999-03-15</td><td>№ 2 (2)</td><td><img src="https://lh3.googleusercontent.com/b=w200"></td></tr>
    <tr><td>1999-03-01</td><td>№ 1 (1)</td><td><img src="https://lh3.googleusercontent.com/a=w200"></td></tr>
    <tr><td>2001-05-01</td><td>№ 5 (5)</td><td><img src="https://lh3.googleusercontent.com/e=w200"></td></tr>
    <tr><td>2001-05-01</td><td>№ 4 (4)</td><td><img src="https://lh3.googleusercontent.com/d=w200"></td></tr>
    <tr><td>1999-04-01</td><td>№ 3 (3)</td><td><img src="https://lh3.googleusercontent.com/c=w200"></td></tr>
    <tr><td>2001-06-01</td><td>№ 6 (6)</td><td><img src="https://elsewhere.example.com/x.jpg"></td></tr>
  </table>
</body></html>
"#;

const LINKS: &str = "\
Дата,Выпуск,Ссылка на выпуск,Ссылка на обложку
1999-03-01,№ 1 (1),https://arch/1.pdf,https://arch/c1.jpg
1999-03-15,№ 2 (2),https://arch/2.pdf,https://arch/c2.jpg
2001-05-01,№ 5 (5),https://arch/5.pdf,
2001-05-01,№ 4 (4),https://arch/4.pdf,
1999-04-01,№ 3 (3),,https://arch/c3.jpg
2002-01-01,№ 9 (9),https://arch/9.pdf,
";

fn params_in(dir: &PathBuf) -> Params {
    let mut params = Params::new();
    params.sheet = dir.join("sheet.html");
    params.links = dir.join("links.csv");
    params.out = dir.join("index.html");
    params.covers_dir = dir.join("covers");
    params.medium_dir = dir.join("covers_medium");
    params.store_dir = dir.join(".store");
    params
}

fn write_sources(dir: &PathBuf) {
    fs::write(dir.join("sheet.html"), SHEET).unwrap();
    fs::write(dir.join("links.csv"), LINKS).unwrap();
}

#[test]
fn full_build_reconciles_and_renders() {
    let dir = tmp_dir("full");
    write_sources(&dir);
    let params = params_in(&dir);

    let summary = runner::run(&params, None).unwrap();

    // № 3 lost its PDF link in the CSV, № 6 sits on a foreign host and
    // № 9 never appeared in the sheet; four issues survive.
    assert_eq!(summary.issues, 4);
    assert!(dir.join("index.html").exists());
    assert!(dir.join(".store/catalog.csv").exists());
    assert!(dir.join(".store/covers.csv").exists());

    let doc = fs::read_to_string(dir.join("index.html")).unwrap();

    // Year sections ascend.
    let p1999 = doc.find(">1999<").unwrap();
    let p2001 = doc.find(">2001<").unwrap();
    assert!(p1999 < p2001);

    // Date sort within 1999 fixes the indices regardless of sheet order.
    assert!(doc.contains("cover_1999_№ 1 (1)_0.jpg"));
    assert!(doc.contains("cover_1999_№ 2 (2)_1.jpg"));

    // Equal dates keep the order they were scraped in.
    let p5 = doc.find("cover_2001_№ 5 (5)_0.jpg").unwrap();
    let p4 = doc.find("cover_2001_№ 4 (4)_1.jpg").unwrap();
    assert!(p5 < p4);

    // Dropped records leave no trace in the page.
    assert!(!doc.contains("№ 3 (3)"));
    assert!(!doc.contains("№ 6 (6)"));
    assert!(!doc.contains("№ 9 (9)"));

    // Tiles open the viewer rather than navigating.
    assert!(doc.contains("openDocumentViewer('https://arch/1.pdf', '№ 1 (1) - 1999-03-01')"));
}

#[test]
fn rebuild_on_unchanged_sources_is_byte_identical() {
    let dir = tmp_dir("idem");
    write_sources(&dir);
    let params = params_in(&dir);

    runner::run(&params, None).unwrap();
    let first = fs::read(dir.join("index.html")).unwrap();
    let first_catalog = fs::read(dir.join(".store/catalog.csv")).unwrap();

    runner::run(&params, None).unwrap();
    let second = fs::read(dir.join("index.html")).unwrap();
    let second_catalog = fs::read(dir.join(".store/catalog.csv")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_catalog, second_catalog);
}

#[test]
fn render_stage_replays_the_stored_catalog() {
    let dir = tmp_dir("stage_render");
    write_sources(&dir);
    let params = params_in(&dir);

    runner::run(&params, None).unwrap();
    let first = fs::read(dir.join("index.html")).unwrap();
    fs::remove_file(dir.join("index.html")).unwrap();

    // Sources gone: only the stored catalog can feed this.
    fs::remove_file(dir.join("sheet.html")).unwrap();
    fs::remove_file(dir.join("links.csv")).unwrap();

    let mut render_only = params.clone();
    render_only.stage = Some(Stage::Render);
    runner::run(&render_only, None).unwrap();

    let second = fs::read(dir.join("index.html")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_links_csv_aborts_the_pipeline() {
    let dir = tmp_dir("no_links");
    fs::write(dir.join("sheet.html"), SHEET).unwrap();
    let params = params_in(&dir);

    let err = runner::run(&params, None).unwrap_err();
    assert!(err.to_string().contains("links.csv"));
    assert!(!dir.join("index.html").exists());
}

#[test]
fn sheet_without_usable_rows_aborts_the_pipeline() {
    let dir = tmp_dir("empty_sheet");
    fs::write(dir.join("sheet.html"), "<html><body><p>nothing</p></body></html>").unwrap();
    fs::write(dir.join("links.csv"), LINKS).unwrap();
    let params = params_in(&dir);

    assert!(runner::run(&params, None).is_err());
    assert!(!dir.join("index.html").exists());
}

#[test]
fn reconcile_stage_writes_catalog_and_manifest_only() {
    let dir = tmp_dir("stage_reconcile");
    write_sources(&dir);
    let mut params = params_in(&dir);
    params.stage = Some(Stage::Reconcile);

    let summary = runner::run(&params, None).unwrap();
    assert_eq!(summary.issues, 4);
    assert_eq!(summary.files_written.len(), 2);
    assert!(!dir.join("index.html").exists());

    // The manifest pins the filename for every reconciled issue.
    let manifest = fs::read_to_string(dir.join(".store/covers.csv")).unwrap();
    assert!(manifest.contains("1999-03-01,№ 1 (1),cover_1999_№ 1 (1)_0.jpg"));
    assert_eq!(manifest.lines().count(), 4);
}
