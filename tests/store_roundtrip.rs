// tests/store_roundtrip.rs
use std::fs;
use std::path::PathBuf;

use cover_archive::catalog::records::{Issue, YearGroup};
use cover_archive::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cover_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Vec<YearGroup> {
    vec![
        YearGroup {
            year: "1999".into(),
            issues: vec![
                Issue {
                    date: "1999-03-01".into(),
                    number: "№ 1 (1)".into(),
                    image_url: "https://lh3.googleusercontent.com/a".into(),
                    pdf_url: "https://arch/1.pdf".into(),
                    cover_url: "https://arch/c1.jpg".into(),
                    index_in_year: 0,
                },
                Issue {
                    date: "1999-03-15".into(),
                    number: "№ 2, спецвыпуск".into(), // comma forces quoting
                    image_url: "https://lh3.googleusercontent.com/b".into(),
                    pdf_url: "https://arch/2.pdf".into(),
                    cover_url: String::new(),
                    index_in_year: 1,
                },
            ],
        },
        YearGroup {
            year: "2001".into(),
            issues: vec![Issue {
                date: "2001-05-01".into(),
                number: "№ 4 (4)".into(),
                image_url: "https://lh3.googleusercontent.com/c".into(),
                pdf_url: "https://arch/4.pdf".into(),
                cover_url: String::new(),
                index_in_year: 0,
            }],
        },
    ]
}

#[test]
fn catalog_survives_a_save_load_cycle() {
    let dir = tmp_dir("cycle");
    let groups = sample();

    store::save_catalog(&dir, &groups).unwrap();
    let loaded = store::load_catalog(&dir).unwrap();

    assert_eq!(loaded, groups);
}

#[test]
fn loading_without_a_catalog_is_an_error() {
    let dir = tmp_dir("missing");
    let err = store::load_catalog(&dir).unwrap_err();
    assert!(err.to_string().contains("reconcile"));
}
