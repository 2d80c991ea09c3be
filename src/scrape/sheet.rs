// src/scrape/sheet.rs
// Reads the published-spreadsheet markup that the page-fetch step saved to
// disk and extracts raw table rows: [date, issue number, image URL].
// Everything with at least three cells is returned; filtering against
// header labels and foreign hosts belongs to catalog::loaders.

use std::{error::Error, fs, path::Path};

use crate::core::html::{first_img_src, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;

pub struct SheetBundle {
    pub rows: Vec<Vec<String>>,
}

/// Load saved markup and parse it. A missing file, or markup that yields no
/// rows at all, is a fatal load and is reported to the caller.
pub fn load(path: &Path) -> Result<SheetBundle, Box<dyn Error>> {
    let doc = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let t = std::time::Instant::now();
    let bundle = parse_doc(&doc);
    logf!("Sheet: parsed {} rows from {} in {:?}", bundle.rows.len(), path.display(), t.elapsed());
    if bundle.rows.is_empty() {
        return Err(format!("{}: no table rows extracted", path.display()).into());
    }
    Ok(bundle)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> SheetBundle {
    let mut rows_out: Vec<Vec<String>> = Vec::new();

    // Walk each <table>…</table> block; the published sheet nests its grid
    // in a single one, but tolerate wrappers around it.
    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[tb_s..tb_e];
        pos = tb_e;

        let mut tr_pos = 0usize;
        while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", tr_pos) {
            let tr_block = &table[tr_s..tr_e];
            tr_pos = tr_e;

            let mut cells: Vec<String> = Vec::with_capacity(4);
            let mut img_url = s!();
            let mut td_pos = 0usize;
            while let Some((td_s, td_e)) = next_tag_block_ci(tr_block, "<td", "</td>", td_pos) {
                let td_block = &tr_block[td_s..td_e];
                td_pos = td_e;

                if img_url.is_empty() {
                    if let Some(src) = first_img_src(td_block) {
                        img_url = src;
                    }
                }
                let inner = inner_after_open_tag(td_block);
                cells.push(strip_tags(normalize_entities(&inner)));
            }
            if cells.len() < 3 {
                continue; // spacer or annotation row
            }
            // The third cell holds the embedded image; its text content is
            // only a placeholder, so substitute the extracted URL.
            cells[2] = img_url;
            rows_out.push(cells);
        }
    }

    SheetBundle { rows: rows_out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_number_and_image_url_per_row() {
        let doc = r#"
            <html><body>
              <table class="waffle">
                <tr><td>Дата</td><td>Выпуск</td><td>Обложка</td></tr>
                <tr>
                  <td class="s1">1999-03-01</td>
                  <td class="s1">№ 1 (1)</td>
                  <td class="s2"><img src="https://lh3.googleusercontent.com/abc=w200" alt=""></td>
                </tr>
                <tr>
                  <td>1999-03-15</td>
                  <td>№ 2 (2)</td>
                  <td><img src='https://lh3.googleusercontent.com/def=w200'></td>
                </tr>
              </table>
            </body></html>
        "#;

        let out = parse_doc(doc);
        assert_eq!(out.rows.len(), 3); // header row included; loaders drop it
        assert_eq!(out.rows[1], vec!["1999-03-01", "№ 1 (1)", "https://lh3.googleusercontent.com/abc=w200"]);
        assert_eq!(out.rows[2][2], "https://lh3.googleusercontent.com/def=w200");
    }

    #[test]
    fn rows_without_an_image_keep_an_empty_url_cell() {
        let doc = r#"
            <table>
              <tr><td>2000-01-10</td><td>№ 3 (3)</td><td>&nbsp;</td></tr>
            </table>
        "#;
        let out = parse_doc(doc);
        assert_eq!(out.rows.len(), 1);
        assert_eq!(out.rows[0][2], "");
    }

    #[test]
    fn short_and_empty_rows_are_skipped() {
        let doc = r#"
            <table>
              <tr><td colspan=3>1999</td></tr>
              <tr></tr>
              <tr><td>a</td><td>b</td></tr>
            </table>
        "#;
        assert!(parse_doc(doc).rows.is_empty());
    }

    #[test]
    fn entities_are_normalized_in_cell_text() {
        let doc = r#"
            <table>
              <tr><td>2000-01-10</td><td>№&nbsp;4&nbsp;(4)</td><td><img src="https://h/x"></td></tr>
            </table>
        "#;
        let out = parse_doc(doc);
        assert_eq!(out.rows[0][1], "№ 4 (4)");
    }
}
