// src/render.rs
// Turns the reconciled catalog into the single static page. Pure data to
// markup: identical catalog data and asset resolution produce byte-identical
// output (no timestamps, no generated ids), so regeneration stays diffable.

use crate::catalog::assets::AssetResolver;
use crate::catalog::records::YearGroup;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Архив обложек журнала «Афиша»</title>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
<link href="https://fonts.googleapis.com/css2?family=Grato+Grotesk:wght@400;600&display=swap" rel="stylesheet">
<style>
body { font-family: 'Grato Grotesk', -apple-system, BlinkMacSystemFont, sans-serif; margin: 0; background: #fff; }
header { padding: 24px 32px; border-bottom: 1px solid #e9ecef; }
.year-section { padding: 16px 32px; }
.year-title { font-size: 1.6rem; margin: 8px 0 16px; }
.covers-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 20px; }
.cover-item { cursor: pointer; }
.cover-image img { width: 100%; height: auto; display: block; border: 1px solid #e9ecef; }
.cover-info { margin-top: 6px; }
.cover-number { font-weight: 600; }
.cover-date { color: #6c757d; font-size: 0.9rem; }
.viewer-modal { display: none; position: fixed; z-index: 1000; left: 0; top: 0; width: 100%; height: 100%; background: rgba(0, 0, 0, 0.9); overflow: auto; }
.viewer-content { background: #fefefe; margin: 5% auto; padding: 20px; border: 1px solid #888; width: 90%; max-width: 1200px; height: 90%; position: relative; }
.viewer-header { display: flex; justify-content: space-between; align-items: center; padding-bottom: 15px; margin-bottom: 15px; border-bottom: 1px solid #e9ecef; }
.viewer-info { background: #f8f9fa; padding: 15px; border-radius: 6px; font-size: 1.1rem; color: #495057; }
.viewer-close { color: #aaa; font-size: 28px; font-weight: bold; cursor: pointer; }
.viewer-close:hover { color: #000; }
.viewer-frame { width: 100%; height: calc(100% - 80px); border: none; }
footer { padding: 24px 32px; color: #6c757d; }
</style>
</head>
<body>
<header>
    <div class="header-text">
        <strong>Архив обложек журнала «Афиша»</strong> Если нажать на обложку, откроется pdf всего номера
    </div>
</header>
<main>
"#;

const PAGE_TAIL: &str = r#"</main>
<div id="viewerModal" class="viewer-modal">
    <div class="viewer-content">
        <div class="viewer-header">
            <div class="viewer-info" id="viewerInfo"></div>
            <span class="viewer-close" onclick="closeDocumentViewer()">&times;</span>
        </div>
        <iframe id="viewerFrame" class="viewer-frame" src=""></iframe>
    </div>
</div>
<script>
function openDocumentViewer(documentUrl, labelText) {
    document.getElementById('viewerInfo').textContent = labelText;
    document.getElementById('viewerFrame').src = documentUrl;
    document.getElementById('viewerModal').style.display = 'block';
    document.body.style.overflow = 'hidden';
}

function closeDocumentViewer() {
    document.getElementById('viewerModal').style.display = 'none';
    document.getElementById('viewerFrame').src = '';
    document.body.style.overflow = 'auto';
}

window.onclick = function (event) {
    if (event.target === document.getElementById('viewerModal')) {
        closeDocumentViewer();
    }
};

document.addEventListener('keydown', function (event) {
    if (event.key === 'Escape') closeDocumentViewer();
});
</script>
<footer>
    <p>Данные собраны из опубликованной таблицы и архива выпусков</p>
</footer>
</body>
</html>
"#;

/// Render the full document. Year sections come in the groups' order
/// (ascending), tiles in each group's already-established order. The
/// catalog is not mutated; the resolver is only asked for image paths.
pub fn render_catalog(groups: &[YearGroup], assets: &AssetResolver) -> String {
    let mut out = String::with_capacity(64 * 1024 + 2 * 1024 * groups.len());
    out.push_str(PAGE_HEAD);

    for g in groups {
        out.push_str(&format!(
            "<section class=\"year-section\">\n<h2 class=\"year-title\">{}</h2>\n<div class=\"covers-grid\">\n",
            g.year
        ));
        for issue in &g.issues {
            let image_path = assets.page_path(issue);
            out.push_str(&format!(
                r#"<div class="cover-item" onclick="openDocumentViewer('{pdf}', '{number} - {date}')">
    <div class="cover-image">
        <img src="{img}" alt="Обложка {number}" loading="lazy">
    </div>
    <div class="cover-info">
        <div class="cover-number">{number}</div>
        <div class="cover-date">{date}</div>
    </div>
</div>
"#,
                pdf = issue.pdf_url,
                img = image_path,
                number = issue.number,
                date = issue.date,
            ));
        }
        out.push_str("</div>\n</section>\n");
    }

    out.push_str(PAGE_TAIL);
    out
}
