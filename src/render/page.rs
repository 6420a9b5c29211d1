use super::links::escape;

pub const DEFAULT_TITLE: &str = "電話帳（PINなし）";

const PAGE_CSS: &str = include_str!("assets/page.css");
const PAGE_JS: &str = include_str!("assets/filter.js");

const SEARCH_PLACEHOLDER: &str = "全文検索（氏名・会社・役職・住所・電話・FAX・携帯・メール）";

/// Wrap the rendered category sections in the standalone page.
pub fn render_page(title: &str, sections_html: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="ja">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
{css}  </style>
</head>
<body>
  <header class="searchbar">
    <h1 class="title">{title}</h1>
    <div class="page-url"><span id="page-url"></span></div>
    <div class="controls">
      <input id="search" type="search" placeholder="{placeholder}" aria-label="検索">
      <button id="clear-btn" class="btn" type="button">クリア</button>
      <div class="view-toggle" role="group" aria-label="表示切り替え">
        <button id="btn-card" class="btn active" type="button">カード表示</button>
        <button id="btn-table" class="btn" type="button">テーブル表示</button>
      </div>
    </div>
  </header>
  <main id="content" class="view-card">
{sections}
  </main>

  <script>
{js}  </script>
</body>
</html>
"#,
        title = escape(title),
        css = PAGE_CSS,
        placeholder = SEARCH_PLACEHOLDER,
        sections = sections_html,
        js = PAGE_JS,
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_self_contained() {
        let html = render_page(DEFAULT_TITLE, "");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
        assert!(!html.contains("<link "));
        assert!(!html.contains("src="));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render_page("A&B <roster>", "");
        assert!(html.contains("<title>A&amp;B &lt;roster&gt;</title>"));
        assert!(html.contains(r#"<h1 class="title">A&amp;B &lt;roster&gt;</h1>"#));
    }

    #[test]
    fn starts_in_card_view() {
        let html = render_page(DEFAULT_TITLE, "");
        assert!(html.contains(r#"<main id="content" class="view-card">"#));
        assert!(html.contains(r#"id="btn-card" class="btn active""#));
    }

    fn at(haystack: &str, needle: &str) -> usize {
        haystack.find(needle).unwrap_or_else(|| panic!("missing {needle:?}"))
    }

    #[test]
    fn filter_script_hides_unmatched_groups_and_reopens_on_empty_query() {
        let html = render_page(DEFAULT_TITLE, "");
        let script = &html[at(&html, "<script>")..at(&html, "</script>")];

        // per-group count over entries nested in each details element
        let groups = at(script, "content.querySelectorAll('details.category')");
        let entries = at(script, "group.querySelectorAll('.entry')");
        assert!(groups < entries);
        assert!(script.contains("q = (q || '').toLowerCase();"));
        assert!(script.contains("var match = !q || text.indexOf(q) !== -1;"));
        assert!(script.contains("entry.style.display = match ? '' : 'none';"));

        // active query: open groups with hits, hide the rest in place
        let query_branch = at(script, "if (q) {");
        let empty_branch = at(script, "} else {");
        let open_hits = at(script, "group.open = hits > 0;");
        let hide = at(script, "group.style.display = hits > 0 ? '' : 'none';");
        assert!(query_branch < open_hits && open_hits < empty_branch);
        assert!(query_branch < hide && hide < empty_branch);

        // empty query: every group shown and forced open
        let force_open = at(script, "group.open = true;");
        let restore = at(script, "group.style.display = '';");
        assert!(empty_branch < force_open && empty_branch < restore);

        assert!(script.contains("searchInput.value = ''; filter('');"));
        assert!(script.trim_end().ends_with("filter('');\n})();"));
    }

    #[test]
    fn view_toggle_switches_container_class() {
        let html = render_page(DEFAULT_TITLE, "");
        assert!(html.contains("content.classList.toggle('view-table', table);"));
        assert!(html.contains("content.classList.toggle('view-card', !table);"));
        assert!(html.contains("#content.view-table .card-view { display: none; }"));
        assert!(html.contains("#content.view-card .table-view { display: none; }"));
    }
}
