//! Static HTML gallery page generator.
//!
//! Renders a single self-contained document: inline styles, an inline
//! click-to-copy script, a folder navigation list, one section per folder
//! with the icons shown inline, and a footer carrying the icon count,
//! source URL, and version. The page sits next to the copied icon tree in
//! the docs root, so image `src` attributes are the bare entry paths.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::entry::IconFile;
use crate::paths::parent_dir;

const STYLE: &str = r#"
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 72rem; padding: 0 1rem; }
  nav ul { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 0.5rem 1rem; }
  ul.icons { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1rem; }
  ul.icons li { width: 11rem; cursor: pointer; text-align: center; }
  ul.icons img { width: 4rem; height: 4rem; display: block; margin: 0 auto 0.25rem; }
  ul.icons span { font-size: 0.75rem; word-break: break-all; }
  #status { position: sticky; top: 0; background: #fffbe6; padding: 0.5rem; }
  footer { margin-top: 3rem; font-size: 0.85rem; color: #555; }
"#;

// Clicking an icon copies its library path; the status line shows the
// copied path for five seconds, then reverts to its original text.
const SCRIPT: &str = r#"
  const status = document.getElementById("status");
  const original = status.textContent;
  let timer = null;
  document.querySelectorAll("li[data-path]").forEach((item) => {
    item.addEventListener("click", () => {
      const path = item.dataset.path;
      navigator.clipboard.writeText(path).then(() => {
        status.textContent = "Copied " + path;
        if (timer) clearTimeout(timer);
        timer = setTimeout(() => { status.textContent = original; }, 5000);
      });
    });
  });
"#;

/// Render the gallery page for the final (normalized) icon list.
pub fn render(icons: &[IconFile], source_url: &str, version: &str) -> String {
    let sections = group_by_folder(icons);

    let mut page = String::new();
    let _ = write!(
        page,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Icon Gallery</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Icon Gallery</h1>\n<p id=\"status\">Click an icon to copy its path</p>\n"
    );

    page.push_str("<nav><ul>\n");
    for folder in sections.keys() {
        let _ = writeln!(
            page,
            "<li><a href=\"#{}\">{}</a></li>",
            anchor(folder),
            escape(folder)
        );
    }
    page.push_str("</ul></nav>\n");

    for (folder, members) in &sections {
        let _ = writeln!(
            page,
            "<section id=\"{}\">\n<h2>{}</h2>\n<ul class=\"icons\">",
            anchor(folder),
            escape(folder)
        );
        for icon in members {
            let path = escape(&icon.path);
            let _ = writeln!(
                page,
                "<li data-path=\"{path}\"><img src=\"{path}\" alt=\"{path}\"><span>{path}</span></li>"
            );
        }
        page.push_str("</ul>\n</section>\n");
    }

    let _ = write!(
        page,
        "<footer><p>{} icons &middot; source: <a href=\"{url}\">{url}</a> &middot; \
         <a href=\"https://github.com/iconpack/iconpack\">iconpack</a> &middot; \
         version {version}</p></footer>\n<script>{SCRIPT}</script>\n</body>\n</html>\n",
        icons.len(),
        url = escape(source_url),
        version = escape(version),
    );

    page
}

/// Sorted, deduplicated folder names derived from the icon paths.
pub fn folders(icons: &[IconFile]) -> Vec<String> {
    group_by_folder(icons).into_keys().collect()
}

fn group_by_folder(icons: &[IconFile]) -> BTreeMap<String, Vec<&IconFile>> {
    let mut groups: BTreeMap<String, Vec<&IconFile>> = BTreeMap::new();
    for icon in icons {
        groups
            .entry(parent_dir(&icon.path).to_string())
            .or_default()
            .push(icon);
    }
    groups
}

fn anchor(folder: &str) -> String {
    let slug: String = folder
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("folder-{slug}")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(path: &str) -> IconFile {
        IconFile {
            path: path.to_string(),
            contents: b"<svg/>".to_vec(),
        }
    }

    #[test]
    fn folders_are_sorted_and_deduplicated() {
        let icons = vec![
            icon("b/two.svg"),
            icon("a/one.svg"),
            icon("b/three.svg"),
            icon("a/sub/four.svg"),
        ];
        assert_eq!(folders(&icons), ["a", "a/sub", "b"]);
    }

    #[test]
    fn page_links_every_folder_once() {
        let icons = vec![icon("a/one.svg"), icon("a/two.svg"), icon("b/three.svg")];
        let page = render(&icons, "https://example.com/icons.zip", "14.0");

        assert_eq!(page.matches("href=\"#folder-a\"").count(), 1);
        assert_eq!(page.matches("href=\"#folder-b\"").count(), 1);
    }

    #[test]
    fn footer_reports_count_source_and_version() {
        let icons = vec![icon("a/one.svg"), icon("b/two.svg")];
        let page = render(&icons, "https://example.com/icons.zip", "14.0");

        assert!(page.contains("2 icons"));
        assert!(page.contains("https://example.com/icons.zip"));
        assert!(page.contains("version 14.0"));
    }

    #[test]
    fn copy_script_reverts_after_five_seconds() {
        let page = render(&[icon("a/one.svg")], "https://example.com/icons.zip", "dev");

        assert!(page.contains("navigator.clipboard.writeText"));
        assert!(page.contains("5000"));
    }

    #[test]
    fn paths_are_html_escaped() {
        let icons = vec![icon("a/<odd>&name.svg")];
        let page = render(&icons, "https://example.com/icons.zip", "dev");

        assert!(page.contains("a/&lt;odd&gt;&amp;name.svg"));
        assert!(!page.contains("<odd>"));
    }
}
