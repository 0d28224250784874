//! Patches interlinear HTML files with regenerated transliterations.
//!
//! Each interlinear block carries a `<span class="translit">` wrapper whose
//! anchor shows the transliteration and whose `title` attribute repeats it
//! alongside the English gloss. The Greek and gloss spans that follow the
//! anchor are authoritative, so the anchor text and title are rebuilt from
//! them. Untouched lines are written back byte for byte.

use std::path::Path;

use anyhow::Context as _;

use crate::translit::transliterate;

const TRANSLIT_MARKER: &str = "<span class=\"translit\"";
const GREEK_MARKER: &str = "<span class=\"greek\">";
const ENG_MARKER: &str = "<span class=\"eng\">";

/// Rewrite one interlinear HTML file in place. Returns the number of
/// anchors that changed; the file is only written when that count is
/// non-zero.
pub fn process_file(path: &Path) -> anyhow::Result<usize> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let (patched, changed) = patch_text(&text);
    if changed > 0 {
        std::fs::write(path, patched)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(changed)
}

pub fn patch_text(text: &str) -> (String, usize) {
    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    let mut changed = 0;

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].contains(TRANSLIT_MARKER) {
            i += 1;
            continue;
        }

        let Some(anchor_idx) = find_line(&lines, i + 1, "<a ") else {
            break;
        };
        let Some(greek_idx) = find_line(&lines, anchor_idx + 1, GREEK_MARKER) else {
            break;
        };
        let Some(greek_word) = span_text(&lines[greek_idx], GREEK_MARKER) else {
            i = greek_idx + 1;
            continue;
        };
        if greek_word.is_empty() {
            i = greek_idx + 1;
            continue;
        }
        let greek_word = greek_word.to_string();

        let Some(eng_idx) = find_line(&lines, greek_idx + 1, ENG_MARKER) else {
            break;
        };
        let Some(eng_text) = span_text(&lines[eng_idx], ENG_MARKER) else {
            i = eng_idx + 1;
            continue;
        };
        let eng_text = eng_text.to_string();

        let translit = transliterate(&greek_word);
        let rebuilt = rebuild_anchor(&lines[anchor_idx], &translit, &eng_text);
        if rebuilt != lines[anchor_idx] {
            lines[anchor_idx] = rebuilt;
            changed += 1;
        }

        i = eng_idx + 1;
    }

    (lines.concat(), changed)
}

fn find_line(lines: &[String], from: usize, marker: &str) -> Option<usize> {
    lines[from.min(lines.len())..]
        .iter()
        .position(|line| line.contains(marker))
        .map(|offset| from + offset)
}

/// Text inside the first `<span class="...">...</span>` on the line.
fn span_text<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let start = line.find(marker)? + marker.len();
    let end = line[start..].find("</span>")? + start;
    Some(line[start..end].trim())
}

fn rebuild_anchor(anchor_line: &str, translit: &str, eng: &str) -> String {
    let mut line = anchor_line.to_string();

    if let Some(title_pos) = line.find("title=\"") {
        let value_start = title_pos + "title=\"".len();
        if let Some(value_len) = line[value_start..].find('"') {
            let value_end = value_start + value_len;
            let tail = occurrence_tail(&line[value_start..value_end]);
            let new_title = format!("{translit}: {eng}{tail}");
            line.replace_range(value_start..value_end, &new_title);
        }
    } else if line.contains("\\1") {
        // Salvage anchors corrupted by an earlier broken substitution: keep
        // the indentation and rebuild the rest of the line outright.
        let indent: String = line.chars().take_while(|c| c.is_whitespace() && *c != '\n').collect();
        line = format!("{indent} title=\"{translit}: {eng}\">{translit}</a></span><br />\n");
    } else if let Some(gt_pos) = line.find('>') {
        line.insert_str(gt_pos, &format!(" title=\"{translit}: {eng}\""));
    }

    replace_anchor_text(&line, translit)
}

/// Keep an existing "- Ocorrência..." suffix when rebuilding the title.
fn occurrence_tail(title_value: &str) -> String {
    for needle in [" - Ocorrência", " – Ocorrência", " — Ocorrência", "- Ocorrência"] {
        if let Some(pos) = title_value.find(needle) {
            return title_value[pos..].to_string();
        }
    }
    String::new()
}

/// Replace the text of the first `>text</a>` segment on the line.
fn replace_anchor_text(line: &str, translit: &str) -> String {
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find('>') {
        let content_start = search_from + offset + 1;
        let rest = &line[content_start..];
        match rest.find('<') {
            Some(lt) if rest[lt..].starts_with("</a>") => {
                let mut patched = line.to_string();
                patched.replace_range(content_start..content_start + lt, translit);
                return patched;
            }
            _ => search_from = content_start,
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(title: &str, anchor_text: &str, greek: &str, eng: &str) -> String {
        format!(
            "<span class=\"translit\">\n\
             <a href=\"#g\" title=\"{title}\">{anchor_text}</a></span><br />\n\
             <span class=\"greek\">{greek}</span><br />\n\
             <span class=\"eng\">{eng}</span>\n"
        )
    }

    #[test]
    fn test_patch_rebuilds_anchor_and_title() {
        let html = block("stale: old gloss", "stale", "λόγος", "word");
        let (patched, changed) = patch_text(&html);
        assert_eq!(changed, 1);
        assert!(patched.contains("title=\"logos: word\""));
        assert!(patched.contains(">logos</a>"));
        // The greek and eng lines stay untouched.
        assert!(patched.contains("<span class=\"greek\">λόγος</span>"));
        assert!(patched.contains("<span class=\"eng\">word</span>"));
    }

    #[test]
    fn test_patch_preserves_occurrence_tail() {
        let html = block(
            "stale: old - Ocorrência: 330x",
            "stale",
            "καί",
            "and",
        );
        let (patched, changed) = patch_text(&html);
        assert_eq!(changed, 1);
        assert!(patched.contains("title=\"kai: and - Ocorrência: 330x\""));
    }

    #[test]
    fn test_patch_is_idempotent() {
        let html = block("logos: word", "logos", "λόγος", "word");
        let (patched, changed) = patch_text(&html);
        assert_eq!(changed, 0);
        assert_eq!(patched, html);
    }

    #[test]
    fn test_patch_inserts_missing_title() {
        let html = "<span class=\"translit\">\n\
                    <a href=\"#g\">stale</a></span><br />\n\
                    <span class=\"greek\">θεός</span><br />\n\
                    <span class=\"eng\">God</span>\n";
        let (patched, changed) = patch_text(html);
        assert_eq!(changed, 1);
        assert!(patched.contains("<a href=\"#g\" title=\"theos: God\">theos</a>"));
    }

    #[test]
    fn test_patch_ignores_unrelated_lines() {
        let html = "<p>intro</p>\n<span class=\"other\">x</span>\n";
        let (patched, changed) = patch_text(html);
        assert_eq!(changed, 0);
        assert_eq!(patched, html);
    }

    #[test]
    fn test_patch_multiple_blocks() {
        let html = format!(
            "{}{}",
            block("a: b", "a", "λόγος", "word"),
            block("c: d", "c", "θεός", "God")
        );
        let (patched, changed) = patch_text(&html);
        assert_eq!(changed, 2);
        assert!(patched.contains("title=\"logos: word\""));
        assert!(patched.contains("title=\"theos: God\""));
    }

    #[test]
    fn test_process_file_writes_only_when_changed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interlinear.html");
        let html = block("stale: x", "stale", "λόγος", "word");
        std::fs::write(&path, &html).unwrap();

        let changed = process_file(&path).unwrap();
        assert_eq!(changed, 1);
        let patched = std::fs::read_to_string(&path).unwrap();
        assert!(patched.contains("logos: word"));

        // A second pass finds nothing to update.
        assert_eq!(process_file(&path).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), patched);
    }
}
