//! Markdown page renderer.
//!
//! Layout of a page document:
//! - YAML frontmatter (topic key, label, badge, color token, entry count)
//! - Title, description and intro text
//! - Optional tab line and "see also" link
//! - One `##` heading per section, in first-seen order
//! - One `###` block per entry with its complexity, description and example

use crate::entry::Entry;
use crate::lookup::ProblemCountLookup;
use crate::registry::PageDescriptor;
use crate::render::view_builder::tab_label;
use crate::render::PageRenderer;

#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    /// Info string for example code fences
    pub code_language: String,
}

impl MarkdownRenderer {
    pub fn new(code_language: impl Into<String>) -> Self {
        Self {
            code_language: code_language.into(),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new("text")
    }
}

impl PageRenderer for MarkdownRenderer {
    type Output = String;

    fn render(&self, page: &PageDescriptor<'_>, lookup: &dyn ProblemCountLookup) -> String {
        let mut sections = Vec::new();

        sections.push(frontmatter(page));
        sections.push(header(page, lookup));

        for group in page.sections() {
            let mut block = vec![format!("## {}", group.name)];
            for entry in &group.entries {
                block.push(self.entry_block(entry));
            }
            sections.push(block.join("\n\n"));
        }

        // Frontmatter is followed by a blank line; everything else is ruled off
        let mut result = sections[0].clone();
        result.push_str("\n\n");
        result.push_str(&sections[1]);
        for section in &sections[2..] {
            result.push_str("\n\n---\n\n");
            result.push_str(section);
        }
        result.push('\n');
        result
    }
}

impl MarkdownRenderer {
    fn entry_block(&self, entry: &Entry) -> String {
        let mut lines = vec![format!("### {}", code_span(&entry.signature))];
        lines.push(String::new());
        lines.push(format!("*{}* · {}", entry.complexity, entry.description));

        let example = entry.example.trim_end();
        if !example.is_empty() {
            lines.push(String::new());
            let fence = "`".repeat((longest_backtick_run(example) + 1).max(3));
            lines.push(format!("{}{}", fence, self.code_language));
            lines.push(example.to_string());
            lines.push(fence);
        }
        lines.join("\n")
    }
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c: char| c != '`').map(str::len).max().unwrap_or(0)
}

/// Inline code whose delimiter outruns any backticks inside it.
fn code_span(text: &str) -> String {
    let ticks = "`".repeat(longest_backtick_run(text) + 1);
    if text.contains('`') {
        format!("{} {} {}", ticks, text, ticks)
    } else {
        format!("{}{}{}", ticks, text, ticks)
    }
}

/// JSON strings are valid YAML scalars, so serde_json does the quoting.
fn yaml_str(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn frontmatter(page: &PageDescriptor<'_>) -> String {
    let meta = page.metadata();
    format!(
        "---\ntopic_key: {}\nlabel: {}\nbadge: {}\ncolor_token: {}\nentries: {}\n---",
        yaml_str(page.topic_key()),
        yaml_str(&meta.label),
        yaml_str(&meta.badge),
        yaml_str(&meta.color_token),
        page.len()
    )
}

fn header(page: &PageDescriptor<'_>, lookup: &dyn ProblemCountLookup) -> String {
    let meta = page.metadata();
    let mut lines = Vec::new();

    let title = if meta.label.is_empty() {
        page.topic_key()
    } else {
        meta.label.as_str()
    };
    if meta.badge.is_empty() {
        lines.push(format!("# {}", title));
    } else {
        lines.push(format!("# {} {}", title, code_span(&meta.badge)));
    }

    for text in [&meta.description, &meta.intro_text] {
        if !text.is_empty() {
            lines.push(String::new());
            lines.push(text.to_string());
        }
    }

    if let Some(tab) = page.tab() {
        let count = lookup.count(tab.problem_category);
        lines.push(String::new());
        lines.push(format!("**Tabs**: Reference · [{}]({})", tab_label(count), tab.base_path));
    }

    if let Some(target) = &meta.cross_reference {
        lines.push(String::new());
        lines.push(format!("**See also**: [{}]({}.md)", target, target));
    }

    lines.join("\n")
}
