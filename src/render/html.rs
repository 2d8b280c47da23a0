use std::fmt::Write as _;

use tracing::debug;

use crate::error::{PageError, PageResult};
use crate::render::assets::{GLUE_JS, INLINE_CSS};
use crate::render::{AccordionSection, PageFrame, Renderer, ScenarioCard, TableOutcome};
use crate::table::RenderedTable;

/// Element id of the container receiving the dataset table.
pub const TABLE_CONTAINER_ID: &str = "data-table-container";
/// Element id of the chart canvas.
pub const CHART_CANVAS_ID: &str = "expenditureChart";
/// Accordion id of the section that wraps the dataset table.
pub const TABLE_SECTION_ID: &str = "accordion";

/// Escapes text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// `<table class="data-table">` markup; every cell is escaped here.
#[must_use]
pub fn table_markup(table: &RenderedTable) -> String {
    let mut out = String::with_capacity(256 + table.row_count() * 256);
    out.push_str("<table class=\"data-table\"><thead><tr>");
    for header in &table.headers {
        let _ = write!(out, "<th>{}</th>", escape_html(header));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            let class = if cell.is_numeric { "number" } else { "" };
            let _ = write!(
                out,
                "<td class=\"{class}\">{}</td>",
                escape_html(&cell.display_text)
            );
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// Inline panel shown in place of the table when it cannot be produced.
#[must_use]
pub fn error_panel_markup(message: &str) -> String {
    format!(
        "<div class=\"error-panel\" style=\"padding: 2rem; background-color: #fee; border: 1px solid #fcc; border-radius: 4px;\">\
<p style=\"color: #c33; margin: 0;\"><strong>Virhe:</strong> {}</p></div>",
        escape_html(message)
    )
}

#[must_use]
pub fn table_outcome_markup(outcome: &TableOutcome) -> String {
    match outcome {
        TableOutcome::Rendered(table) => table_markup(table),
        TableOutcome::Failed { message } => error_panel_markup(message),
    }
}

/// Collapsed section whose toggle is wired by the glue script through
/// `data-accordion`. `inner_html` must already be escaped.
#[must_use]
pub fn accordion_markup(id: &str, title: &str, inner_html: &str) -> String {
    let id = escape_html(id);
    format!(
        "<section class=\"accordion\"><button type=\"button\" class=\"accordion-header\" data-accordion=\"{id}\">\
<span>{}</span><span id=\"{id}-icon\">▼</span></button>\
<div class=\"accordion-content\" id=\"{id}-content\">{inner_html}</div></section>",
        escape_html(title)
    )
}

fn section_markup(section: &AccordionSection) -> String {
    let body: String = section
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect();
    accordion_markup(&section.id, &section.title, &body)
}

fn card_markup(card: &ScenarioCard) -> String {
    format!(
        "<article class=\"scenario-card\" style=\"--scenario-color: {};\"><h3>{}</h3><p>{}</p></article>",
        escape_html(&card.color),
        escape_html(&card.title),
        escape_html(&card.headline)
    )
}

/// Writes complete, self-contained HTML documents.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    document: String,
}

impl HtmlRenderer {
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, frame: &PageFrame) -> PageResult<()> {
        frame.validate()?;

        let chart_json = frame.chart.to_embedded_json()?;
        let cards: String = frame.scenario_cards.iter().map(card_markup).collect();
        let sections: String = frame.sections.iter().map(section_markup).collect();
        let table_section = accordion_markup(
            TABLE_SECTION_ID,
            &frame.table_title,
            &format!(
                "<div id=\"{TABLE_CONTAINER_ID}\">{}</div>",
                table_outcome_markup(&frame.table)
            ),
        );

        let mut out = String::with_capacity(32 * 1024);
        write!(
            out,
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<main class="container">
<header><h1>{title}</h1><p class="lead">{lead}</p></header>
<div class="chart-wrapper"><canvas id="{canvas}"></canvas></div>
<div class="scenario-grid">{cards}</div>
{table_section}
{sections}
</main>
<script type="application/json" id="expenditure-chart-config">{chart_json}</script>
<script src="{chart_src}"></script>
<script>{js}</script>
</body>
</html>
"#,
            lang = escape_html(&frame.lang),
            title = escape_html(&frame.title),
            css = INLINE_CSS,
            lead = escape_html(&frame.lead),
            canvas = CHART_CANVAS_ID,
            chart_src = escape_html(&frame.chart_script_url),
            js = GLUE_JS,
        )
        .map_err(|e| PageError::Serialization(format!("failed to write html document: {e}")))?;

        debug!(bytes = out.len(), "rendered html document");
        self.document = out;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{FormattedCell, RenderedTable};
    use smallvec::smallvec;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("Työeläkeindeksi (TyEL)*"), "Työeläkeindeksi (TyEL)*");
    }

    #[test]
    fn table_markup_marks_numeric_cells() {
        let table = RenderedTable {
            headers: vec!["Momentti".to_owned(), "Arvo <€>".to_owned()],
            rows: vec![smallvec![
                FormattedCell::text("28.50.15"),
                FormattedCell::numeric("5\u{a0}622\u{a0}854\u{a0}000"),
            ]],
        };
        assert_eq!(
            table_markup(&table),
            "<table class=\"data-table\"><thead><tr><th>Momentti</th><th>Arvo &lt;€&gt;</th></tr></thead>\
<tbody><tr><td class=\"\">28.50.15</td><td class=\"number\">5\u{a0}622\u{a0}854\u{a0}000</td></tr></tbody></table>"
        );
    }

    #[test]
    fn error_panel_escapes_message() {
        let html = error_panel_markup("<b>");
        assert!(html.contains("<strong>Virhe:</strong> &lt;b&gt;"));
    }

    #[test]
    fn accordion_ids_drive_content_and_icon() {
        let html = accordion_markup("methodology", "Menetelmä", "<p>x</p>");
        assert!(html.contains("data-accordion=\"methodology\""));
        assert!(html.contains("id=\"methodology-content\""));
        assert!(html.contains("id=\"methodology-icon\""));
        assert!(html.contains("<p>x</p>"));
    }
}
