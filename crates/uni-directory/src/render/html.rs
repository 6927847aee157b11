use std::fmt::Write as _;

use super::surface::{DisplayFrame, DisplaySurface, Placeholder};
use super::views::{CardView, ProgramDetailView, ProgramEntryView};

/// Renders frames as HTML fragments for the `universityList` container.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    list_html: String,
    modal_html: Option<String>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_html(&self) -> &str {
        &self.list_html
    }

    pub fn modal_html(&self) -> Option<&str> {
        self.modal_html.as_deref()
    }
}

impl DisplaySurface for HtmlSurface {
    fn present(&mut self, frame: DisplayFrame) {
        self.list_html = match frame {
            DisplayFrame::Cards(cards) => {
                let mut html = String::new();
                for card in &cards {
                    render_card_html(&mut html, card);
                }
                html
            }
            DisplayFrame::Placeholder(placeholder) => render_placeholder_html(placeholder),
        };
    }

    fn open_detail(&mut self, detail: ProgramDetailView) {
        self.modal_html = Some(render_detail_html(&detail));
    }
}

fn render_placeholder_html(placeholder: Placeholder) -> String {
    let class = match placeholder {
        Placeholder::LoadFailed => "error-message",
        Placeholder::NoResults => "no-results-message",
    };
    format!(
        "<p class=\"{class}\">{}</p>",
        escape_html(placeholder.message())
    )
}

fn render_card_html(html: &mut String, card: &CardView) {
    writeln!(
        html,
        "<div class=\"university-card\" data-id=\"{}\">",
        escape_html(&card.institution_id)
    )
    .expect("write card open");
    writeln!(
        html,
        "<a href=\"{}\" class=\"university-card-link\">",
        escape_html(&card.url)
    )
    .expect("write card link");
    writeln!(
        html,
        "<div class=\"uni-logo-wrapper\"><img src=\"{}\" alt=\"{} Logo\"></div>",
        escape_html(&card.logo),
        escape_html(&card.name)
    )
    .expect("write logo");
    writeln!(html, "<h3>{}</h3>", escape_html(&card.name)).expect("write name");
    writeln!(
        html,
        "<p class=\"uni-info\"><strong>Country:</strong> {}</p>",
        escape_html(&card.country)
    )
    .expect("write country");
    writeln!(
        html,
        "<p class=\"uni-info\"><strong>Type:</strong> {}</p>",
        escape_html(&card.type_label)
    )
    .expect("write type");
    writeln!(
        html,
        "<p class=\"uni-info\"><strong>Degrees:</strong> {}</p>",
        escape_html(&card.degrees_text())
    )
    .expect("write degrees");
    html.push_str("</a>\n");

    if !card.programs.is_empty() {
        html.push_str("<div class=\"program-list\">\n");
        for entry in &card.programs {
            render_program_entry_html(html, entry);
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
}

fn render_program_entry_html(html: &mut String, entry: &ProgramEntryView) {
    let open = if entry.expanded { " open" } else { "" };
    writeln!(
        html,
        "<details class=\"program-entry\"{open} data-program=\"{}\">",
        escape_html(&entry.key.program_name)
    )
    .expect("write entry open");
    writeln!(
        html,
        "<summary>{} <span class=\"degree-badge\">{}</span></summary>",
        escape_html(&entry.name),
        escape_html(&entry.degree_label)
    )
    .expect("write entry summary");
    if let Some(duration) = &entry.duration {
        writeln!(
            html,
            "<p><strong>Duration:</strong> {}</p>",
            escape_html(duration)
        )
        .expect("write duration");
    }
    if !entry.language.is_empty() {
        writeln!(
            html,
            "<p><strong>Language:</strong> {}</p>",
            escape_html(&entry.language)
        )
        .expect("write language");
    }
    if !entry.tuition.is_empty() {
        writeln!(
            html,
            "<p><strong>Tuition:</strong> {}</p>",
            escape_html(&entry.tuition)
        )
        .expect("write tuition");
    }
    html.push_str("</details>\n");
}

fn render_detail_html(detail: &ProgramDetailView) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"program-modal\">\n");
    writeln!(
        html,
        "<h2>{} <small>{}</small></h2>",
        escape_html(&detail.name),
        escape_html(&detail.degree_label)
    )
    .expect("write modal heading");
    writeln!(
        html,
        "<p><a href=\"{}\">{}</a></p>",
        escape_html(&detail.institution_url),
        escape_html(&detail.institution_name)
    )
    .expect("write modal institution");

    let rows = [
        ("Overview", Some(detail.overview.as_str())),
        ("Duration", detail.duration.as_deref()),
        ("Language", Some(detail.language.as_str())),
        ("Admission requirements", Some(detail.admission_requirements.as_str())),
        ("Tuition", Some(detail.tuition.as_str())),
    ];
    for (label, value) in rows {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            writeln!(
                html,
                "<p><strong>{label}:</strong> {}</p>",
                escape_html(value)
            )
            .expect("write modal row");
        }
    }
    html.push_str("</div>\n");
    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
