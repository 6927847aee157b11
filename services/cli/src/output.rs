use std::fmt::Write as _;
use tracing::error;
use uni_directory::catalog::FilterOptions;
use uni_directory::render::{
    CardView, DisplayFrame, DisplaySurface, ProgramDetailView, ProgramEntryView,
};

/// Prints each frame as plain text on stdout.
pub(crate) struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    fn present(&mut self, frame: DisplayFrame) {
        print!("{}", format_frame(&frame));
    }

    fn open_detail(&mut self, detail: ProgramDetailView) {
        print!("{}", format_detail(&detail));
    }
}

/// Prints each frame as one JSON document on stdout.
pub(crate) struct JsonSurface;

impl DisplaySurface for JsonSurface {
    fn present(&mut self, frame: DisplayFrame) {
        match serde_json::to_string_pretty(&frame) {
            Ok(json) => println!("{json}"),
            Err(err) => error!(error = %err, "failed to serialize frame"),
        }
    }

    fn open_detail(&mut self, detail: ProgramDetailView) {
        match serde_json::to_string_pretty(&detail) {
            Ok(json) => println!("{json}"),
            Err(err) => error!(error = %err, "failed to serialize program detail"),
        }
    }
}

pub(crate) fn format_frame(frame: &DisplayFrame) -> String {
    let mut out = String::new();
    match frame {
        DisplayFrame::Placeholder(placeholder) => {
            writeln!(out, "{}", placeholder.message()).expect("write placeholder");
        }
        DisplayFrame::Cards(cards) => {
            writeln!(out, "{} universities", cards.len()).expect("write count");
            for card in cards {
                write_card(&mut out, card);
            }
        }
    }
    out
}

fn write_card(out: &mut String, card: &CardView) {
    writeln!(out, "\n{} [{}]", card.name, card.institution_id).expect("write card heading");
    writeln!(
        out,
        "  Country: {} | Type: {} | Degrees: {}",
        card.country,
        card.type_label,
        card.degrees_text()
    )
    .expect("write card facts");
    if !card.url.is_empty() {
        writeln!(out, "  {}", card.url).expect("write card url");
    }

    for entry in &card.programs {
        write_program_entry(out, entry);
    }
}

fn write_program_entry(out: &mut String, entry: &ProgramEntryView) {
    if !entry.expanded {
        writeln!(out, "  + {} ({})", entry.name, entry.degree_label).expect("write entry");
        return;
    }

    writeln!(out, "  - {} ({})", entry.name, entry.degree_label).expect("write entry");
    if let Some(duration) = &entry.duration {
        writeln!(out, "      Duration: {duration}").expect("write duration");
    }
    if !entry.language.is_empty() {
        writeln!(out, "      Language: {}", entry.language).expect("write language");
    }
    if !entry.tuition.is_empty() {
        writeln!(out, "      Tuition: {}", entry.tuition).expect("write tuition");
    }
}

pub(crate) fn format_detail(detail: &ProgramDetailView) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} ({}) at {}",
        detail.name, detail.degree_label, detail.institution_name
    )
    .expect("write detail heading");

    let rows = [
        ("Overview", Some(detail.overview.as_str())),
        ("Duration", detail.duration.as_deref()),
        ("Language", Some(detail.language.as_str())),
        ("Admission", Some(detail.admission_requirements.as_str())),
        ("Tuition", Some(detail.tuition.as_str())),
        ("Website", Some(detail.institution_url.as_str())),
    ];
    for (label, value) in rows {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            writeln!(out, "  {label}: {value}").expect("write detail row");
        }
    }
    out
}

pub(crate) fn format_options(options: &FilterOptions) -> String {
    let mut out = String::new();
    let sections = [
        ("Countries", &options.countries),
        ("Types", &options.types),
        ("Degrees", &options.degrees),
    ];
    for (title, entries) in sections {
        writeln!(out, "{title}").expect("write options title");
        for entry in entries {
            writeln!(out, "- {} ({})", entry.value, entry.label).expect("write option");
        }
    }

    writeln!(out, "Types by country").expect("write grouping title");
    for (country, kinds) in &options.types_by_country {
        writeln!(out, "- {}: {}", country, kinds.join(", ")).expect("write grouping");
    }
    out
}
