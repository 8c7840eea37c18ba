//! Main tally command: parse, total, score, render, copy.

use clap::Args;
use serde::Serialize;

use timetally_core::template::{format_compact, format_points};
use timetally_core::{
    points, render, FileTemplateStore, Session, TemplateStore, TimeRangeEntry, TotalDuration,
    DEFAULT_TEMPLATE,
};

use super::format::ModeArg;
use crate::clipboard;

#[derive(Args)]
pub struct CalcArgs {
    /// Time-range text, one `hh:mm - hh:mm` per line; read from stdin when omitted
    #[arg(allow_hyphen_values = true)]
    pub text: Option<String>,
    /// Clean the text up first with the given mode
    #[arg(long, value_enum)]
    pub format: Option<ModeArg>,
    /// Compute the points score for the total
    #[arg(long)]
    pub points: bool,
    /// Render the persisted template against the result
    #[arg(long)]
    pub render: bool,
    /// Copy the rendered line (or the total summary) to the clipboard
    #[arg(long)]
    pub copy: bool,
    /// Emit the result as JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    entries: &'a [TimeRangeEntry],
    total: TotalDuration,
    total_minutes: u32,
    valid_count: usize,
    points: Option<f64>,
    rendered: Option<String>,
    unknown_placeholders: Vec<String>,
}

pub fn run(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut text = super::read_text(args.text)?;
    if let Some(mode) = args.format {
        text = timetally_core::normalize(&text, mode.to_mode());
    }

    let mut session = Session::new();
    session.parse_text(&text);
    if args.points {
        session.calculate_points();
    }

    let total = session.total();
    let rendered = if args.render {
        // Template persistence is best-effort; fall back to the default.
        let template = FileTemplateStore::open()
            .and_then(|store| store.load())
            .unwrap_or_else(|_| DEFAULT_TEMPLATE.to_string());
        Some(render(&template, &session.template_vars()))
    } else {
        None
    };

    if args.json {
        let output = CalcOutput {
            entries: session.entries(),
            total,
            total_minutes: total.total_minutes(),
            valid_count: session.valid_count(),
            points: session.points(),
            rendered: rendered.as_ref().map(|r| r.output.clone()),
            unknown_placeholders: rendered.as_ref().map(|r| r.unknown.clone()).unwrap_or_default(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_entries(&session);
        println!(
            "Total: {} ({} valid ranges, {} minutes)",
            format_compact(total.hours, total.minutes),
            session.valid_count(),
            total.total_minutes()
        );
        if args.points {
            print_points(&session, total.total_minutes());
        }
        if let Some(r) = &rendered {
            println!("{}", r.output);
            if !r.unknown.is_empty() {
                eprintln!("unknown placeholders: {}", r.unknown.join(", "));
            }
        }
    }

    if args.copy {
        let text = match &rendered {
            Some(r) => r.output.clone(),
            None => format_compact(total.hours, total.minutes),
        };
        clipboard::copy_or_print(&text);
    }

    Ok(())
}

fn print_entries(session: &Session) {
    for (i, entry) in session.entries().iter().enumerate() {
        if entry.is_valid {
            println!(
                "#{} {}  {} → {}  {}",
                i + 1,
                entry.raw_input,
                entry.start_label,
                entry.end_label,
                format_compact(entry.hours, entry.minutes)
            );
        } else {
            let message = entry.error.map(|e| e.message()).unwrap_or_default();
            println!("#{} {}  {}", i + 1, entry.raw_input, message);
        }
    }
}

fn print_points(session: &Session, total_minutes: u32) {
    match session.points() {
        Some(score) => {
            println!("Points: {}", format_points(score));
            if let Some(breakdown) = points::breakdown(total_minutes) {
                for term in &breakdown.terms {
                    println!(
                        "  {:<8} {:>3}min  {}",
                        term.name,
                        term.minutes,
                        format_points(term.points)
                    );
                }
            }
        }
        None => println!("Points: (no tracked time)"),
    }
}
