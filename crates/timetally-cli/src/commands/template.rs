//! Render-template management commands for CLI.

use clap::Subcommand;
use timetally_core::{render, FileTemplateStore, Session, TemplateStore, DEFAULT_TEMPLATE};

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Print the persisted template
    Get,
    /// Persist a new template
    Set {
        /// Template string with `{{placeholder}}` tokens
        template: String,
    },
    /// Reset to the built-in default
    Reset,
    /// Render the persisted template against time-range text
    Render {
        /// Time-range text; read from stdin when omitted
        text: Option<String>,
        /// Compute the points score before rendering
        #[arg(long)]
        points: bool,
    },
}

pub fn run(action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileTemplateStore::open()?;

    match action {
        TemplateAction::Get => {
            println!("{}", store.load()?);
        }
        TemplateAction::Set { template } => {
            store.save(&template)?;
            println!("Template updated.");
        }
        TemplateAction::Reset => {
            store.save(DEFAULT_TEMPLATE)?;
            println!("Template reset to default:");
            println!("{DEFAULT_TEMPLATE}");
        }
        TemplateAction::Render { text, points } => {
            let template = store.load()?;
            let mut session = Session::new();
            session.parse_text(&super::read_text(text)?);
            if points {
                session.calculate_points();
            }
            let rendered = render(&template, &session.template_vars());
            println!("{}", rendered.output);
            if !rendered.unknown.is_empty() {
                eprintln!("unknown placeholders: {}", rendered.unknown.join(", "));
            }
        }
    }
    Ok(())
}
