use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use shared::domain::Identifier;
use tracing::info;
use tracing_subscriber::EnvFilter;
use widget::{
    view::Panel, AjaxPatch, Command, CommandOutput, ConfigPatch, UserAction, View, WidgetRegistry,
};

mod config;

use config::load_config;

/// Loads a multi select from its endpoints, applies clicks and prints the result.
#[derive(Parser, Debug)]
struct Args {
    /// TOML file with widget options; `oms.toml` is used when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    available_url: Option<String>,
    #[arg(long)]
    selected_url: Option<String>,
    #[arg(long)]
    method: Option<String>,
    /// Identifier to click after loading. JSON numbers are numeric ids.
    #[arg(long = "click", value_name = "ID")]
    clicks: Vec<String>,
    #[arg(long, conflicts_with = "unselect_all")]
    select_all: bool,
    #[arg(long)]
    unselect_all: bool,
    /// Restore the loaded selection after the clicks.
    #[arg(long)]
    reset: bool,
    /// Print the rendered view as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn overrides(&self) -> ConfigPatch {
        let ajax = AjaxPatch {
            available_url: self.available_url.clone(),
            selected_url: self.selected_url.clone(),
            method: self.method.clone(),
        };
        ConfigPatch {
            name: self.name.clone(),
            ajax: (ajax != AjaxPatch::default()).then_some(Some(ajax)),
            ..ConfigPatch::default()
        }
    }

    fn actions(&self) -> Vec<UserAction> {
        let mut actions: Vec<UserAction> = self
            .clicks
            .iter()
            .map(|raw| UserAction::Click(parse_identifier(raw)))
            .collect();
        if self.select_all {
            actions.push(UserAction::SelectAll);
        }
        if self.unselect_all {
            actions.push(UserAction::UnselectAll);
        }
        if self.reset {
            actions.push(UserAction::ResetSelection);
        }
        actions
    }
}

fn parse_identifier(raw: &str) -> Identifier {
    serde_json::from_str(raw).unwrap_or_else(|_| Identifier::from(raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref(), args.overrides())?;
    let mut registry = WidgetRegistry::default();
    let (id, outcome) = registry.create_and_load(config).await;
    if let Some(outcome) = outcome {
        if let Err(err) = outcome.available {
            return Err(err).context("failed to load available items");
        }
        if let Err(err) = outcome.selected {
            return Err(err).context("failed to load selected items");
        }
    }

    for action in args.actions() {
        if let Some(CommandOutput::ActionApplied(false)) =
            registry.execute(id, Command::Action(action.clone())).await
        {
            info!(?action, "action ignored; identifier is not on screen");
        }
    }

    let Some(widget) = registry.get(id) else {
        bail!("widget {id} disappeared");
    };
    let Some(view) = widget.view() else {
        bail!("widget {id} has no view");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", format_view(view));
    }
    Ok(())
}

fn format_view(view: &View) -> String {
    let mut out = String::new();
    format_panel(&mut out, &view.available);
    format_panel(&mut out, &view.selected);
    out.push_str(&format!("{} = {}\n", view.value_field.name, view.value_field.value));
    out
}

fn format_panel(out: &mut String, panel: &Panel) {
    out.push_str(&panel.header);
    out.push('\n');
    if panel.items.is_empty() {
        out.push_str("  (none)\n");
    }
    for item in &panel.items {
        out.push_str(&format!("  [{}] {}\n", item.value, item.text));
    }
}
