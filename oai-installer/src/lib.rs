use anyhow::{bail, Context};
use clap::Parser;
use oai_core::cli::{Cli, Command};
use oai_core::links::{addon_links, load_links, AddonLink};
use oai_core::state_manager::{load_state, save_state_atomic};
use oai_core::validation::validate_addon_path;
use oai_error::OaiError;
use oai_hal::{BrowserOps, DesktopHal, FileRef, SelectionResult};
use oai_tui::addons::{self, AddonsView, InputResult};
use oai_workflow::{AddonSelectionController, SharedWorkflowState};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    oai_core::logging::init_with(cli.log_file.clone());

    let links = link_list(cli.links.as_deref())?;
    let state = load_state(&cli.state)?.unwrap_or_default();
    let state = SharedWorkflowState::new(state);

    if cli.dump_tui {
        let view = AddonsView::new(state, || {}, Arc::new(DesktopHal::new()), links);
        println!("{}", addons::dump_step(&view));
        return Ok(());
    }

    match &cli.command {
        // No subcommand = launch the addon step in the TUI
        None => {
            log::info!("Launching addon step UI...");
            run_tui(&cli.state, state, links)?;
        }
        // CLI addon mode (for scripting)
        Some(Command::Addons { addons }) => {
            record_addons(&cli.state, state, addons)?;
        }
        Some(Command::Status) => {
            let paths = state.addon_paths();
            if paths.is_empty() {
                println!("No addons recorded.");
            }
            for path in paths {
                println!("{}", path);
            }
        }
        Some(Command::Links { open }) => match open.as_deref() {
            Some(id) => open_link(&links, id)?,
            None => {
                for link in &links {
                    println!("{}\t{}\t{}", link.id, link.label, link.url);
                }
            }
        },
    }
    Ok(())
}

fn link_list(path: Option<&Path>) -> anyhow::Result<Vec<AddonLink>> {
    let index = match path {
        Some(path) => load_links(path)?,
        None => addon_links()?.clone(),
    };
    Ok(index.links)
}

fn run_tui(
    state_path: &Path,
    state: SharedWorkflowState,
    links: Vec<AddonLink>,
) -> anyhow::Result<()> {
    let on_confirm = || log::info!("Addon step complete; continuing with the workflow");
    let mut view = AddonsView::new(
        state.clone(),
        on_confirm,
        Arc::new(DesktopHal::new()),
        links,
    );

    match addons::run(&mut view)? {
        InputResult::Confirmed => {
            save_state_atomic(state_path, &state.snapshot())?;
            println!("{}", view.controller().display_label());
            println!("Workflow state saved to {}", state_path.display());
        }
        _ => log::info!("Addon step closed without confirming; state left unchanged"),
    }
    Ok(())
}

fn record_addons(
    state_path: &Path,
    state: SharedWorkflowState,
    addons: &[PathBuf],
) -> anyhow::Result<()> {
    for path in addons {
        validate_addon_path(path)?;
    }

    let result = if addons.is_empty() {
        SelectionResult::Cancelled
    } else {
        SelectionResult::Selected(addons.iter().map(|path| FileRef::from_path(path)).collect())
    };

    let mut controller = AddonSelectionController::new(state.clone());
    let outcome = controller.on_selection_result(result);
    log::info!("Scripted addon selection: {:?}", outcome);

    save_state_atomic(state_path, &state.snapshot())
        .with_context(|| format!("Failed to record addons in {}", state_path.display()))?;
    println!("{}", controller.display_label());
    Ok(())
}

fn open_link(links: &[AddonLink], id: &str) -> anyhow::Result<()> {
    let Some(link) = links.iter().find(|link| link.id == id) else {
        let known = links
            .iter()
            .map(|link| link.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("Unknown addon link '{}' (known: {})", id, known);
    };

    DesktopHal::new()
        .open_external(&link.url)
        .map_err(OaiError::from)?;
    println!("Opened {}", link.url);
    Ok(())
}
