//! `relocate`: terminal client for the Relocate Me API
//!
//! Every page is a view from `relocate-client`. Changes go through the same
//! send-then-refetch protocol as any other client, and the page is printed
//! from the refetched state.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use relocate_client::{
    DashboardView, HousingView, HttpApi, JobsView, LocationsView, LogisticsView, ProgressView,
    RelocateApi, ResourcesView, Session, TimelineView, VisaView,
};
use relocate_types::ProgressStatus;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod render;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut session = Session::new();
    if let Some(user) = &cli.user {
        session.login(user)?;
    }
    if cli.command.is_mutation() && !session.is_logged_in() {
        bail!("Log in first: pass --user or set RELOCATE_USER");
    }

    let api: Arc<dyn RelocateApi> = Arc::new(HttpApi::new(cli.api_url.as_str()));
    tracing::debug!("Using API at {}", cli.api_url);

    run(cli.command, api, &session).await
}

async fn run(command: Command, api: Arc<dyn RelocateApi>, session: &Session) -> Result<()> {
    match command {
        Command::Overview => {
            let mut view = DashboardView::new(api);
            ensure(view.load().await, "load the dashboard")?;
            render::overview(&view, session);
        }
        Command::Timeline { category } => {
            let mut view = TimelineView::new(api);
            ensure(view.load().await, "load the timeline")?;
            view.set_category(category);
            render::timeline(&view);
        }
        Command::Complete { step_id, notes } => {
            let mut view = TimelineView::new(api);
            ensure(
                view.set_step(&step_id, true, notes).await,
                &format!("complete step {}", step_id),
            )?;
            render::timeline(&view);
        }
        Command::Undo { step_id } => {
            let mut view = TimelineView::new(api);
            ensure(
                view.set_step(&step_id, false, None).await,
                &format!("reopen step {}", step_id),
            )?;
            render::timeline(&view);
        }
        Command::Progress { status } => {
            let mut view = ProgressView::new(api);
            ensure(view.load().await, "load progress items")?;
            print_progress(&view, status);
        }
        Command::Status { item_id, status } => {
            let mut view = ProgressView::new(api);
            ensure(
                view.set_status(&item_id, status).await,
                &format!("set status of {}", item_id),
            )?;
            print_progress(&view, None);
        }
        Command::Note { item_id, text } => {
            let mut view = ProgressView::new(api);
            ensure(
                view.save_notes(&item_id, text).await,
                &format!("save notes on {}", item_id),
            )?;
            print_progress(&view, None);
        }
        Command::Priority { item_id, priority } => {
            let mut view = ProgressView::new(api);
            ensure(
                view.set_priority(&item_id, priority).await,
                &format!("set priority of {}", item_id),
            )?;
            print_progress(&view, None);
        }
        Command::Subtask { item_id, number } => {
            let index = usize::try_from(number - 1)?;
            let mut view = ProgressView::new(api);
            ensure(
                view.toggle_subtask(&item_id, index).await,
                &format!("toggle subtask {} of {}", number, item_id),
            )?;
            print_progress(&view, None);
        }
        Command::Jobs {
            category,
            job_type,
            search,
            featured,
        } => {
            let mut view = JobsView::new(api);
            ensure(view.load().await, "load job listings")?;
            view.set_category(category);
            view.set_job_type(job_type);
            view.set_search(search);
            if featured {
                render::jobs(&view, view.visible().into_iter().filter(|j| j.featured));
            } else {
                render::jobs(&view, view.visible());
            }
        }
        Command::Opportunities => {
            let mut view = JobsView::new(api);
            ensure(view.load_opportunities().await, "load job opportunities")?;
            render::opportunities(&view);
        }
        Command::Housing => {
            let mut view = HousingView::new(api);
            ensure(view.load().await, "load housing markets")?;
            render::housing(&view);
        }
        Command::Locations => {
            let mut view = LocationsView::new(api);
            ensure(view.load().await, "load locations")?;
            render::locations(&view);
        }
        Command::Visa { slug } => {
            let mut view = VisaView::new(api);
            ensure(view.load().await, "load visa requirements")?;
            match slug {
                Some(slug) => {
                    if !view.select(&slug) {
                        bail!("Unknown visa type '{}'", slug);
                    }
                    render::visa_details(&view);
                }
                None => render::visa_list(&view),
            }
        }
        Command::Resources => {
            let mut view = ResourcesView::new(api);
            ensure(view.load().await, "load resources")?;
            render::resources(&view);
        }
        Command::Logistics => {
            let mut view = LogisticsView::new(api);
            ensure(view.load().await, "load logistics providers")?;
            render::logistics(&view);
        }
    }

    Ok(())
}

fn print_progress(view: &ProgressView, status: Option<ProgressStatus>) {
    match status {
        Some(status) => render::progress(view, view.with_status(status)),
        None => render::progress(view, view.items()),
    }
}

/// The view has already logged the cause; turn it into an exit status
fn ensure(ok: bool, action: &str) -> Result<()> {
    if !ok {
        bail!("Could not {}", action);
    }
    Ok(())
}
