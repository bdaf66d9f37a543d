use anyhow::{anyhow, Result};
use tracing::{info, warn};

use super::wiring::Shapeshift;

/// Captures the clipboard once, reports its control and applicable actions,
/// and performs `action` when given.
#[tracing::instrument(name = "app.run_once", skip(app))]
pub async fn run_once(app: &Shapeshift, action: Option<&str>) -> Result<()> {
    let Some(built) = app.control_packages.create_from_current_clipboard().await? else {
        warn!("Clipboard content not understood, nothing to offer");
        return Ok(());
    };

    let kinds: Vec<&str> = built.package().kinds().map(|kind| kind.as_str()).collect();
    info!(
        kinds = ?kinds,
        control = built.control().map(|c| c.name()).unwrap_or("none"),
        "Clipboard classified"
    );

    let applicable = app.actions.applicable_actions(built.package()).await?;
    for action in &applicable {
        info!(title = action.title(), order = action.order(), "Action available");
    }

    let Some(title) = action else {
        return Ok(());
    };
    let chosen = applicable
        .iter()
        .find(|candidate| candidate.title() == title)
        .ok_or_else(|| anyhow!("action not applicable to clipboard content: {title}"))?;

    chosen.perform(built.package()).await?;
    info!(title, "Action performed");
    Ok(())
}
