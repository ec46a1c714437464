//! Non-interactive history commands: print and clear the stored
//! conversation.

use console::style;
use dialoguer::Confirm;
use majlis_types::chat::MessageRole;

use crate::state::AppState;

/// Print the stored conversation to stdout.
pub fn show_history(state: &AppState) {
    let messages = state.session.messages();
    if messages.is_empty() {
        println!("  {}", style("No conversation yet.").dim());
        return;
    }

    println!();
    for msg in &messages {
        let timestamp = msg.timestamp.format("%Y-%m-%d %H:%M");
        let role_label = match msg.role {
            MessageRole::System => style("System").yellow(),
            MessageRole::User => style("You").green(),
            MessageRole::Assistant => style("Assistant").cyan(),
        };
        println!(
            "  {} {}",
            style(timestamp).dim(),
            style(role_label).bold()
        );
        println!("  {}", msg.content);
        println!();
    }
}

/// Delete the stored conversation, prompting for confirmation unless
/// `yes` is set.
pub async fn clear_history(state: &AppState, yes: bool) -> anyhow::Result<()> {
    if state.session.messages().is_empty() {
        println!("  {}", style("No conversation to clear.").dim());
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete the stored conversation?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  {}", style("Cancelled.").dim());
            return Ok(());
        }
    }

    state.session.clear().await;
    println!("  {} Conversation cleared.", style("\u{2713}").green().bold());
    Ok(())
}
