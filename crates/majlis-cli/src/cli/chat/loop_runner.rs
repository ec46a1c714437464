//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: welcome message injection,
//! history replay, the input loop with slash commands, optimistic sends
//! through the session store, and rendering of assistant replies.

use console::style;
use majlis_types::chat::{ChatMessage, MessageRole};

use crate::state::AppState;

use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// System message injected when a conversation starts from scratch.
const WELCOME_MESSAGE: &str = "Welcome! I'm here to help you celebrate National Day. \
Ask me anything about the festivities, history, or traditions!";

/// System message injected after the user clears the conversation mid-session.
const WELCOME_BACK_MESSAGE: &str = "Conversation cleared. \
Ask me anything about the festivities, history, or traditions!";

/// Print the session banner at the start of a chat.
fn print_banner(state: &AppState) {
    println!();
    println!("  {}", style("majlis").cyan().bold());
    println!(
        "  {}  {}",
        style("Assistant:").bold(),
        style(&state.config.api_endpoint).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print a single message with a role-styled label.
fn print_message(renderer: &ChatRenderer, msg: &ChatMessage) {
    match msg.role {
        MessageRole::System => {
            println!("  {}", style(&msg.content).italic().dim());
        }
        MessageRole::User => {
            println!("  {} {}", style("You >").green().bold(), msg.content);
        }
        MessageRole::Assistant => {
            let rendered = renderer.render(&msg.content);
            println!("  {} {}", style("Assistant >").cyan().bold(), rendered.trim());
        }
    }
}

/// Replay the stored conversation.
fn replay_history(state: &AppState, renderer: &ChatRenderer) {
    let messages = state.session.messages();
    if messages.is_empty() {
        println!("\n  {}\n", style("No conversation yet.").dim());
        return;
    }
    println!();
    for msg in &messages {
        print_message(renderer, msg);
    }
    println!();
}

fn make_spinner() -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let renderer = ChatRenderer::new();

    // Fresh conversations get a welcome message up front
    if state.session.messages().is_empty() {
        state.session.add_system_message(WELCOME_MESSAGE).await;
    }

    print_banner(state);
    replay_history(state, &renderer);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                        }
                        ChatCommand::History => {
                            replay_history(state, &renderer);
                        }
                        ChatCommand::Clear => {
                            state.session.clear().await;
                            state.session.add_system_message(WELCOME_BACK_MESSAGE).await;
                            println!(
                                "\n  {} {}\n",
                                style("*").cyan().bold(),
                                style("Conversation cleared.").dim()
                            );
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                        }
                    }
                    continue;
                }

                // Send through the session store
                let spinner = make_spinner();
                let result = state.session.send(&text).await;
                spinner.finish_and_clear();

                match result {
                    Ok(()) => {
                        // The reply is the last assistant message in the conversation
                        let messages = state.session.messages();
                        if let Some(reply) = messages
                            .iter()
                            .rev()
                            .find(|m| m.role == MessageRole::Assistant)
                        {
                            let rendered = renderer.render(&reply.content);
                            println!(
                                "\n  {} {}\n",
                                style("Assistant >").cyan().bold(),
                                rendered.trim()
                            );
                        }
                    }
                    Err(e) => {
                        eprintln!("\n  {} {e}", style("!").red().bold());
                        eprintln!(
                            "  {}\n",
                            style("Type a message to retry, /exit to quit.").dim()
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
