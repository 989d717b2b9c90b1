use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::Session;
use crate::cli::parser::{Cli, Commands};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::time;

/// Run commands read from stdin against one session, so records added
/// during the session stay visible until it ends.
pub async fn handle(session: &mut Session) -> AppResult<()> {
    header("rTimeclock shell");
    info("Interactive session. Type `help` for commands, `exit` to quit.");
    session.ensure_employees().await;
    session.ensure_events().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("[{}] rtimeclock> ", time::clock_display());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let tokens = match split_args(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                session.controller.notices_mut().show_error(e.to_string());
                continue;
            }
        };

        match tokens.first().map(String::as_str) {
            None => continue,
            Some("exit" | "quit") => break,
            _ => {}
        }

        let cli = match Cli::try_parse_from(std::iter::once("rtimeclock".to_string()).chain(tokens)) {
            Ok(cli) => cli,
            Err(e) => {
                e.print()?;
                continue;
            }
        };

        if cli.command == Commands::Shell {
            warning("Already inside a shell");
            continue;
        }

        if let Err(e) = crate::dispatch(&cli.command, session).await {
            session.controller.notices_mut().show_error(e.to_string());
        }
    }

    success("Session closed");
    Ok(())
}

/// Split a command line on whitespace, honouring single and double quotes.
pub fn split_args(line: &str) -> AppResult<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(AppError::Command(format!("unterminated {q} quote")));
    }
    if in_token {
        args.push(current);
    }
    Ok(args)
}
