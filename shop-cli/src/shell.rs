//! Interactive storefront session over a line-oriented reader and writer.

use std::io::{self, BufRead, Write};

use shop_core::CartIntent;
use tracing::{info, warn};

use crate::commands::{Command, HELP, parse_command};
use crate::logging;
use crate::render;
use crate::state::AppState;

const PROMPT: &str = "> ";

/// Outcome of one input line.
enum Step {
    Continue,
    Quit,
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Every error caused by user input is written to `output` and the session
/// carries on with its state unchanged. Only I/O errors end the session.
pub fn run<R: BufRead, W: Write>(
    app: &mut AppState,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", render::header(&app.totals()))?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            if let Step::Quit = execute(app, &line, output)? {
                break;
            }
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn execute<W: Write>(
    app: &mut AppState,
    line: &str,
    output: &mut W,
) -> io::Result<Step> {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(e) => {
            writeln!(output, "error: {e}")?;
            return Ok(Step::Continue);
        }
    };

    match command {
        Command::Cart(CartIntent::Checkout) => {
            // Clears the cart even when it only holds stale entries.
            let placed = app.checkout();
            if placed.total_items == 0 {
                writeln!(output, "{}", render::EMPTY_CART)?;
            } else {
                info!(
                    items = placed.total_items,
                    total = %placed.total_price,
                    "order placed"
                );
                writeln!(output, "{}", render::CHECKOUT_ACK)?;
            }
            writeln!(output, "{}", render::header(&app.totals()))?;
        }
        Command::Cart(intent) => match app.dispatch(&intent) {
            Ok(()) => {
                if matches!(intent, CartIntent::ShowCart) {
                    write!(output, "{}", render::cart_view(app))?;
                } else if matches!(intent, CartIntent::SelectCategory(_)) {
                    write!(output, "{}", render::catalog_view(app))?;
                }
                writeln!(output, "{}", render::header(&app.totals()))?;
                if let Some(banner) = render::summary(app) {
                    writeln!(output, "{banner}")?;
                }
            }
            Err(e) => writeln!(output, "error: {e}")?,
        },
        Command::List => write!(output, "{}", render::catalog_view(app))?,
        Command::SetLogLevel(level) => match logging::set_log_level(&level) {
            Ok(()) => writeln!(output, "log level set to {level}")?,
            Err(e) => {
                warn!("{e:#}");
                writeln!(output, "error: {e}")?;
            }
        },
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => return Ok(Step::Quit),
    }

    Ok(Step::Continue)
}
