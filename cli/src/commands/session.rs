use std::io;

use colored::*;
use kasir_common::config::Config;
use kasir_common::confirmation::{ConfirmationChannel, FixedAnswer};
use kasir_core::{CheckOutcome, PricedSummary, Transaction};
use tracing::{error, info_span};

use crate::commands::{Action, Line};
use crate::mprint;
use crate::terminal::{colors, format, print, prompt::StdinConfirmation};

enum Flow {
    Continue,
    Quit,
}

/// Runs the cashier prompt until `quit` or end of input.
pub fn run(cfg: &Config) -> anyhow::Result<()> {
    let channel: Box<dyn ConfirmationChannel> = if cfg.assume_yes {
        Box::new(FixedAnswer::yes())
    } else {
        Box::new(StdinConfirmation)
    };
    let mut transaction = Transaction::new(channel);

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print::prompt()?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let action = match Line::parse_words(words) {
            Ok(action) => action,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        let span = info_span!("command", ?action);
        let _guard = span.enter();

        match execute(&mut transaction, action, cfg) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => error!("{err}"),
        }
    }

    print::end_of_program();
    Ok(())
}

fn execute(tx: &mut Transaction, action: Action, cfg: &Config) -> kasir_common::Result<Flow> {
    match action {
        Action::Add { name, quantity, price } => format::print_table(&tx.add_item(&name, quantity, price)?),
        Action::Rename { name, new_name } => format::print_table(&tx.update_item_name(&name, &new_name)?),
        Action::Qty { name, quantity } => format::print_table(&tx.update_item_qty(&name, quantity)?),
        Action::Price { name, price } => format::print_table(&tx.update_item_price(&name, price)?),
        Action::Delete { name } => format::print_table(&tx.delete_item(&name)?),
        Action::View => format::print_table(&tx.view()),
        Action::Reset => print::print_status(tx.reset_transaction()),
        Action::Check => match tx.check_order()? {
            CheckOutcome::Confirmed(table) => {
                print::header("order confirmed", cfg.quiet);
                format::print_table(&table);
            }
            CheckOutcome::Declined => mprint!(),
        },
        Action::Total => print_total(&tx.get_total_price()?, cfg),
        Action::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_total(summary: &PricedSummary, cfg: &Config) {
    let message: String = summary.to_string();

    if cfg.quiet > 1 {
        print::print(&message);
        return;
    }

    print::header("payment", cfg.quiet);
    print::aligned_line("Subtotal", format!("{}", summary.subtotal));
    print::aligned_line("Discount", format!("{}%", summary.tier.percent()));
    print::fat_separator();
    print::centerln(&message.color(colors::MONEY).bold().to_string());
}
