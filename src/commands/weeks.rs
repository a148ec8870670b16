//! Terminal listing of a user's stored weeks.
//!
//! The command-line counterpart of `GET /api/timesheets`: looks a user up
//! by email and prints their weeks newest-first as a table.

use crate::db::timesheets::Timesheets;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct WeeksArgs {
    /// Email of the user whose weeks to list
    #[arg(short, long)]
    email: String,
}

pub fn cmd(args: WeeksArgs) -> Result<()> {
    let user = match Users::new()?.fetch_by_email(&args.email)? {
        Some(user) => user,
        None => {
            msg_error!(Message::UserNotFoundByEmail(args.email));
            return Ok(());
        }
    };

    let weeks = Timesheets::new()?.fetch_all(user.id)?;
    if weeks.is_empty() {
        msg_info!(Message::NoWeeksFound(args.email));
        return Ok(());
    }

    msg_print!(Message::WeeksHeader(args.email), true);

    let mut table = Table::new();
    table.add_row(row!["WEEK START", "TOTAL", "CREATED", "UPDATED"]);
    for week in &weeks {
        table.add_row(row![week.week_start, week.weekly_total, week.created_at, week.updated_at]);
    }
    table.printstd();

    Ok(())
}
