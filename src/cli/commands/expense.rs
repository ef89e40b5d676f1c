use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::currency::{ExpenseConverter, HttpRateSource, RateConverter};
use crate::domain::ExpenseFields;

use super::{parse_id, CommandDefinition};

const ADD_USAGE: &str = "add <description> <amount> <category> [YYYY-MM-DD]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("add", "Record a new expense", ADD_USAGE, cmd_add),
        CommandDefinition::new("show", "Show one expense", "show <id>", cmd_show),
        CommandDefinition::new("list", "List expenses in insertion order", "list", cmd_list),
        CommandDefinition::new("total", "Sum of all recorded expenses", "total", cmd_total),
        CommandDefinition::new("tier", "Classify an expense by cost", "tier <id>", cmd_tier),
        CommandDefinition::new(
            "convert",
            "Convert an expense with the configured exchange rate",
            "convert <id>",
            cmd_convert,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [description, amount, category, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(format!("Usage: {ADD_USAGE}")));
    };
    if rest.len() > 1 {
        return Err(CommandError::InvalidArguments(format!("Usage: {ADD_USAGE}")));
    }
    let amount = Decimal::from_str(amount).map_err(|_| {
        CommandError::InvalidArguments(format!("`{amount}` is not a decimal amount"))
    })?;
    let date = match rest.first() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a YYYY-MM-DD date"))
        })?,
        None => Local::now().date_naive(),
    };

    let fields = ExpenseFields::new(*description, amount, *category, date);
    let expense = context.manager().add_expense(fields)?;
    io::print_success(format!("Expense #{} recorded.", expense.id()));
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = parse_id(args, "show <id>")?;
    match context.manager().get_expense(id) {
        Some(expense) => {
            output_section(format!("Expense #{}", expense.id()));
            io::print_info(format!("  Description: {}", expense.description()));
            io::print_info(format!("  Amount     : {}", expense.amount()));
            io::print_info(format!("  Category   : {}", expense.category()));
            io::print_info(format!("  Date       : {}", expense.date()));
        }
        None => io::print_warning(format!("Expense #{id} not found.")),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let expenses = context.manager().list_expenses();
    if expenses.is_empty() {
        io::print_info("No expenses recorded.");
        return Ok(());
    }
    output_section("Expenses");
    for expense in &expenses {
        io::print_info(format!(
            "  {:>4}  {}  {:<24} {:<16} {:>12}",
            expense.id(),
            expense.date(),
            expense.description(),
            expense.category(),
            expense.amount()
        ));
    }
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let currency = context.config.currency.clone();
    let total = context.manager().get_total_expenses();
    io::print_info(format!("Total: {total:.2} {currency}"));
    Ok(())
}

fn cmd_tier(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = parse_id(args, "tier <id>")?;
    let manager = context.manager();
    let Some(expense) = manager.get_expense(id) else {
        io::print_warning(format!("Expense #{id} not found."));
        return Ok(());
    };
    let tier = manager.categorize_expense_by_cost(&expense);
    io::print_info(format!("Expense #{id} is {tier} cost."));
    Ok(())
}

fn cmd_convert(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = parse_id(args, "convert <id>")?;
    let Some(expense) = context.manager().get_expense(id) else {
        io::print_warning(format!("Expense #{id} not found."));
        return Ok(());
    };

    let source = HttpRateSource::from_config(&context.config)?;
    let target = source.target().to_string();
    tracing::debug!(endpoint = source.endpoint(), %target, "fetching exchange rate");
    let converter = RateConverter::new(source);
    match converter.convert(&expense) {
        Some(converted) => io::print_info(format!(
            "Expense #{id}: {} {} = {converted} {target}",
            expense.amount(),
            context.config.currency,
        )),
        None => io::print_warning(format!("Conversion to {target} is unavailable right now.")),
    }
    Ok(())
}
