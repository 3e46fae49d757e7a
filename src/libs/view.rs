use super::course::CoursePage;
use super::event::CalendarEvent;
use super::expense::Expense;
use super::summary::{DaySummary, TypeSummary};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn expenses(expenses: &[Expense]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TITLE", "AMOUNT", "TYPE", "CATEGORY", "NOTE"]);
        for expense in expenses {
            table.add_row(row![
                expense.id,
                expense.date,
                expense.title,
                r->format!("{:.2}", expense.amount),
                expense.kind,
                expense.category.as_deref().unwrap_or("-"),
                expense.note
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily(days: &[DaySummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "TOTAL"]);
        for day in days {
            table.add_row(row![day.day, r->format!("{:.2}", day.total)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn by_type(types: &[TypeSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TYPE", "TOTAL"]);
        for summary in types {
            table.add_row(row![summary.kind, r->format!("{:.2}", summary.total)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn events(events: &[CalendarEvent]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(events)?);
        Ok(())
    }

    pub fn courses(page: &CoursePage) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(page)?);
        Ok(())
    }
}
