use crate::error::GhReposError;
use crate::github::types::RateLimitUsage;
use crate::table::fields;
use crate::table::render::Table;
use crossterm::style::Stylize;
use std::io::{self, Write};

pub const ERROR_SYMBOL: &str = "✖";

pub fn write_fields(out: &mut impl Write) -> io::Result<()> {
    for name in fields::field_names() {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}

pub fn write_report(out: &mut impl Write, table: &Table, usage: &RateLimitUsage) -> io::Result<()> {
    write!(out, "{table}")?;
    writeln!(out, "API Points:")?;
    writeln!(out, "\tused\t\t-\t{}", usage.cost)?;
    writeln!(out, "\tremaining\t-\t{}", usage.remaining)?;
    out.flush()
}

pub fn error_line(err: &GhReposError, color: bool) -> String {
    if color {
        format!("{} {err}", ERROR_SYMBOL.red())
    } else {
        format!("{ERROR_SYMBOL} {err}")
    }
}
