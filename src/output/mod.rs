//! Output formatting for CLI results
//!
//! Lists print as tables (pretty and table formats) or as a JSON envelope.
//! Single records implement [`Pretty`] for a colored detail view.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(self)),
        }
    }
}

/// Human-oriented rendering of a single record
pub trait Pretty {
    fn pretty(&self) -> String;
}

/// Print one record: JSON envelope, or its pretty view otherwise.
pub fn print_detail<T: Pretty + Serialize>(item: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(item)?),
        OutputFormat::Pretty | OutputFormat::Table => println!("{}", item.pretty()),
    }
    Ok(())
}
