//! Output rendering for the three formats.
//!
//! Results go to the caller's writer (stdout in the binary); diagnostics
//! such as validation messages in human mode and `--explain` go to stderr.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use roster_api::{EmptyState, PageResult};
use roster_core::{Employee, ValidationErrors};
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Output { Human, Json, Yaml }

#[derive(Copy, Clone, Debug)]
pub struct Printer {
    pub output: Output,
}

impl Printer {
    fn structured<T: Serialize>(&self, v: &T) -> Result<Option<String>> {
        Ok(match self.output {
            Output::Human => None,
            Output::Json => Some(serde_json::to_string_pretty(v)?),
            Output::Yaml => Some(serde_yaml::to_string(v)?),
        })
    }

    pub fn view(&self, out: &mut impl Write, view: &PageResult, empty: Option<EmptyState>, explain: bool) -> Result<()> {
        if let Some(s) = self.structured(view)? {
            writeln!(out, "{}", s)?;
            return Ok(());
        }
        write!(out, "{}", table(view))?;
        if let Some(state) = empty {
            writeln!(out, "No employees found. {}", state.hint())?;
        }
        if explain {
            let st = &view.stats;
            eprintln!(
                "debug: total={} after_department={} after_role={} after_search={}",
                st.total, st.after_department, st.after_role, st.after_search
            );
        }
        Ok(())
    }

    /// One record as a single table row.
    pub fn record(&self, out: &mut impl Write, e: &Employee) -> Result<()> {
        match self.structured(e)? {
            Some(s) => writeln!(out, "{}", s)?,
            None => {
                writeln!(out, "{}", header())?;
                writeln!(out, "{}", row(e))?;
            }
        }
        Ok(())
    }

    pub fn employee(&self, out: &mut impl Write, verb: &str, e: &Employee) -> Result<()> {
        match self.structured(e)? {
            Some(s) => writeln!(out, "{}", s)?,
            None => writeln!(out, "{} {} has been {}.", e.id, e.full_name(), verb)?,
        }
        Ok(())
    }

    pub fn removed(&self, out: &mut impl Write, e: &Employee) -> Result<()> {
        match self.structured(e)? {
            Some(s) => writeln!(out, "{}", s)?,
            None => writeln!(out, "{} has been removed from the directory.", e.full_name())?,
        }
        Ok(())
    }

    pub fn invalid(&self, out: &mut impl Write, errs: &ValidationErrors) -> Result<()> {
        #[derive(Serialize)]
        struct Rejected<'a> { errors: &'a ValidationErrors }
        match self.structured(&Rejected { errors: errs })? {
            Some(s) => writeln!(out, "{}", s)?,
            None => {
                eprintln!("Validation Error: please fix the errors and try again.");
                for e in errs.iter() {
                    eprintln!("  {:<10} {}", e.field.as_str(), e.message);
                }
            }
        }
        Ok(())
    }
}

fn header() -> String {
    format!("{:<4} {:<20} {:<26} {:<11} {}", "ID", "NAME", "EMAIL", "DEPARTMENT", "ROLE")
}

fn row(e: &Employee) -> String {
    format!("{:<4} {:<20} {:<26} {:<11} {}", e.id, e.full_name(), e.email, e.department.as_str(), e.role.as_str())
}

/// Human listing: header, one row per employee, then the page footer.
pub fn table(view: &PageResult) -> String {
    let mut out = header();
    out.push('\n');
    for e in &view.items {
        out.push_str(&row(e));
        out.push('\n');
    }
    out.push_str(&format!("Page {} of {} · {}\n", view.current_page, view.total_pages, view.summary()));
    out
}
