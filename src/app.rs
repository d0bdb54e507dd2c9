use crate::config::Config;
use crate::error::Result;
use crate::github::client::{Credential, RepositorySource};
use crate::github::paginator::Paginator;
use crate::report;
use crate::table::presenter::{build_table, PresentationMode};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub list_fields: bool,
    pub group: Option<String>,
    pub sort: bool,
}

/// One invocation, start to finish. Field listing needs neither config nor
/// credential; every other check runs before the first request so a bad
/// flag or missing token costs no API quota.
pub async fn run<L, C, S>(options: &Options, load_config: L, connect: C, out: &mut impl Write) -> Result<()>
where
    L: FnOnce() -> Result<Config>,
    C: FnOnce(&Credential, &Config) -> Result<S>,
    S: RepositorySource,
{
    if options.list_fields {
        report::write_fields(out)?;
        return Ok(());
    }

    let mode = PresentationMode::from_flags(options.group.as_deref(), options.sort)?;
    debug!(?mode, "presentation mode");

    let config = load_config()?;
    debug!(?config, "configuration loaded");

    let credential = Credential::from_config(&config)?;
    let source = connect(&credential, &config)?;
    let collected = Paginator::new(source, &config).fetch_all().await?;

    let table = build_table(&collected.records, mode);
    report::write_report(out, &table, &collected.usage)?;
    Ok(())
}
