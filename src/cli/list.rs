//! Handler for the `list` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::RuntimeApiClient;
use crate::cli::{output, Cli, ListArgs};
use crate::domain::Instance;
use crate::service::directory;

#[derive(Tabled)]
struct InstanceRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "DEPLOYMENT")]
    deployment: String,
    #[tabled(rename = "PROJECT")]
    project: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

impl From<&Instance> for InstanceRow {
    fn from(instance: &Instance) -> Self {
        Self {
            name: instance.name().to_string(),
            state: instance.state().to_string(),
            deployment: instance.deployment_group().unwrap_or("-").to_string(),
            project: instance.project().unwrap_or("-").to_string(),
            created: instance.created().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute the list command.
pub async fn execute(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let config = super::load_config(cli)?;
    config.init_logging();

    let runtime = RuntimeApiClient::new(config.runtime.api_url.clone());
    let instances = directory::owned_instances(&runtime, &args.owner).await?;

    if instances.is_empty() {
        output::note(&format!("no instances for owner '{}'", args.owner));
        return Ok(());
    }

    let rows: Vec<InstanceRow> = instances.iter().map(InstanceRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");

    Ok(())
}
