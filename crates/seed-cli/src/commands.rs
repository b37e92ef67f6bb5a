use colored::Colorize;
use serde_json::json;
use seed_consul::ConsulKv;
use seed_resolver::KeyResolver;
use seed_store::KvStore;
use seed_types::{Entry, Resolved};

use crate::cli::*;
use crate::config::SeedConfig;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = SeedConfig::from_cli(&cli)?;
    let store = ConsulKv::new(&config.consul)?;
    tracing::debug!(
        address = store.base_url(),
        datacenter = store.datacenter().unwrap_or("-"),
        "consul client ready"
    );

    match cli.command {
        Command::Get(args) => {
            let resolver = KeyResolver::with_config(store, config.resolver);
            cmd_get(&resolver, &args.key, cli.format).await
        }
        Command::Ls(args) => cmd_ls(&store, &args.prefix, cli.format).await,
    }
}

async fn cmd_get<S: KvStore>(
    resolver: &KeyResolver<S>,
    key: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let resolved = resolver.resolve(key).await?;
    let Some(out) = render_resolved(key, &resolved, format)? else {
        anyhow::bail!("key not found: {key}");
    };
    println!("{out}");
    if format == OutputFormat::Text {
        if let Some(version) = resolved.version() {
            eprintln!("{} {}", "index".dimmed(), version.to_string().yellow());
        }
    }
    Ok(())
}

async fn cmd_ls<S: KvStore>(store: &S, prefix: &str, format: OutputFormat) -> anyhow::Result<()> {
    let entries = store.list(prefix).await?;
    if entries.is_empty() && format == OutputFormat::Text {
        eprintln!("No entries under {}.", prefix.bold());
        return Ok(());
    }
    println!("{}", render_listing(&entries, format)?);
    Ok(())
}

/// Output for `get`, or `None` when the key is absent.
///
/// Text output is the bare payload so it can be piped into other tools.
fn render_resolved(
    key: &str,
    resolved: &Resolved,
    format: OutputFormat,
) -> anyhow::Result<Option<String>> {
    let Resolved::Value { payload, version } = resolved else {
        return Ok(None);
    };
    let out = match format {
        OutputFormat::Text => payload.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "key": key,
            "value": payload,
            "index": version,
        }))?,
    };
    Ok(Some(out))
}

fn render_listing(entries: &[Entry], format: OutputFormat) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text => entries
            .iter()
            .map(|e| {
                let marker = if e.is_folder() { " (folder)".dimmed().to_string() } else { String::new() };
                format!("{:>8}  {}{}", e.modify_index.to_string().yellow(), e.key, marker)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let rows: Vec<_> = entries
                .iter()
                .map(|e| json!({
                    "key": e.key,
                    "index": e.modify_index,
                    "folder": e.is_folder(),
                    "value": e.value_lossy(),
                }))
                .collect();
            serde_json::to_string_pretty(&rows)?
        }
    };
    Ok(out)
}
