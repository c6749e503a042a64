use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deno_registry_client::{constants, ModuleQuery, RegistryClient, SortOrder};
use serde::Serialize;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "deno-registry",
    about = "Query the deno.land third-party module registry",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Output format", default_value = "pretty")]
    format: OutputFormat,

    #[arg(short, long, global = true, help = "Set log level", default_value = "warn")]
    log_level: String,

    #[arg(short, long, global = true, help = "Path to a TOML client config")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "User-Agent sent with every request")]
    user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show registry-wide upload statistics")]
    Stats,

    #[command(about = "Show a build by id")]
    Build {
        #[arg(help = "Build id")]
        id: String,
    },

    #[command(about = "Show one module")]
    Module {
        #[arg(help = "Module name (e.g., oak)")]
        name: String,
    },

    #[command(about = "List modules page by page")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Search modules by name or description")]
    Search {
        #[arg(help = "Search text")]
        query: String,

        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "List published versions of a module")]
    Versions {
        #[arg(help = "Module name")]
        name: String,
    },

    #[command(about = "Show the dependency graph of a module version")]
    Deps {
        #[arg(help = "Module name")]
        name: String,
        #[arg(help = "Version tag (e.g., v1.0.0)")]
        version: String,
    },

    #[command(about = "Show upload metadata and file listing of a module version")]
    Meta {
        #[arg(help = "Module name")]
        name: String,
        #[arg(help = "Version tag")]
        version: String,
    },

    #[command(about = "Download one source file of a module version")]
    Raw {
        #[arg(help = "Module name")]
        name: String,
        #[arg(help = "Version tag")]
        version: String,
        #[arg(help = "File path inside the module (e.g., /mod.ts)")]
        path: String,
        #[arg(short, long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct PageArgs {
    #[arg(long, help = "Results per page", default_value_t = constants::DEFAULT_LIMIT)]
    limit: u32,

    #[arg(long, help = "Page number, starting at 1", default_value_t = constants::DEFAULT_PAGE)]
    page: u32,

    #[arg(long, help = "stars, newest, oldest or random", default_value_t = SortOrder::Stars)]
    sort: SortOrder,
}

impl PageArgs {
    fn to_query(&self) -> ModuleQuery {
        ModuleQuery::new()
            .with_limit(self.limit)
            .with_page(self.page)
            .with_sort(self.sort)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level; stdout carries command output
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let overrides = config::Overrides {
        user_agent: cli.user_agent.clone(),
    };
    let client_config = config::load(cli.config.as_deref(), &overrides)?;
    let client = RegistryClient::with_config(client_config)?;

    run(&client, cli.command, cli.format).await
}

async fn run(client: &RegistryClient, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Stats => print(&client.get_stats().await?, format),
        Commands::Build { id } => print(&client.get_build(&id).await?, format),
        Commands::Module { name } => print(&client.get_module(&name).await?, format),
        Commands::List { page } => print(&client.list_modules(&page.to_query()).await?, format),
        Commands::Search { query, page } => print(
            &client.search_modules(&query, &page.to_query()).await?,
            format,
        ),
        Commands::Versions { name } => print(&client.list_versions(&name).await?, format),
        Commands::Deps { name, version } => {
            print(&client.list_dependencies(&name, &version).await?, format)
        }
        Commands::Meta { name, version } => {
            print(&client.get_metadata(&name, &version).await?, format)
        }
        Commands::Raw {
            name,
            version,
            path,
            output,
        } => {
            let source = client.get_raw_source(&name, &version, &path).await?;
            debug!(
                url = %source.url,
                bytes = source.len(),
                content_type = ?source.content_type,
                "Downloaded source file"
            );
            write_raw(&source.bytes, output.as_deref())
        }
    }
}

fn print<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    println!("{rendered}");
    Ok(())
}

fn write_raw(bytes: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
