use civic_site::routes::Route;
use civic_site::{config, generate, output, seo};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup; called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "civic-site")]
#[command(about = "Static site generator for the Public Sector IT Solutions website")]
#[command(long_about = "\
Static site generator for the Public Sector IT Solutions website

All copy lives in the binary. A build renders every route to plain HTML,
writes a fingerprinted stylesheet and a small script, and copies the public
directory alongside.

Project layout:

  .
  ├── config.toml        # Optional; see 'civic-site gen-config'
  └── public/            # Copied verbatim into the output root
      ├── images/
      │   ├── hero-bg.jpg        # Critical: preloaded on the home page
      │   ├── team-working.jpg   # Critical
      │   └── ...
      └── robots.txt

Routes:
  /  /about  /services  /portfolio  /contact  /team/{id}
  Unknown /team/{id} paths redirect to /about (via 404.html).

Logging goes to stderr. Use -v for debug output or set RUST_LOG.")]
#[command(version = version_string())]
struct Cli {
    /// Config file. Its directory is the project root.
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the whole site into the output directory
    Build,
    /// Validate config and public directory without writing anything
    Check,
    /// List every route and the file it is written to
    Routes,
    /// Show the resolved SEO metadata for a page
    Seo {
        /// Page key: home, about, services, portfolio or contact
        page: String,
        /// Print metadata and structured data as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.config)?;
            init_thread_pool(&site_config.processing);
            let root = project_root(&cli.config);
            println!("==> Building {} → {}", root.display(), cli.output.display());
            let report = generate::generate(&site_config, &root, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            let root = project_root(&cli.config);
            let public_dir_found = root.join(&site_config.public_dir).is_dir();
            output::print_check_output(&site_config, cli.config.exists(), public_dir_found);
            println!("==> Config is valid");
        }
        Command::Routes => {
            output::print_routes(&Route::all());
        }
        Command::Seo { page, json } => {
            let meta = seo::resolve(&page, None);
            let kind = Route::from_seo_key(&page).and_then(|r| r.structured_data());
            if json {
                let data = kind.map(|k| k.build(&seo::EntitySummary::from(&meta)));
                let value = serde_json::json!({ "metadata": meta, "structuredData": data });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                output::print_seo_output(&page, &meta, kind);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries command output.
fn init_logging(verbose: bool) {
    let default = if verbose { "civic_site=debug" } else { "civic_site=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Sizes the global rayon pool used for page rendering and preload checks.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

fn project_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
