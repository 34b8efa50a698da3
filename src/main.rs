use clap::{Parser, Subcommand};
use sd_locator::generate::SitePaths;
use sd_locator::index::SiteIndex;
use sd_locator::{config, data, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sd-locator")]
#[command(about = "Static site generator for a scratch & dent appliance store directory")]
#[command(long_about = "\
Static site generator for a scratch & dent appliance store directory

Three JSON files are the data source. States, cities and stores become a
browsable site with one page per state and per city, plus a search index,
sitemap and robots file.

Input layout:

  data/
  ├── states.json      # [{code, name, stores_count, cities_count}]
  ├── cities.json      # [{name, state, slug, stores_count, center}]
  └── stores.json      # [{id, name, state, city_slug, address, ...}]

  site/                              # all optional
  ├── config.toml                    # Site name, URL, contact settings
  ├── assets/                        # Copied over the embedded assets/
  ├── static/                        # Copied to the output root
  ├── templates/_layout.html         # Replaces the page layout
  └── pages/{about,contact}.md       # Replace the info page text

Run 'sd-locator gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding states.json, cities.json and stores.json
    #[arg(long, default_value = "data", global = true)]
    data: PathBuf,

    /// Site source directory (config, assets, overrides)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory, replaced on every build
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Serve the site under this sub-path (overrides site.base_path)
    #[arg(long, env = "BASE_PATH", global = true)]
    base_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: load → index → generate
    Build,
    /// Validate the data and report problems without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            let base = site_config.base_path(cli.base_path.as_deref());

            println!("==> Stage 1: Loading {}", cli.data.display());
            let dataset = data::load_dataset(&cli.data)?;

            println!("==> Stage 2: Indexing");
            let index = SiteIndex::build(dataset)?;
            output::print_load_output(&index);
            output::print_warnings(&index);

            println!("==> Stage 3: Generating HTML → {}", cli.output.display());
            let paths = SitePaths {
                data: &cli.data,
                source: &cli.source,
                output: &cli.output,
            };
            let today = chrono::Local::now().date_naive();
            let report = generate::generate(&paths, &index, &site_config, &base, today)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.data.display());
            config::load_config(&cli.source)?;
            let dataset = data::load_dataset(&cli.data)?;
            let index = SiteIndex::build(dataset)?;
            output::print_load_output(&index);
            let warnings = output::print_warnings(&index);
            if warnings == 0 {
                println!("==> Data is valid");
            } else {
                println!("==> Data is valid ({warnings} warnings)");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
