use clap::{Parser, Subcommand};
use promptcase::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptcase")]
#[command(about = "Static site generator for prompt/result case galleries")]
#[command(long_about = "\
Static site generator for prompt/result case galleries

A JSON manifest is the data source. Each case record carries a prompt, its
attribution, optional reference images, and one resulting image; the build
renders them as a single gallery page with a lightbox viewer and copies the
image tree alongside it.

Source structure:

  site/
  ├── data.json                    # Case manifest (required)
  ├── config.toml                  # Site config (optional)
  ├── intro.md                     # Markdown intro above the gallery (optional)
  └── images/                      # One directory per case_no
      ├── 1/
      │   ├── result.png           # The case's primary image
      │   └── ref-a.png            # Reference images, if any
      └── 2/
          └── result.png

Every asset is published at images/{case_no}/{filename}, exactly as the
manifest references it. Run 'promptcase gen-config' for a documented
config.toml.")]
#[command(version)]
struct Cli {
    /// Source directory holding the manifest and image tree
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the gallery site: render index.html and copy images
    Build,
    /// Validate the manifest and assets without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let report = generate::check(&cli.source)?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
