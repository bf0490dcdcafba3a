//! Bit Template command line entry point
//!
//! Decodes amounts against a saved template, previews row wrapping and
//! converts share codes. The web build exposes the same operations through
//! `bit_template::wasm`.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result, bail};
    use clap::{Parser, Subcommand};

    use bit_template::persistence::SavedTemplates;
    use bit_template::{
        BitTemplate, Direction, ResultView, Settings, SharedConfig, chunk_rows, decode, decode_share_code,
        encode_share_code, required_width,
    };

    #[derive(Debug, Parser)]
    #[command(name = "bit-template")]
    #[command(about = "Bit template decoding for TNT cannons")]
    pub struct Cli {
        /// Preferences file (JSON)
        #[arg(long, global = true, default_value = "bit_template_settings.json")]
        settings: PathBuf,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Decode blue/red amounts into side switch patterns
        Decode {
            /// Saved template or exported template JSON
            #[arg(long)]
            template: PathBuf,
            #[arg(long)]
            blue: u32,
            #[arg(long)]
            red: u32,
            /// North, East, West or South
            #[arg(long)]
            direction: Direction,
            /// Include the display rows in the output
            #[arg(long)]
            view: bool,
        },
        /// Show how side cells wrap at a container width
        Layout {
            #[arg(long)]
            sides: usize,
            #[arg(long)]
            width: f32,
            /// Wrap right-to-left (defaults to the preference)
            #[arg(long)]
            rtl: Option<bool>,
        },
        /// Share code conversion
        Share {
            #[command(subcommand)]
            action: ShareAction,
        },
    }

    #[derive(Debug, Subcommand)]
    enum ShareAction {
        /// Build a share code from a template and a general config record
        Encode {
            #[arg(long)]
            template: Option<PathBuf>,
            /// General config JSON (defaults to an empty object)
            #[arg(long)]
            general: Option<PathBuf>,
        },
        /// Print the contents of a share code
        Decode { code: String },
    }

    fn load_template(path: &Path) -> Result<SavedTemplates> {
        let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        if let Ok(saved) = SavedTemplates::from_json(&json) {
            return Ok(saved);
        }
        let template: BitTemplate =
            serde_json::from_str(&json).with_context(|| format!("parsing template {}", path.display()))?;
        Ok(SavedTemplates {
            template,
            multiplier: None,
        })
    }

    fn print_json(value: &impl serde::Serialize) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn run(cli: Cli) -> Result<()> {
        let settings = Settings::load_from(&cli.settings);

        match cli.command {
            Command::Decode {
                template,
                blue,
                red,
                direction,
                view,
            } => {
                let saved = load_template(&template)?;
                match decode(&saved.template, blue, red, direction) {
                    Ok(result) if view => print_json(&serde_json::json!({
                        "result": result,
                        "view": ResultView::new(&saved.template, Some(&result)),
                    })),
                    Ok(result) => print_json(&result),
                    Err(e) => {
                        print_json(&e.report())?;
                        bail!("{}", e)
                    }
                }
            }
            Command::Layout { sides, width, rtl } => {
                let indices: Vec<usize> = (0..sides).collect();
                let rows = chunk_rows(&indices, width, rtl.unwrap_or(settings.right_to_left));
                print_json(&serde_json::json!({
                    "requiredWidth": required_width(sides),
                    "rows": rows
                        .iter()
                        .map(|row| row.iter().map(|c| c.value).collect::<Vec<_>>())
                        .collect::<Vec<_>>(),
                }))
            }
            Command::Share { action } => match action {
                ShareAction::Encode { template, general } => {
                    let general = match general {
                        Some(path) => serde_json::from_str(
                            &std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?,
                        )?,
                        None => serde_json::json!({}),
                    };
                    let mut config = SharedConfig::new(general);
                    if let Some(path) = template {
                        let saved = load_template(&path)?;
                        config = config.with_template(&saved.template);
                        if let Some(multiplier) = &saved.multiplier {
                            config = config.with_multiplier(multiplier);
                        }
                    }
                    println!("{}", encode_share_code(&config)?);
                    Ok(())
                }
                ShareAction::Decode { code } => print_json(&decode_share_code(&code)?),
            },
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Bit Template (native) starting...");
    cli::run(cli::Cli::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is bit_template::wasm::start
}
