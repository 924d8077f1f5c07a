//! resumake CLI - compose, render, and export resumes

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use resumake::{
    compose, parse, to_html, ExportPipeline, Rasterizer, RenderedSurface, Result, ResumeForm,
    ThemeVariant,
};

#[derive(Parser)]
#[command(name = "resumake")]
#[command(version)]
#[command(about = "Compose, render, and export resumes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble resume text from a form JSON file
    Compose {
        /// Form JSON file ({"name": ..., "skills": ..., ...})
        #[arg(value_name = "FORM")]
        form: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render resume text to an HTML surface
    Render {
        /// Resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Theme variant
        #[arg(short, long, default_value = "minimal")]
        theme: ThemeVariant,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Package a captured resume image into the download archive
    Export {
        /// Captured resume image (JPEG)
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Theme variant (names the archive)
        #[arg(short, long, default_value = "minimal")]
        theme: ThemeVariant,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Apply section-header tagging to resume text
    Tag {
        /// Resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Rewrite the file in place instead of printing
        #[arg(short, long)]
        in_place: bool,
    },

    /// Show document structure information
    Info {
        /// Resume text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

/// Packages a pre-captured image; the actual rasterization happens in
/// the preview surface, outside this tool.
struct CapturedImage {
    bytes: Vec<u8>,
}

impl Rasterizer for CapturedImage {
    fn rasterize(&self, _surface: &RenderedSurface) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compose { form, output } => {
            let json = fs::read_to_string(&form)?;
            let form: ResumeForm = serde_json::from_str(&json)?;
            let text = compose(&form)?;
            write_output(output.as_deref(), &text)?;
            if output.is_some() {
                eprintln!("{} composed resume text", "ok:".green().bold());
            }
        }

        Commands::Render {
            input,
            theme,
            output,
        } => {
            let raw = fs::read_to_string(&input)?;
            let html = to_html(&parse(&raw), theme);
            write_output(output.as_deref(), &html)?;
            if output.is_some() {
                eprintln!("{} rendered {} theme", "ok:".green().bold(), theme);
            }
        }

        Commands::Export {
            image,
            theme,
            output,
        } => {
            let bytes = fs::read(&image)?;
            let pipeline = ExportPipeline::new();
            let surface = RenderedSurface::new("captured");
            let artifact = pipeline.export(&CapturedImage { bytes }, &surface, theme)?;

            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            fs::create_dir_all(&dir)?;
            let path = dir.join(&artifact.file_name);
            fs::write(&path, &artifact.bytes)?;
            eprintln!(
                "{} wrote {} ({} bytes)",
                "ok:".green().bold(),
                path.display(),
                artifact.bytes.len()
            );
        }

        Commands::Tag { input, in_place } => {
            let raw = fs::read_to_string(&input)?;
            let tagged = resumake::edit::auto_tag(&raw);
            if in_place {
                fs::write(&input, &tagged)?;
                eprintln!("{} tagged {}", "ok:".green().bold(), input.display());
            } else {
                println!("{tagged}");
            }
        }

        Commands::Info { input } => {
            let raw = fs::read_to_string(&input)?;
            let doc = parse(&raw);

            println!("{}", "Resume".bold());
            println!("  name:      {}", doc.identity.display_name);
            println!("  contacts:  {}", doc.identity.contact_lines.len());
            println!("  sections:  {}", doc.section_count());
            for section in &doc.sections {
                let marker = if section.is_primary {
                    "primary".green()
                } else {
                    "secondary".normal()
                };
                println!(
                    "    {:<24} {:>3} lines  [{}]",
                    section.title,
                    section.lines.len(),
                    marker
                );
            }
        }
    }

    Ok(())
}

fn write_output(path: Option<&std::path::Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => println!("{content}"),
    }
    Ok(())
}
