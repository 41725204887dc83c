use std::error::Error;

use clap::{Parser, Subcommand};

use cv_builder::assembler::Assembler;
use cv_builder::content::Language;
use cv_builder::render;

/// Generates the CV PDFs from the embedded content.
///
/// Fonts must be present under `assets/fonts` or provided via the
/// `CV_BUILDER_FONTS_DIR` environment variable before running the commands
/// below.
#[derive(Parser)]
#[command(author, version, about = "Generates Saad Hasan's CV as a PDF")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the English CV on US Letter pages.
    #[command(name = "english")]
    English,

    /// Render the German CV on A4 pages.
    #[command(name = "german")]
    German,

    /// Render both language variants.
    #[command(name = "all")]
    All,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let languages: &[Language] = match cli.command.unwrap_or(Commands::All) {
        Commands::English => &[Language::English],
        Commands::German => &[Language::German],
        Commands::All => &Language::ALL,
    };

    for language in languages {
        if let Err(err) = run(*language) {
            eprintln!("Error: {}", err);
            print_error_sources(err.as_ref());
            std::process::exit(1);
        }
    }
}

fn run(language: Language) -> Result<(), Box<dyn Error>> {
    let content = language.content();
    let config = language.config();
    let blocks = Assembler::new(language.styles()).assemble(&content, &config);
    let bytes = render::render_to_file(blocks, &config)?;
    println!(
        "Generated {} ({} bytes)",
        config.output_path.display(),
        bytes.len()
    );
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
