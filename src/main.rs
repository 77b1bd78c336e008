//! sheet-label - CLI tool to render sheet metal inventory labels.
//!
//! The flags mirror the label web form field for field, so a submission can
//! be reproduced from a shell or from a saved JSON form.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use label_core::{
    save_png, validate_fields, ColorEntry, FontConfig, FontSet, FormSubmission, Layout, Palette,
    Renderer,
};

/// Render a sheet metal inventory label to PNG.
#[derive(Parser, Debug)]
#[command(name = "sheet-label")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color name, "Other" or "Mill Finish"
    #[arg(short, long)]
    color: Option<String>,

    /// Custom color name (with --color Other)
    #[arg(long)]
    custom_name: Option<String>,

    /// Custom color as #rrggbb (with --color Other)
    #[arg(long)]
    custom_hex: Option<String>,

    /// Mill finish photo (with --color "Mill Finish")
    #[arg(long)]
    image: Option<PathBuf>,

    /// Aluminum, Steel, Copper, Galvalume or Other
    #[arg(short, long)]
    material: Option<String>,

    /// Custom material (with --material Other)
    #[arg(long)]
    custom_material: Option<String>,

    /// 24ga, .032, 22ga or Other
    #[arg(short, long)]
    gauge: Option<String>,

    /// Custom gauge (with --gauge Other)
    #[arg(long)]
    custom_gauge: Option<String>,

    /// Open or Reserved
    #[arg(short, long)]
    status: Option<String>,

    /// Project name (with --status Reserved)
    #[arg(short, long)]
    project: Option<String>,

    /// Load form values from a JSON file (flags override it)
    #[arg(long)]
    form: Option<PathBuf>,

    /// Replace the color table with a JSON palette
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Font file tried before the default fonts
    #[arg(long)]
    font: Option<PathBuf>,

    /// Label layout: standard (1650x586) or compact (1650x570)
    #[arg(long, default_value = "standard")]
    layout: String,

    /// Output PNG file path
    #[arg(short, long, default_value = "label.png")]
    output: PathBuf,

    /// Print the color table and exit
    #[arg(long)]
    list_colors: bool,

    /// Validate only, don't render
    #[arg(long)]
    validate: bool,

    /// Output the resolved form as JSON instead of rendering
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Build the form submission: JSON form first, then explicit flags.
    fn submission(&self) -> Result<FormSubmission> {
        let mut form = match &self.form {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                FormSubmission::from_json(&json)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => FormSubmission::default(),
        };

        let overrides = [
            (&self.color, &mut form.color),
            (&self.custom_name, &mut form.custom_color_name),
            (&self.custom_hex, &mut form.custom_color_hex),
            (&self.material, &mut form.material),
            (&self.custom_material, &mut form.custom_material),
            (&self.gauge, &mut form.gauge),
            (&self.custom_gauge, &mut form.custom_gauge),
            (&self.status, &mut form.status),
            (&self.project, &mut form.project),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value.clone();
            }
        }

        if let Some(path) = &self.image {
            match std::fs::read(path) {
                Ok(bytes) => form = form.with_upload(bytes),
                Err(e) => warn!(
                    "Failed to read {}: {}; swatch will be left blank",
                    path.display(),
                    e
                ),
            }
        }

        Ok(form)
    }
}

fn load_palette(path: Option<&Path>) -> Result<Palette> {
    let Some(path) = path else {
        return Ok(Palette::standard());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let palette = Palette::from_json(&json)
        .with_context(|| format!("Failed to parse palette {}", path.display()))?;
    info!("Loaded {} color(s) from {}", palette.len(), path.display());
    Ok(palette)
}

/// One line per palette entry: name and what it paints.
fn describe_palette(palette: &Palette) -> String {
    palette
        .entries()
        .iter()
        .map(|row| {
            let what = match &row.entry {
                ColorEntry::Flat(rgb) => rgb.to_hex(),
                ColorEntry::Gradient(g) => format!(
                    "{} > {} > {}",
                    g.start().to_hex(),
                    g.middle().to_hex(),
                    g.end().to_hex()
                ),
                ColorEntry::MillFinish => "uploaded image".to_string(),
            };
            format!("{:<16} {}\n", row.name, what)
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let palette = load_palette(args.palette.as_deref())?;

    if args.list_colors {
        print!("{}", describe_palette(&palette));
        return Ok(());
    }

    let layout = Layout::by_name(&args.layout)
        .with_context(|| format!("Unknown layout '{}' (standard or compact)", args.layout))?;

    let form = args.submission()?;

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&form)?;
        println!("{}", json);
        return Ok(());
    }

    let fields = form.into_fields().context("Invalid label form")?;

    // Validate
    let validation = validate_fields(&fields, &palette);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let font_config = match &args.font {
        Some(path) => FontConfig::with_preferred(path),
        None => FontConfig::default(),
    };
    let fonts = FontSet::load(&font_config).context("Failed to load a font")?;

    let renderer = Renderer::new(palette, fonts, layout);
    let label = renderer.render(&fields);

    save_png(&label, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        "Generated: {} ({}x{})",
        args.output.display(),
        label.width(),
        label.height()
    );

    Ok(())
}
