use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bindery", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a cover collage into a PNG.
    Collage(CollageArgs),
    /// Render a poetry book JSON into a paginated PDF.
    Book(BookArgs),
}

#[derive(Parser, Debug)]
struct CollageArgs {
    /// Collage spec JSON; defaults to the builtin banner spec.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output PNG path; defaults to frith-hilton-book-collage-{w}x{h}.png.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the spec's shuffle seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct BookArgs {
    /// Input book JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory holding {family}-Regular.ttf and friends.
    #[arg(long, default_value = "fonts")]
    fonts_dir: PathBuf,

    /// Font family name.
    #[arg(long, default_value = "Georgia")]
    family: String,

    /// Output PDF path; defaults to "{title} – KDP ready.pdf".
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Collage(args) => cmd_collage(args),
        Command::Book(args) => cmd_book(args),
    }
}

fn cmd_collage(args: CollageArgs) -> anyhow::Result<()> {
    let mut spec = match &args.in_path {
        Some(path) => bindery::CollageSpec::from_path(path)?,
        None => bindery::CollageSpec::frith_hilton_banner(),
    };
    if let Some(seed) = args.seed {
        spec.seed = Some(seed);
    }

    let out = args.out.unwrap_or_else(|| {
        PathBuf::from(format!(
            "frith-hilton-book-collage-{}x{}.png",
            spec.width, spec.height
        ))
    });

    let frame = bindery::render_collage(&spec)?;
    ensure_parent_dir(&out)?;
    image::save_buffer_with_format(
        &out,
        frame.as_raw(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!(
        "wrote {} ({} covers in {}x{} grid)",
        out.display(),
        spec.sources.len().min(spec.cell_count()),
        spec.cols,
        spec.rows
    );
    Ok(())
}

fn cmd_book(args: BookArgs) -> anyhow::Result<()> {
    let book = bindery::Book::from_path(&args.in_path)?;
    let plan = bindery::compile_document_plan(&book);

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(book.output_file_name()));
    ensure_parent_dir(&out)?;
    bindery::render_book_pdf(&plan, &args.fonts_dir, &args.family, &out)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    Ok(())
}
