use anyhow::Result;
use clap::Parser;
use verspec::commands::{self, Format, Part};

/// verspec - parse, compare and bump semantic versions
///
/// Versions look like "1.2.3", "v1.2" or "1.2.3-beta". Ranges use "x" or "*"
/// for components that match anything, e.g. "1.2.x".
///
/// Examples:
///   verspec bump minor 1.2.3          # 1.3.0
///   verspec satisfies 1.2.x 1.2.9     # true
#[derive(Parser, Debug)]
#[command(author, version = env!("VERSPEC_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (also via VERSPEC_FORMAT)
    #[arg(
        long = "format",
        short = 'f',
        env = "VERSPEC_FORMAT",
        value_enum,
        default_value_t = Format::Text,
        global = true
    )]
    pub format: Format,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print a version in canonical form
    Show(ShowArgs),

    /// Increment one component of a version
    Bump(BumpArgs),

    /// Compare two versions, printing <, = or >
    Compare(CompareArgs),

    /// Check whether a version falls within a range (exit status 1 if not)
    Satisfies(SatisfiesArgs),

    /// Print the highest candidate within a range
    Resolve(ResolveArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Treat missing and wildcard components as unspecified
    #[arg(long, short = 'd')]
    pub dependency: bool,
}

#[derive(clap::Args, Debug)]
pub struct BumpArgs {
    #[arg(value_enum)]
    pub part: Part,

    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Build tag for the new version
    #[arg(long, short = 'b', value_name = "TAG")]
    pub build: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    pub left: String,
    pub right: String,
}

#[derive(clap::Args, Debug)]
pub struct SatisfiesArgs {
    /// Version range, e.g. "1.2.x"
    pub range: String,
    pub candidate: String,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Version range, e.g. "1.x"
    pub range: String,

    #[arg(required = true, value_name = "CANDIDATES")]
    pub candidates: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Show(args) => commands::show(&args.version, args.dependency, cli.format)?,
        Commands::Bump(args) => {
            commands::bump(args.part, &args.version, args.build.as_deref(), cli.format)?
        }
        Commands::Compare(args) => commands::compare(&args.left, &args.right, cli.format)?,
        Commands::Satisfies(args) => {
            let (output, satisfied) =
                commands::satisfies(&args.range, &args.candidate, cli.format)?;
            println!("{}", output);
            if !satisfied {
                std::process::exit(1);
            }
            return Ok(());
        }
        Commands::Resolve(args) => commands::resolve(&args.range, &args.candidates, cli.format)?,
    };

    println!("{}", output);
    Ok(())
}
