//! Forge CLI - Scaffold Fastify + TypeScript backend projects

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use colored::Colorize;
use forge_core::tui::CreateArgs;
use forge_core::ProductConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Template tree location in the source checkout
const SOURCE_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../template");

/// Backend Forge product configuration
#[derive(Clone)]
pub struct ForgeConfig;

impl ProductConfig for ForgeConfig {
    fn name(&self) -> &'static str {
        "forge"
    }

    fn display_name(&self) -> &'static str {
        "Backend Forge"
    }

    fn tagline(&self) -> &'static str {
        "Fastify + TypeScript Scaffold"
    }

    fn template_dir_env(&self) -> &'static str {
        "FORGE_TEMPLATE_DIR"
    }

    /// `template/` next to the installed binary, else the source checkout's
    fn default_template_dir(&self) -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("template")))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from(SOURCE_TEMPLATE_DIR))
    }

    fn default_project_name(&self) -> &'static str {
        "my-backend-app"
    }

    fn default_description(&self) -> &'static str {
        "A Fastify + TypeScript backend project"
    }

    fn next_steps(&self, project_name: &str) -> Vec<String> {
        vec![
            format!("cd {}", project_name),
            "pnpm install".to_string(),
            "pnpm dev".to_string(),
        ]
    }

    fn available_scripts(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("pnpm dev", "Start the development server"),
            ("pnpm build", "Build for production"),
            ("pnpm start", "Run the production build"),
            ("pnpm test", "Run the test suite"),
            ("pnpm lint", "Lint the sources"),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(about = "CLI for scaffolding Fastify + TypeScript backend projects")]
#[command(version, disable_version_flag = true, arg_required_else_help = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new backend project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Local directory to use as the template instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.project_name,
            template_dir: args.template_dir,
        }
    }
}

/// Help and version requests exit 0; every other parse failure exits 1
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        let code = match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
            _ => 1,
        };
        let _ = err.print();
        std::process::exit(code);
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = parse_args();

    if let Err(e) = dispatch(args).await {
        eprintln!("{} {:#}", "Failed to create project:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn dispatch(args: Args) -> Result<()> {
    let config = ForgeConfig;

    match args.command {
        Some(Command::Create(create_args)) => {
            let result = forge_core::run(&config, create_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
