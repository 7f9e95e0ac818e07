use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pathscout_cli::{OutputFormat, commands};
use pathscout_locate::Locator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pathscout")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Locate browsers, WebDriver binaries, the Cursor IDE and user folders",
    long_about = "pathscout finds the installed artifacts a browser automation tool needs: \
                  browser executables, their WebDriver binaries, the Cursor IDE and the user's \
                  documents folder. It also samples the randomized delays used to pace actions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the user's documents directory
    Documents,

    /// Locate a browser executable
    Browser {
        /// Browser type (chrome, edge, firefox, brave, opera, operagx)
        #[arg(value_name = "BROWSER", default_value = "chrome")]
        name: String,

        /// List every configured browser instead
        #[arg(long)]
        all: bool,
    },

    /// Locate the WebDriver executable for a browser
    Driver {
        /// Browser type; unknown types use chromedriver
        #[arg(value_name = "BROWSER", default_value = "chrome")]
        browser: String,
    },

    /// Locate the Cursor IDE resources directory
    Cursor,

    /// Sample randomized delays from the Timing section of a config file
    Wait {
        /// Timing entry to sample
        #[arg(value_name = "KEY")]
        key: String,

        /// JSON config file with a "Timing" object
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Number of samples to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        samples: usize,
    },

    /// Resolve every target and print a summary
    Report,

    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS: bash, zsh, fish, powershell, elvish\n\n\
                            INSTALLATION:\n  \
                            bash: pathscout completion --shell bash >> ~/.bashrc\n  \
                            zsh:  pathscout completion --shell zsh > ~/.zfunc/_pathscout")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);
    tracing::debug!("Output format: {}", cli.format.as_str());

    let locator = Locator::from_env();

    // Execute the command
    match cli.command {
        Commands::Documents => commands::documents::execute(&locator, cli.format),
        Commands::Browser { name, all } => {
            commands::browser::execute(&locator, &name, all, cli.format)
        }
        Commands::Driver { browser } => commands::driver::execute(&locator, &browser, cli.format),
        Commands::Cursor => commands::cursor::execute(&locator, cli.format),
        Commands::Wait {
            key,
            config,
            samples,
        } => commands::wait::execute(config.as_deref(), &key, samples, cli.format),
        Commands::Report => commands::report::execute(&locator, cli.format),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("pathscout=debug,pathscout_cli=debug,pathscout_locate=debug,pathscout_core=debug")
    } else {
        EnvFilter::new("pathscout=info")
    };

    // Paths go to stdout; keep logs off it
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
