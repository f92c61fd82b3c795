//! Variant Eval CLI
//!
//! Command-line interface for evaluations, annotations and evaluators.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use variant_eval_cli::commands::{
    annotations, configs, evaluations, evaluators, settings, CommandContext,
};
use variant_eval_cli::config::Config;
use variant_eval_cli::output::OutputFormat;

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "variant-eval")]
#[command(author, version, about = "Variant evaluation CLI")]
#[command(long_about = "Command-line interface for the variant evaluation backend.\n\n\
    Browse evaluators, manage evaluator configs, and run, inspect and annotate evaluations.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (overrides config)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<CliOutputFormat>,

    /// API endpoint URL (overrides config)
    #[arg(long, global = true, env = "VARIANT_EVAL_API_URL")]
    api_url: Option<String>,

    /// App to operate on (overrides default_app_id)
    #[arg(long, global = true, env = "VARIANT_EVAL_APP_ID")]
    app_id: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluator catalog commands
    #[command(alias = "ev")]
    Evaluators {
        #[command(subcommand)]
        command: EvaluatorCommands,
    },

    /// Evaluator config commands
    #[command(alias = "c")]
    Configs {
        #[command(subcommand)]
        command: ConfigsCommands,
    },

    /// Evaluation commands
    #[command(alias = "e", alias = "eval")]
    Evaluations {
        #[command(subcommand)]
        command: EvaluationCommands,
    },

    /// Annotation commands
    #[command(alias = "a", alias = "ann")]
    Annotations {
        #[command(subcommand)]
        command: AnnotationCommands,
    },

    /// Show or change CLI configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum EvaluatorCommands {
    /// List the evaluator catalog
    List,
}

#[derive(Subcommand, Debug)]
enum ConfigsCommands {
    /// List evaluator configs of the app
    List,

    /// Create an evaluator config
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Evaluator key, e.g. auto_exact_match
        #[arg(short, long)]
        evaluator_key: String,

        /// Settings as a JSON object
        #[arg(short, long)]
        settings: Option<String>,
    },

    /// Update an evaluator config
    Update {
        /// Config ID
        #[arg(value_name = "ID")]
        id: String,

        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New evaluator key
        #[arg(short, long)]
        evaluator_key: Option<String>,

        /// New settings as a JSON object
        #[arg(short, long)]
        settings: Option<String>,
    },

    /// Delete an evaluator config
    Delete {
        /// Config ID
        #[arg(value_name = "ID")]
        id: String,

        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum EvaluationCommands {
    /// List evaluations of the app
    List,

    /// Show evaluation details
    Show {
        /// Evaluation ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Show evaluation status
    Status {
        /// Evaluation ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Start an evaluation
    Create {
        /// Test set to run against
        #[arg(short, long)]
        testset_id: String,

        /// Variant to evaluate (repeatable)
        #[arg(long = "variant", value_name = "ID", required = true)]
        variants: Vec<String>,

        /// Evaluator config to score with (repeatable)
        #[arg(long = "config", value_name = "ID", required = true)]
        configs: Vec<String>,
    },

    /// Delete evaluations
    Delete {
        /// Evaluation IDs
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,

        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List scenarios of an evaluation
    Scenarios {
        /// Evaluation ID
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum AnnotationCommands {
    /// List annotations of the app
    List,

    /// Show annotation details
    Show {
        /// Annotation ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Show annotation status
    Status {
        /// Annotation ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Start an annotation
    Create {
        /// Annotation kind, e.g. flag or comparison
        #[arg(short, long)]
        name: String,

        /// Test set to annotate
        #[arg(short, long)]
        testset_id: String,

        /// Variant to annotate (repeatable)
        #[arg(long = "variant", value_name = "ID", required = true)]
        variants: Vec<String>,
    },

    /// Delete annotations
    Delete {
        /// Annotation IDs
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,

        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List scenarios of an annotation
    Scenarios {
        /// Annotation ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Update pinned flag, note or result of a scenario
    UpdateScenario {
        /// Annotation ID
        #[arg(value_name = "ANNOTATION_ID")]
        annotation_id: String,

        /// Scenario ID
        #[arg(value_name = "SCENARIO_ID")]
        scenario_id: String,

        /// Pin or unpin the scenario
        #[arg(long)]
        pinned: Option<bool>,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,

        /// Result as JSON, e.g. {"type": "text", "value": "variant-1"}
        #[arg(long)]
        result: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Reset configuration to defaults
    Reset,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "variant-eval", &mut std::io::stdout());
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        // Writes go to the stored file so flag and env overrides are not persisted
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => settings::show(&config),
            Some(ConfigCommands::Get { key }) => settings::get(&config, &key),
            Some(ConfigCommands::Set { key, value }) => {
                settings::set(&mut Config::load_file()?, &key, &value)
            }
            Some(ConfigCommands::Reset) => settings::reset(&mut Config::default()),
        },

        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }

        command => {
            let ctx = CommandContext::new(config, cli.app_id)?;
            dispatch(&ctx, command).await
        }
    }
}

async fn dispatch(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Evaluators { command } => match command {
            EvaluatorCommands::List => evaluators::list(ctx).await,
        },

        Commands::Configs { command } => match command {
            ConfigsCommands::List => configs::list(ctx).await,
            ConfigsCommands::Create {
                name,
                evaluator_key,
                settings,
            } => configs::create(ctx, name, evaluator_key, settings).await,
            ConfigsCommands::Update {
                id,
                name,
                evaluator_key,
                settings,
            } => configs::update(ctx, id, name, evaluator_key, settings).await,
            ConfigsCommands::Delete { id, yes } => configs::delete(ctx, id, yes).await,
        },

        Commands::Evaluations { command } => match command {
            EvaluationCommands::List => evaluations::list(ctx).await,
            EvaluationCommands::Show { id } => evaluations::show(ctx, id).await,
            EvaluationCommands::Status { id } => evaluations::status(ctx, id).await,
            EvaluationCommands::Create {
                testset_id,
                variants,
                configs,
            } => evaluations::create(ctx, testset_id, variants, configs).await,
            EvaluationCommands::Delete { ids, yes } => evaluations::delete(ctx, ids, yes).await,
            EvaluationCommands::Scenarios { id } => evaluations::scenarios(ctx, id).await,
        },

        Commands::Annotations { command } => match command {
            AnnotationCommands::List => annotations::list(ctx).await,
            AnnotationCommands::Show { id } => annotations::show(ctx, id).await,
            AnnotationCommands::Status { id } => annotations::status(ctx, id).await,
            AnnotationCommands::Create {
                name,
                testset_id,
                variants,
            } => annotations::create(ctx, name, testset_id, variants).await,
            AnnotationCommands::Delete { ids, yes } => annotations::delete(ctx, ids, yes).await,
            AnnotationCommands::Scenarios { id } => annotations::scenarios(ctx, id).await,
            AnnotationCommands::UpdateScenario {
                annotation_id,
                scenario_id,
                pinned,
                note,
                result,
            } => {
                annotations::update_scenario(ctx, annotation_id, scenario_id, pinned, note, result)
                    .await
            }
        },

        // Handled in `run` before a client is built
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load()?;

    if cli.no_color || !config.colored {
        colored::control::set_override(false);
    }

    // Initialize tracing
    let log_level = if cli.verbose || config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    // Override config with CLI arguments
    if let Some(api_url) = &cli.api_url {
        config.api_endpoint = api_url.clone();
    }
    if let Some(format) = cli.format {
        config.output_format = format.into();
    }

    let verbose = cli.verbose;
    if let Err(e) = run(cli, config).await {
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), e);
        if verbose {
            eprintln!("\n{}", "Details:".dimmed());
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
