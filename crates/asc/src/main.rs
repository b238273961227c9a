//! asc: AWS describe output as list and detail tables.
//!
//! Reads the JSON the AWS CLI prints for a describe call and renders it
//! through the `asc_table` engine. No AWS API calls are made.

use anyhow::Result;
use asc_logging::{init_logging, LogConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

use cli::asg::AsgAction;
use cli::cloudformation::StackAction;
use cli::config::{Config, CONFIG_ENV};
use cli::context::Context;
use cli::ec2::Ec2Action;
use cli::elb::ElbAction;
use cli::vpc::VpcAction;
use cli::HelpfulError;

#[derive(Parser, Debug)]
#[command(name = "asc", version, about = "Render AWS describe output as tables")]
struct Cli {
    /// Config file (default: <config dir>/asc/config.toml)
    #[arg(long, global = true, env = CONFIG_ENV, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Describe document to read; `-` or omitted reads stdin
    #[arg(long, global = true, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Auto Scaling groups, instances and schedules
    Asg {
        #[command(subcommand)]
        action: AsgAction,
    },
    /// EC2 instances
    Ec2 {
        #[command(subcommand)]
        action: Ec2Action,
    },
    /// Load balancers and target groups
    Elb {
        #[command(subcommand)]
        action: ElbAction,
    },
    /// VPCs and subnets
    Vpc {
        #[command(subcommand)]
        action: VpcAction,
    },
    /// CloudFormation stacks
    #[command(alias = "cfn")]
    Cloudformation {
        #[command(subcommand)]
        action: StackAction,
    },
}

fn run_command(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let ctx = Context::new(config, cli.input);

    match cli.command {
        Commands::Asg { action } => cli::asg::run(&ctx, action),
        Commands::Ec2 { action } => cli::ec2::run(&ctx, action),
        Commands::Elb { action } => cli::elb::run(&ctx, action),
        Commands::Vpc { action } => cli::vpc::run(&ctx, action),
        Commands::Cloudformation { action } => cli::cloudformation::run(&ctx, action),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(LogConfig {
        app_name: "asc",
        verbose: cli.verbose,
        quiet: cli.quiet,
    }) {
        eprintln!("Warning: {err:#}");
    }

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<HelpfulError>() {
                Some(helpful) => eprint!("{helpful}"),
                None => eprintln!("ERROR: {err:#}"),
            }
            ExitCode::from(1)
        }
    }
}
