mod commands;
mod core;
mod release;

use clap::{Parser, Subcommand};
use crate::core::error::{ForgeError, print_error};

/// Build and release orchestration for the Apktool multi-module project
#[derive(Parser)]
#[command(name = "apktool-forge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct ForgeCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Initialize apktool-forge configuration for a project
  Init {
    /// Overwrite an existing forge.toml without asking
    #[arg(long)]
    force: bool,
  },

  /// Resolve and print the canonical build version
  Version {
    /// Requested build actions (default: build shadowJar proguard)
    actions: Vec<String>,
    /// Output the full version record in JSON format
    #[arg(long)]
    json: bool,
  },

  /// List configured modules and their publishable classification
  Modules {
    /// Output modules in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Assemble the publishing configuration for an invocation
  Plan {
    /// Requested build actions; "release" switches to release mode
    actions: Vec<String>,
    /// Output plan in JSON format (useful for CI/automation)
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = ForgeCli::parse();

  let result = match cli.command {
    Commands::Init { force } => commands::run_init(force),
    Commands::Version { actions, json } => commands::run_version(actions, json),
    Commands::Modules { json } => commands::run_modules(json),
    Commands::Plan { actions, json } => commands::run_plan(actions, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ForgeError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
