//! Command dispatch logic for wastegraph

use std::env;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use wastegraph_core::config::Config;
use wastegraph_core::error::Result;

mod command;
mod macros;

pub use command::{Command, CommandContext};
use command::NoCommand;
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let base_dir = env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &base_dir)?;

    trace_command!(cli, start, "load_config");

    let ctx = CommandContext::new(cli, &base_dir, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        use crate::commands::*;

        let result = match self {
            Commands::Init => init::execute(ctx),
            Commands::Reset(args) => reset::execute(ctx, args),
            Commands::Save(args) => save::execute(ctx, args),
            Commands::List => list::execute(ctx),
            Commands::Show(args) => show::execute(ctx, args.id),
            Commands::Delete(args) => delete::execute(ctx, args.id),
            Commands::Route(args) => route::execute(ctx, args),
            Commands::Distances(args) => distances::execute(ctx, args),
            Commands::Schedule => schedule::execute(ctx),
            Commands::Validate => validate::execute(ctx),
            Commands::Paths(args) => paths::execute(ctx, args),
            Commands::Selftest => selftest::execute(ctx),
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
