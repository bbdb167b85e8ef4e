use std::process;

use anyhow::Result;
use tracing::error;

use argbind::cli;

fn main() -> Result<()> {
    let args = cli::parse_args()?;
    argbind::init_logging(args.command.log_level())?;

    match &args.command {
        cli::Commands::Describe(opts) => {
            print!("{}", argbind::run_describe(opts));
        }
        cli::Commands::Bind(opts) => match argbind::run_bind(opts) {
            Ok(dump) => print!("{}", dump),
            Err(e) => {
                error!("{:#}", e);
                process::exit(1);
            }
        },
    }

    Ok(())
}
