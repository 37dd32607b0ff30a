use anyhow::Result;
use specgen::cli::{self, GenerateCli};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args = match cli::parse_args::<GenerateCli>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    cli::init_tracing(args.global.verbose);

    cli::finish(run(args))
}

fn run(args: GenerateCli) -> Result<()> {
    info!("spec-generate: {:?}", args);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(cli::commands::generate::execute(args))
}
