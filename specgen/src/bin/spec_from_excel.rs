use anyhow::Result;
use specgen::cli::{self, FromExcelCli};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args = match cli::parse_args::<FromExcelCli>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    cli::init_tracing(args.global.verbose);

    cli::finish(run(args))
}

fn run(args: FromExcelCli) -> Result<()> {
    info!("spec-from-excel: {:?}", args);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(cli::commands::from_excel::execute(args))
}
