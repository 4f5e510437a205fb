/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Print the shell exports that enable live tests.
//!
//! A process cannot change its parent shell's environment, so apply the output with `eval`:
//!
//! ```text
//! eval "$(setup-test-env sk-my-api-key)"
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};
use pipeline_s3_utils::test_env;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "setup-test-env")]
#[command(about = "Prints `export` statements for OPENAI_API_KEY and RUN_LIVE_TESTS=1.")]
struct Args {
    /// OpenAI API key to export as OPENAI_API_KEY
    #[arg(
        required = true,
        allow_hyphen_values = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    api_key: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // usage goes to stderr; nothing is exported
            let _ = err.print();
            if err.get(ContextKind::Usage).is_none() {
                eprintln!("\n{}", Args::command().render_usage());
            }
            return ExitCode::from(1);
        }
    };

    tracing::debug!("exporting live test settings");
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout.write_all(test_env::shell_exports(&args.api_key).as_bytes()) {
        tracing::error!("failed to write exports: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
