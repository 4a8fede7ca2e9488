use std::fs;

use crate::cli::Cli;
use crate::error::AppError;
use crate::fixtures::UCI_LOG_FIXTURES;
use crate::generate::{GenerateOptions, is_identifier, plan_stubs};
use crate::output::{output_stubs_json, render_suite};

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let helper = cli.helper_name();
    if !is_identifier(helper) {
        return Err(AppError::InvalidHelper {
            input: helper.to_string(),
        });
    }

    // Positional paths replace the bundled list; otherwise generate the
    // full fixture suite.
    let entries: Vec<String> = if cli.paths.is_empty() {
        UCI_LOG_FIXTURES.iter().map(|p| (*p).to_string()).collect()
    } else {
        cli.paths.clone()
    };

    let options = GenerateOptions {
        strip_prefix: cli.prefix().to_string(),
        strip_suffix: cli.suffix().to_string(),
    };
    let stubs = plan_stubs(&entries, &options);

    if cli.debug {
        eprintln!("Generating {} test stubs", stubs.len());
        for stub in &stubs {
            eprintln!("  {} <- {}", stub.name, stub.path);
        }
    }

    let rendered = if cli.json {
        let mut json = output_stubs_json(&stubs, helper);
        json.push('\n');
        json
    } else {
        render_suite(&stubs, helper)
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered).map_err(|source| AppError::WriteOutput {
            path: path.clone(),
            source,
        })?,
        None => print!("{rendered}"),
    }

    Ok(())
}
