// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use cov_comment::{cli, config, report, runner, ui};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve the run before touching any files
    let config = match config::build_run_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let run_report = match runner::run(&config) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if config.json {
        match report::export_json(&run_report.tokens, &run_report.summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ui::print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return;
    }

    report::print_summary(&run_report.summary);

    if config.dry_run {
        if let Some(ref body) = run_report.comment {
            println!("\n=== Comment (dry run) ===\n{}", body);
        }
    }

    if let Some(ref path) = config.output_file {
        ui::status(&format!("wrote {} outputs to {}", run_report.tokens.len(), path.display()));
    }
}
