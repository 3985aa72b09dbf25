use std::env;
use std::process::Command as BaseCommand;

use clap::{Arg, Command};

#[macro_use]
extern crate log;
extern crate env_logger;

mod commands {
    pub(crate) mod server;
}

mod runtime {
    pub(crate) mod context;
    pub(crate) mod docker;
    pub(crate) mod engine;
    pub(crate) mod error;
    pub(crate) mod provisioner;
}

mod api;

mod config {
    pub(crate) mod api;
    pub(crate) mod config;
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let app = Command::new("foundry")
        .version("0.1.0")
        .about("Builds OS base images and starts containers over HTTP")
        .arg(
            Arg::new("context")
                .required(false)
                .help("Sets the context to use (e.g., development, staging, production)")
                .long("context")
                .short('c')
        )
        .subcommand(
            Command::new("server")
                .args_conflicts_with_subcommands(true)
                .flatten_help(true)
                .subcommand(
                    commands::server::command_config(),
                )
        );

    let matches = app.get_matches();
    let context = matches.get_one::<String>("context")
        .map(|s| s.as_str())
        .unwrap_or("");

    let config = config::config::load_config(context);

    match matches.subcommand() {
        Some(("server", sub_matches)) => {
            let server_command = sub_matches.subcommand().unwrap_or(("start", sub_matches));
            match server_command {
                ("start", sub_matches) => {
                    commands::server::execute(
                        sub_matches,
                        config,
                    ).await
                }
                _ => {}
            }
        }

        _ => {
            let process_args: Vec<String> = env::args().collect();
            let process_name = process_args[0].as_str().to_owned();

            let mut subprocess = BaseCommand::new(process_name.as_str())
                .arg("--help")
                .spawn()
                .expect("failed to execute process");

            subprocess
                .wait()
                .expect("failed to wait for process");
        }
    }
}
