// Intent Compiler: Generating Router Startup Configurations from Network Intent
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

use gns3_mover::{Mover, MoverConfig};
use intent_compiler::compiler::compile_router;
use intent_compiler::example_intents::*;
use intent_compiler::writer::write_all;
use intent_compiler::IntentModel;

use clap::{ArgEnum, Parser, Subcommand};
use itertools::Itertools;
use log::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // run clap
    let args = CommandLineArguments::parse();

    // initialize the env logger
    pretty_env_logger::init();

    // match on the action
    match args.cmd {
        MainCommand::Generate { intent, output_dir } => {
            let intent = IntentModel::from_file(&intent)?;
            info!("Generating configurations for {}", intent.router_names().join(", "));
            let paths = write_all(&output_dir, &intent)?;
            info!("Configuration files generated successfully! ({} files)", paths.len());
        }
        MainCommand::Show { router, intent, example } => {
            let intent = match example {
                Some(example) => example.intent(),
                None => IntentModel::from_file(&intent)?,
            };
            print!("{}", compile_router(&router, &intent)?);
        }
        MainCommand::Distribute { source_dir, table, no_prepare } => {
            let mover = Mover::new(MoverConfig::from_file(&table)?)?;
            if !no_prepare {
                mover.prepare_targets()?;
            }
            let report = mover.move_config_files(&source_dir)?;
            info!("Moved {} files, skipped {}", report.moved.len(), report.skipped.len());
            for (src, dst) in report.moved.iter() {
                println!("Moved {} to {}", src.display(), dst.display());
            }
        }
    }
    Ok(())
}

/// This binary generates the startup configuration of every router described in an intent file,
/// and places the generated files into the working directories of the GNS3 routers.
#[derive(Parser, Debug)]
#[clap(name = "Intent Compiler", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Action to perform
    #[clap(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Compile the intent and write the configuration of every router
    #[clap(name = "generate")]
    Generate {
        /// Intent file (JSON)
        #[clap(short = 'i', long, default_value = "intent.json")]
        intent: String,
        /// Directory, in which the configuration files are written
        #[clap(short = 'o', long, default_value = "./configs")]
        output_dir: String,
    },
    /// Print the configuration of a single router
    #[clap(name = "show")]
    Show {
        /// Name of the router (e.g., R1)
        router: String,
        /// Intent file (JSON)
        #[clap(short = 'i', long, default_value = "intent.json")]
        intent: String,
        /// Use one of the example intents instead of the intent file
        #[clap(arg_enum, short = 'e', long)]
        example: Option<Example>,
    },
    /// Move the generated files into the directories of the GNS3 routers
    #[clap(name = "distribute")]
    Distribute {
        /// Directory containing the generated configuration files
        #[clap(short = 's', long, default_value = "./configs")]
        source_dir: String,
        /// JSON file with the target directory of each router
        #[clap(short = 't', long)]
        table: String,
        /// Do not create the target directories
        #[clap(long)]
        no_prepare: bool,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Example {
    SmallNet,
    TwoAsNet,
}

impl Example {
    fn intent(self) -> IntentModel {
        match self {
            Self::SmallNet => SmallNet::intent(),
            Self::TwoAsNet => TwoAsNet::intent(),
        }
    }
}
