// Copyright 2018 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![allow(clippy::match_bool)]

mod commands;
mod formats;
mod prompt;

use std::{io, process::exit};

use anyhow::{bail, Error};
use clap::Parser;
use log::error;

use licman::{
    write_json_file, DecisionFile, DecisionStore, Environment, EvidenceValidator, Inventory,
};

use self::{commands::*, formats::*, prompt::TerminalChooser};

fn main() {
    let options = Opt::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(options) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn run(options: Opt) -> Result<(), Error> {
    if !options.manifest.exists() {
        bail!("{} does not exist", options.manifest.display());
    }

    let env = Environment::resolve(
        options.builddir.clone(),
        options.tmpdir.clone(),
        options.config.clone(),
    )?;
    let mut store = DecisionFile::open(&env.config_file)?;
    let validator = EvidenceValidator::new(&env.tmp_dir);
    let mut chooser = TerminalChooser::stdio();

    let built = Inventory::from_manifest_file(&options.manifest, &mut store, &mut chooser, &validator);

    // keep choices and seeded sections even if the run failed
    let flushed = store.flush();
    let inventory = match (built, flushed) {
        (Ok(inventory), flushed) => {
            flushed?;
            inventory
        }
        (Err(e), flushed) => {
            if let Err(flush_error) = flushed {
                error!("Could not save decisions: {:#}", Error::from(flush_error));
            }
            return Err(e.into());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match options.view() {
        View::Licenses => print_licenses(&mut out, &inventory)?,
        View::Recipes => print_recipes(&mut out, &inventory)?,
        View::Packages => print_packages(&mut out, &inventory)?,
        View::Json(path) => {
            let packages = inventory.json_packages(&store, &env.tmp_dir)?;
            write_json_file(&packages, &path)?;
        }
        View::Nothing => (),
    }

    Ok(())
}
