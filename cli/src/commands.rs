// Copyright 2018 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "licman", version, about = "License reports from license.manifest files")]
#[command(group(ArgGroup::new("view").args(["licenses", "recipes", "packages", "json"])))]
pub struct Opt {
    #[arg(value_name = "MANIFEST", help = "path to the license.manifest file")]
    pub manifest: PathBuf,
    #[arg(
        long = "licenses",
        short = 'l',
        help = "show each license type and which packages use it"
    )]
    pub licenses: bool,
    #[arg(
        long = "recipes",
        short = 'r',
        help = "show each recipe and which packages it contains"
    )]
    pub recipes: bool,
    #[arg(
        long = "packages",
        short = 'p',
        help = "show each package, version and license type"
    )]
    pub packages: bool,
    #[arg(
        long = "json",
        short = 'j',
        value_name = "FILE",
        help = "write packages in JSON format to the given file"
    )]
    pub json: Option<PathBuf>,
    #[arg(
        long = "builddir",
        short = 'b',
        help = "build directory (defaults to $BUILDDIR)"
    )]
    pub builddir: Option<PathBuf>,
    #[arg(
        long = "tmpdir",
        short = 't',
        help = "build tmp directory (defaults to $TMPDIR)"
    )]
    pub tmpdir: Option<PathBuf>,
    #[arg(
        long = "config",
        short = 'c',
        help = "decision file (defaults to license-parser.ini in the build directory)"
    )]
    pub config: Option<PathBuf>,
}

pub enum View {
    Licenses,
    Recipes,
    Packages,
    Json(PathBuf),
    Nothing,
}

impl Opt {
    pub fn view(&self) -> View {
        if self.licenses {
            View::Licenses
        } else if self.recipes {
            View::Recipes
        } else if self.packages {
            View::Packages
        } else if let Some(ref path) = self.json {
            View::Json(path.clone())
        } else {
            View::Nothing
        }
    }
}
