// Copyright 2018 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{
    io::{self, prelude::*, Stdin, Stdout},
    path::PathBuf,
};

use licman::{Error, LicenseChooser, PackageId};

/// Asks the user on the terminal which license of a choice applies.
pub struct TerminalChooser<R, W> {
    input: R,
    output: W,
}

impl TerminalChooser<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        TerminalChooser::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalChooser { input, output }
    }

    fn ask(&mut self, package: &PackageId, candidates: &[String]) -> io::Result<usize> {
        writeln!(self.output, "--------------------")?;
        writeln!(
            self.output,
            "!!! License CHOICE for package '{}' !!!",
            package.name
        )?;
        writeln!(self.output, "--------------------")?;
        for (i, license) in candidates.iter().enumerate() {
            writeln!(self.output, "{}: {}", i, license)?;
        }

        loop {
            write!(self.output, "\nChoice (number): ")?;
            self.output.flush()?;

            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "no license choice entered",
                ));
            }

            match buf.trim().parse::<usize>() {
                Ok(index) if index < candidates.len() => {
                    writeln!(self.output)?;
                    return Ok(index);
                }
                _ => writeln!(
                    self.output,
                    "Invalid choice {:?}; enter a number from 0 to {}",
                    buf.trim(),
                    candidates.len().saturating_sub(1)
                )?,
            }
        }
    }
}

impl<R: BufRead, W: Write> LicenseChooser for TerminalChooser<R, W> {
    fn choose(&mut self, package: &PackageId, candidates: &[String]) -> Result<usize, Error> {
        self.ask(package, candidates).map_err(|source| Error::Io {
            path: PathBuf::from("<terminal>"),
            source,
        })
    }
}
