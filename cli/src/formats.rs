// Copyright 2018 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, prelude::*};

use licman::Inventory;

fn headline<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "####################")?;
    writeln!(out, "{}", text)?;
    writeln!(out, "####################")?;
    writeln!(out)
}

/// All licenses, then the packages of each license. Packages with several
/// licenses show up more than once.
pub fn print_licenses<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    headline(
        out,
        &format!("License list ({} licenses)", inventory.licenses.len()),
    )?;
    for license in inventory.licenses.keys() {
        writeln!(out, "{}", license)?;
    }
    writeln!(out)?;

    headline(
        out,
        "License/package list (may contain package duplicates if package has multiple licenses)",
    )?;
    for (license, packages) in &inventory.licenses {
        writeln!(out, "License '{}':", license)?;
        writeln!(out, "--------------------")?;
        for package in packages {
            writeln!(out, "  - {}", package.name)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// The packages built by each recipe.
pub fn print_recipes<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    headline(
        out,
        &format!("Recipe list ({} recipes)", inventory.recipes.len()),
    )?;
    for group in &inventory.recipes {
        writeln!(out, "Recipe '{}':", group.recipe)?;
        writeln!(out, "--------------------")?;
        for package in &group.packages {
            writeln!(out, "  - {}", package.name)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Reported packages, one comma separated line each.
pub fn print_packages<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    headline(
        out,
        &format!("Package list ({} packages)", inventory.filtered.len()),
    )?;
    writeln!(out, "Package Name, Version, Recipe, Licenses")?;
    for package in &inventory.filtered {
        writeln!(
            out,
            "{}, {}, {}, {}",
            package.name,
            package.version,
            package.recipe,
            package.license_string()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use licman::{Aggregation, DecisionFile, PackageId, Resolver};

    fn inventory() -> Inventory {
        let manifest = "PACKAGE NAME: a\nPACKAGE VERSION: 1\nRECIPE NAME: r\nLICENSE: MIT & BSD\n\n\
                        PACKAGE NAME: b\nPACKAGE VERSION: 2\nRECIPE NAME: r\nLICENSE: MIT\n\n\
                        PACKAGE NAME: packagegroup-x\nPACKAGE VERSION: 1\nRECIPE NAME: packagegroup-x\nLICENSE: MIT\n";
        let mut store = DecisionFile::new();
        let mut chooser = |_: &PackageId, _: &[String]| -> Result<usize, licman::Error> { Ok(0) };
        // the views do not care about license evidence, so skip validation
        let entries = licman::parse_manifest(manifest).unwrap();
        let packages = Resolver::new(&mut store, &mut chooser)
            .resolve_all(entries)
            .unwrap();
        let agg = Aggregation::build(&packages).unwrap();
        Inventory {
            filtered: licman::filter_packages(agg.packages.clone()),
            merged: agg.packages,
            licenses: agg.licenses,
            recipes: agg.recipes,
            packages,
        }
    }

    fn render(print: fn(&mut Vec<u8>, &Inventory) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        print(&mut out, &inventory()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn licenses_view() {
        let text = render(print_licenses);
        assert!(text.contains("License list (2 licenses)"));
        assert!(text.contains("License 'MIT':\n--------------------\n  - a\n  - b\n  - packagegroup-x\n"));
        assert!(text.contains("License 'BSD':\n--------------------\n  - a\n"));
    }

    #[test]
    fn recipes_view() {
        let text = render(print_recipes);
        assert!(text.contains("Recipe list (2 recipes)"));
        assert!(text.contains("Recipe 'r':\n--------------------\n  - a\n  - b\n"));
    }

    #[test]
    fn packages_view() {
        let text = render(print_packages);
        assert!(text.contains("Package list (2 packages)"));
        assert!(text.contains("Package Name, Version, Recipe, Licenses\na, 1, r, MIT & BSD\nb, 2, r, MIT\n"));
    }
}
