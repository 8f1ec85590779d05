// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for pev

use colored::Colorize;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;

use super::commands::{ColorChoice, OutputFormat};
use super::output::ReportFormatter;
use pev::{RenderOptions, SecondsScale, Visualizer};

/// Handle the render command
pub fn handle_render(
    file: Option<PathBuf>,
    format: OutputFormat,
    width: usize,
    color: ColorChoice,
    fix_seconds: bool,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let buffer = read_input(file.as_ref())?;

    let use_color = resolve_color(color);

    let seconds_scale = if fix_seconds {
        SecondsScale::Corrected
    } else {
        SecondsScale::Legacy
    };
    let options = RenderOptions::default()
        .with_wrap_width(width)
        .with_color(use_color)
        .with_seconds_scale(seconds_scale)
        .with_parallel(parallel);
    let visualizer = Visualizer::new(options);

    let mut explains = match pev::decode(&buffer) {
        Ok(explains) => explains,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return Err(e.into());
        }
    };

    visualizer.process(&mut explains);
    let output = ReportFormatter::format(&visualizer, &explains, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Read the whole input, from stdin when no file (or "-") is given
fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            log::debug!("Reading explain output from {:?}", path);
            std::fs::read(path).map_err(|e| -> Box<dyn std::error::Error> {
                eprintln!("{}", format!("Error: cannot read {:?}: {}", path, e).red());
                e.into()
            })
        }
        _ => {
            log::debug!("Reading explain output from stdin");
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn resolve_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}
