//! Help and version text
//!
//! The help screen is rendered by clap from a command assembled out of the
//! option table; clap never parses the arguments itself.

use clap::{Arg, ArgAction, Command};
use std::fmt::Write;

use crate::config::TreeType;
use crate::options::{Handler, OptionSpec, OPTIONS};
use crate::VERSION;

pub const BINARY_NAME: &str = "grove";

/// clap command mirroring the option table
pub fn command() -> Command {
    OPTIONS.iter().fold(
        Command::new(BINARY_NAME)
            .version(VERSION)
            .about("Random forests for quantile and instrumental estimation")
            .override_usage(format!("{BINARY_NAME} [options]"))
            .disable_help_flag(true)
            .disable_version_flag(true)
            .after_help(tree_type_help()),
        |command, spec| command.arg(to_arg(spec)),
    )
}

fn to_arg(spec: &OptionSpec) -> Arg {
    let arg = Arg::new(spec.long)
        .long(spec.long)
        .short(spec.short)
        .help(spec.help);

    match spec.handler {
        Handler::Switch(_) => arg.action(ArgAction::SetTrue),
        Handler::Value(_) => arg.action(ArgAction::Set).value_name(spec.value_name),
        Handler::Help => arg.action(ArgAction::Help),
        Handler::Version => arg.action(ArgAction::Version),
    }
}

fn tree_type_help() -> String {
    let mut text = String::from("Tree types (--treetype):\n");
    for (code, tree_type) in TreeType::all() {
        let note = if tree_type.requires_instrument() {
            " (requires --instrumentvarname and --statusvarname)"
        } else {
            ""
        };
        // writing to a String cannot fail
        let _ = writeln!(text, "  {code:>3}  {tree_type}{note}");
    }
    text.push_str("\nSee README file for details and examples.");
    text
}

pub fn render_help() -> String {
    command().render_help().to_string()
}

pub fn render_version() -> String {
    format!(
        "{BINARY_NAME} version: {VERSION}\n\
         \n\
         Please cite:\n\
         Wright, M. N. & Ziegler, A. (2017). ranger: A fast implementation of random forests \
         for high dimensional data in C++ and R. Journal of Statistical Software 77:1-17.\n"
    )
}
