// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn test_commands_lists_every_subcommand() {
    let listed = strip_ansi(&commands());
    let cmd = crate::Cli::command();
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set() && s.get_name() != "help") {
        assert!(
            listed.contains(&format!("  {} ", sub.get_name())),
            "help list is missing '{}'",
            sub.get_name()
        );
    }
}

#[test]
fn test_template_has_placeholders() {
    let t = template();
    assert!(t.contains("{usage}"));
    assert!(t.contains("{options}"));
    assert!(strip_ansi(&t).contains("Options:"));
}

#[test]
fn test_quickstart_mentions_init() {
    assert!(strip_ansi(&quickstart()).contains("trellis init"));
}
