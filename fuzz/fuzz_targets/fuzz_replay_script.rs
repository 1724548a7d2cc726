// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use navstack::commands::replay::{apply, parse_script};
use navstack::history::BoundedHistoryStack;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(ops) = parse_script(text) else {
        return;
    };

    let mut stack = BoundedHistoryStack::new(4).unwrap();
    apply(&mut stack, &ops);
    assert!(stack.len() <= 4);
});
