// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use navstack::history::BoundedHistoryStack;

#[derive(Debug, Arbitrary)]
enum Action {
    Push(u8),
    Pop,
    DeleteAll(u8),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    depth: u8,
    actions: Vec<Action>,
}

fuzz_target!(|input: Input| {
    let depth = usize::from(input.depth.max(1));
    let mut stack = BoundedHistoryStack::new(depth).unwrap();

    for action in input.actions {
        match action {
            Action::Push(v) => stack.push(v),
            Action::Pop => {
                stack.pop();
            }
            Action::DeleteAll(v) => {
                stack.delete_all(&v);
                assert!(!stack.iter().any(|x| *x == v));
            }
            Action::Clear => stack.clear(),
        }
        assert!(stack.len() <= depth);
        assert_eq!(stack.is_empty(), stack.list().tail().is_none());
    }
});
