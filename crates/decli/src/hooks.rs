//! Lifecycle hooks run around actions and error reporting.

use std::fmt;

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    PreAction,
    PostAction,
    PreError,
    PostError,
}

/// What a hook is told about the current exec.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub kind: HookKind,
    /// The matched command, when there is one.
    pub command: Option<&'a Command>,
    /// Messages about to be (or just) reported; empty around actions.
    pub errors: &'a [String],
}

pub type Hook = Box<dyn Fn(&HookContext<'_>)>;

/// Registered hooks in registration order.
#[derive(Default)]
pub struct Hooks {
    entries: Vec<(HookKind, Hook)>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(kind, _)| kind))
            .finish()
    }
}

impl Hooks {
    pub fn add<F>(&mut self, kind: HookKind, hook: F)
    where
        F: Fn(&HookContext<'_>) + 'static,
    {
        self.entries.push((kind, Box::new(hook)));
    }

    pub fn run(&self, context: &HookContext<'_>) {
        for (kind, hook) in &self.entries {
            if *kind == context.kind {
                hook(context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn runs_matching_kind_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = Hooks::default();
        for (tag, kind) in [
            ("a", HookKind::PreError),
            ("b", HookKind::PostError),
            ("c", HookKind::PreError),
        ] {
            let seen = Rc::clone(&seen);
            hooks.add(kind, move |ctx| seen.borrow_mut().push((tag, ctx.errors.len())));
        }
        let errors = vec!["boom".to_string()];
        hooks.run(&HookContext {
            kind: HookKind::PreError,
            command: None,
            errors: &errors,
        });
        assert_eq!(*seen.borrow(), vec![("a", 1), ("c", 1)]);
    }
}
