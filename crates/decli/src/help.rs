//! Help pages for a program and its commands.

use decli_argparse::help::{self, FieldMeta, HelpMeta};

use crate::command::Command;
use crate::program::Program;

struct ProgramPage<'a> {
    program: &'a Program,
}

impl HelpMeta for ProgramPage<'_> {
    fn title(&self) -> &str {
        self.program.name()
    }

    fn version(&self) -> &str {
        self.program.version()
    }

    fn description(&self) -> &str {
        self.program.description()
    }

    fn usage(&self) -> String {
        match self.program.usage_text() {
            Some(usage) => usage.to_string(),
            None => format!("{} [command] [...argument] [options]", self.program.name()),
        }
    }

    fn commands(&self) -> Vec<(&str, &str)> {
        self.program
            .roots()
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    fn options(&self) -> Vec<&dyn FieldMeta> {
        program_options(self.program)
    }
}

struct CommandPage<'a> {
    program: &'a Program,
    command: &'a Command,
}

impl HelpMeta for CommandPage<'_> {
    fn title(&self) -> &str {
        self.program.name()
    }

    fn version(&self) -> &str {
        self.program.version()
    }

    fn description(&self) -> &str {
        self.command.description()
    }

    fn usage(&self) -> String {
        let mut usage = format!("{} {}", self.program.name(), self.command.name());
        for argument in self.command.arguments() {
            usage.push(' ');
            usage.push_str(argument.synopsis());
        }
        if !self.command.nested().is_empty() {
            usage.push_str(" [command]");
        }
        usage.push_str(" [options]");
        usage
    }

    fn arguments(&self) -> Vec<&dyn FieldMeta> {
        self.command
            .arguments()
            .iter()
            .map(|a| a as &dyn FieldMeta)
            .collect()
    }

    fn commands(&self) -> Vec<(&str, &str)> {
        self.command
            .nested()
            .iter()
            .filter_map(|i| self.program.commands().get(*i))
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    fn options(&self) -> Vec<&dyn FieldMeta> {
        let mut options: Vec<&dyn FieldMeta> = self
            .command
            .options()
            .iter()
            .map(|o| o as &dyn FieldMeta)
            .collect();
        options.extend(program_options(self.program));
        options
    }
}

fn program_options(program: &Program) -> Vec<&dyn FieldMeta> {
    program
        .global_options()
        .iter()
        .chain(program.help_flag())
        .map(|o| o as &dyn FieldMeta)
        .collect()
}

/// Top-level help: root commands, global options and the help option.
pub fn program_help(program: &Program) -> String {
    help::render(&ProgramPage { program })
}

/// Help for one command, listing its nested commands.
pub fn command_help(program: &Program, command: &Command) -> String {
    help::render(&CommandPage { program, command })
}
