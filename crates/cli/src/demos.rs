//! Built-in example programs.

use clap::ValueEnum;
use decli::value::render;
use decli::{Invocation, Program, ProgramConfig, Value};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Pizza ordering with flags, defaults and conflicts
    Pizza,
    /// Drink ordering with allowed values and implied options
    Drink,
    /// Row deletion with typed, required and variadic fields
    Db,
}

impl Demo {
    pub fn build(self, config: ProgramConfig) -> Program {
        match self {
            Demo::Pizza => pizza(config),
            Demo::Drink => drink(config),
            Demo::Db => db(config),
        }
    }
}

fn text(inv: &Invocation<'_>, id: &str) -> String {
    inv.option(id).map(render).unwrap_or_default()
}

fn pizza(config: ProgramConfig) -> Program {
    let mut program = Program::new("Pizza CLI", "An application for pizza ordering", config);
    {
        let mut order = program.command("order", "New order");
        order
            .argument_with("name", "Pizza name", |a| a.default("margherita"))
            .option("-p, --peppers", "Add peppers")
            .option_with("-c, --cheese <type>", "Add the specified type of cheese", |o| {
                o.default("marble")
            })
            .option("-C, --no-cheese", "You do not want any cheese")
            .action(|inv| {
                let name = inv.argument("name").map(render).unwrap_or_default();
                let mut lines = vec![format!("You ordered a {name} pizza with:")];
                if inv.flag("peppers") {
                    lines.push("- Peppers".to_string());
                }
                if inv.flag("no-cheese") {
                    lines.push("- No cheese".to_string());
                } else {
                    lines.push(format!("- {} cheese", text(inv, "cheese")));
                }
                Ok(Value::String(lines.join("\n")))
            });
        order
            .command("list", "List today's orders")
            .option_with("--limit <n>", "How many orders", |o| o.number().default(3))
            .action(|inv| {
                let limit = inv.option("limit").and_then(Value::as_i64).unwrap_or(3);
                Ok(json!((1..=limit).map(|n| format!("order #{n}")).collect::<Vec<_>>()))
            });
    }
    program
        .command("menu", "Show the menu")
        .action(|_| Ok(json!(["margherita", "marinara", "diavola"])));
    program
}

fn drink(config: ProgramConfig) -> Program {
    let mut program = Program::new("Drink CLI", "An application for drink ordering", config);
    program
        .command("buy", "Buy new drink")
        .alias(["order"])
        .option_with("size", "Select size", |o| {
            o.include(["small", "medium", "big"]).default("medium")
        })
        .option_with("free", "Free drink", |o| o.implies([("size", "small")]))
        .action(|inv| {
            let mut lines = vec![
                "You ordered a drink with:".to_string(),
                format!("- {} size", text(inv, "size")),
            ];
            if inv.flag("free") {
                lines.push("- Free price".to_string());
            }
            Ok(Value::String(lines.join("\n")))
        });
    program
}

fn db(config: ProgramConfig) -> Program {
    let mut program = Program::new("DB CLI", "Database maintenance", config);
    program.option("--dry-run", "Print what would happen");
    program
        .command("db:delete", "Delete rows by id")
        .argument("<table>", "Table name")
        .argument_with("<...id>", "Row ids", |a| a.number())
        .option("--dbname <database>", "Database name")
        .option_with("--float <float>", "Fraction of rows to keep", |o| o.float())
        .option_with("--arraarra <string>", "Filler word", |o| {
            o.include(["lorem", "ipsum"])
        })
        .action(|inv| {
            Ok(json!({
                "deleted": inv.argument("id"),
                "table": inv.argument("table"),
                "database": inv.option("dbname"),
                "dryRun": inv.flag("dry-run"),
            }))
        });
    program
        .command("db:list", "List tables")
        .allow_unknown_option(true)
        .action(|inv| Ok(json!({ "tables": ["users", "orders"], "filters": inv.unknown })));
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(demo: Demo) -> Program {
        let mut program = demo.build(ProgramConfig::default());
        program.stderr(|_| {});
        program
    }

    #[test]
    fn pizza_defaults() {
        let mut program = quiet(Demo::Pizza);
        let response = program.exec("order -p --no-cheese").unwrap();
        assert_eq!(
            response.stdout,
            Some(json!("You ordered a margherita pizza with:\n- Peppers\n- No cheese"))
        );
        let response = program.exec("order -c blue").unwrap();
        assert_eq!(
            response.stdout,
            Some(json!("You ordered a margherita pizza with:\n- blue cheese"))
        );
    }

    #[test]
    fn pizza_nested_list() {
        let mut program = quiet(Demo::Pizza);
        let response = program.exec("order list --limit 2").unwrap();
        assert_eq!(response.stdout, Some(json!(["order #1", "order #2"])));
    }

    #[test]
    fn drink_free_is_small() {
        let mut program = quiet(Demo::Drink);
        let response = program.exec("buy --free").unwrap();
        assert_eq!(
            response.stdout,
            Some(json!("You ordered a drink with:\n- small size\n- Free price"))
        );
    }

    #[test]
    fn db_requires_fields() {
        let mut program = quiet(Demo::Db);
        let response = program.exec("db:delete").unwrap();
        assert_eq!(response.stderr.map(|e| e.len()), Some(5));
    }
}
