use std::cell::RefCell;
use std::rc::Rc;

use decli::{Program, ProgramConfig, Value, tokenize};
use serde_json::json;

/// Program whose sink records messages instead of printing them.
fn program(name: &str) -> (Program, Rc<RefCell<Vec<String>>>) {
    let mut program = Program::new(name, "", ProgramConfig::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    program.stderr(move |messages| sink.borrow_mut().extend(messages.iter().cloned()));
    (program, seen)
}

#[test]
fn pizza_order_flags_and_defaults() {
    let (mut program, seen) = program("pizza");
    program
        .command("order", "Order a pizza")
        .option_with("-p, --peppers", "Add peppers", |o| o.boolean())
        .option_with("-c, --cheese <type>", "Cheese type", |o| o.default("marble"))
        .option("-C, --no-cheese", "No cheese")
        .action(|inv| Ok(json!(inv.options)));

    let response = program.exec("order -p --no-cheese").unwrap();
    assert!(seen.borrow().is_empty());
    assert_eq!(
        response.stdout,
        Some(json!({ "peppers": true, "cheese": "marble", "no-cheese": true }))
    );
}

#[test]
fn drink_free_implies_small() {
    let (mut program, seen) = program("drink");
    program
        .command("buy", "Buy a drink")
        .option_with("-s, --size <size>", "Size", |o| {
            o.include(["small", "medium", "big"])
        })
        .option_with("-f, --free", "Free drink", |o| o.implies([("size", "small")]))
        .action(|inv| Ok(json!(inv.options)));

    let response = program.exec("buy --free").unwrap();
    assert!(seen.borrow().is_empty());
    assert_eq!(response.stdout, Some(json!({ "free": true, "size": "small" })));

    let response = program.exec("buy --free -s big").unwrap();
    assert_eq!(response.stdout, Some(json!({ "free": true, "size": "big" })));

    let response = program.exec("buy -s huge").unwrap();
    assert_eq!(
        response.stderr,
        Some(vec!["Options 'size' is not in: small, medium, big".to_string()])
    );
}

#[test]
fn db_delete_reports_every_missing_field() {
    let (mut program, seen) = program("db");
    program
        .command("db:delete", "Delete rows")
        .argument("<table>", "Table")
        .argument_with("<...id>", "Row ids", |a| a.number())
        .option("--dbname <database>", "Database")
        .option_with("--float <float>", "Float", |o| o.float())
        .option_with("--arraarra <string>", "Word", |o| o.include(["lorem", "ipsum"]))
        .action(|_| Ok(Value::Null));

    let response = program.exec("db:delete").unwrap();
    let expected = vec![
        "Arguments 'table' is required",
        "Arguments 'id' is required",
        "Options 'dbname' is required",
        "Options 'float' is required",
        "Options 'arraarra' is required",
    ];
    assert_eq!(response.stderr.unwrap(), expected);
    assert_eq!(*seen.borrow(), expected);
}

#[test]
fn db_delete_runs_with_valid_input() {
    let (mut program, _) = program("db");
    program
        .command("db:delete", "Delete rows")
        .argument("<table>", "Table")
        .argument_with("<...id>", "Row ids", |a| a.number())
        .option("--dbname <database>", "Database")
        .option_with("--float <float>", "Float", |o| o.float())
        .option_with("--arraarra <string>", "Word", |o| o.include(["lorem", "ipsum"]))
        .action(|inv| Ok(json!({ "arguments": inv.arguments, "options": inv.options })));

    let response = program
        .exec("db:delete users 1 2 3 --dbname main --float 0.5 --arraarra lorem")
        .unwrap();
    assert_eq!(
        response.stdout,
        Some(json!({
            "arguments": { "table": "users", "id": [1, 2, 3] },
            "options": { "dbname": "main", "float": 0.5, "arraarra": "lorem" },
        }))
    );
}

#[test]
fn variadic_numbers() {
    let (mut program, _) = program("demo");
    program
        .command("argument:variadic:number", "Numbers")
        .argument_with("numeric", "Numbers", |a| a.variadic().number())
        .action(|inv| Ok(json!(inv.argument("numeric"))));
    program.command("option:one", "One").action(|_| Ok(Value::Null));

    let response = program.exec("argument:variadic:number 100 1000").unwrap();
    assert_eq!(response.stdout, Some(json!([100, 1000])));
}

#[test]
fn unknown_option_is_named() {
    let (mut program, _) = program("demo");
    program
        .command("option:one", "One")
        .option("--one", "One flag")
        .action(|_| Ok(Value::Null));
    program.command("other", "Other").action(|_| Ok(Value::Null));

    let response = program.exec("option:one --bogus x").unwrap();
    assert_eq!(response.stderr, Some(vec!["Unknown options 'bogus'".to_string()]));
}

#[test]
fn empty_input_with_two_commands_is_not_found() {
    let (mut program, seen) = program("demo");
    program.command("alpha", "").action(|_| Ok(json!("a")));
    program.command("beta", "").action(|_| Ok(json!("b")));

    let response = program.exec("").unwrap();
    assert_eq!(response.stderr, Some(vec!["Command '' not found.".to_string()]));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn variadic_takes_all_remaining_tokens() {
    let (mut program, _) = program("demo");
    program
        .command("collect", "")
        .argument("[items...]", "Items")
        .action(|inv| Ok(json!(inv.arguments)));

    let response = program.exec("collect a b c").unwrap();
    assert_eq!(response.stdout, Some(json!({ "items": ["a", "b", "c"] })));
}

#[test]
fn conflicting_options() {
    let (mut program, _) = program("pizza");
    program
        .command("order", "")
        .option_with("-c, --cheese <type>", "", |o| o.conflicts(["no-cheese"]))
        .option("-C, --no-cheese", "")
        .action(|_| Ok(Value::Null));

    let response = program.exec("order -c blue -C").unwrap();
    assert_eq!(
        response.stderr,
        Some(vec![
            "Option '-c, --cheese <type>' cannot be used with option '-C, --no-cheese'".to_string()
        ])
    );
}

#[test]
fn aliases_select_commands() {
    let (mut program, _) = program("pizza");
    program.command("order", "").action(|_| Ok(json!("order")));
    program
        .command("pay", "")
        .alias(["checkout"])
        .argument("<amount>", "")
        .action(|inv| Ok(json!(inv.argument("amount"))));

    let response = program.exec("checkout 20").unwrap();
    assert_eq!(response.stdout, Some(json!("20")));
}

#[test]
fn nested_commands_dispatch() {
    let (mut program, _) = program("pizza");
    {
        let mut order = program.command("order", "");
        order.action(|_| Ok(json!("order")));
        order.command("list", "").action(|_| Ok(json!("listing")));
    }
    program.command("pay", "").action(|_| Ok(json!("pay")));

    assert_eq!(program.exec("order list").unwrap().stdout, Some(json!("listing")));
    assert_eq!(program.exec("order").unwrap().stdout, Some(json!("order")));
}

#[test]
fn env_values_override_flags() {
    let (mut program, _) = program("db");
    program.env_source(vec![("DB_NAME".to_string(), "prod".to_string())]);
    program
        .command("connect", "")
        .option_with("--db <name>", "", |o| o.env("DB_NAME"))
        .action(|inv| Ok(json!(inv.option("db"))));

    assert_eq!(program.exec("connect --db dev").unwrap().stdout, Some(json!("prod")));
}

#[test]
fn custom_validator_message_is_verbatim() {
    let (mut program, _) = program("app");
    program
        .command("greet", "")
        .argument_with("<name>", "", |a| {
            a.validator(|value| match value {
                Some(Value::String(s)) if s.len() >= 3 => Ok(json!(s)),
                _ => Err("name must have at least 3 characters".to_string()),
            })
        })
        .action(|inv| Ok(json!(inv.argument("name"))));

    let response = program.exec("greet al").unwrap();
    assert_eq!(
        response.stderr,
        Some(vec!["name must have at least 3 characters".to_string()])
    );
    assert_eq!(program.exec("greet alice").unwrap().stdout, Some(json!("alice")));
}

#[test]
fn tokenizing_is_idempotent() {
    let input = "order -p --cheese blue brie -x";
    assert_eq!(tokenize(input), tokenize(input));
    let (program, _) = program("pizza");
    assert_eq!(program.parse(input), tokenize(input));
}

#[test]
fn implied_keys_are_not_unknown_options() {
    let (mut program, seen) = program("drink");
    program
        .command("buy", "Buy a drink")
        .option_with("-f, --free", "Free drink", |o| o.implies([("discount", "full")]))
        .action(|inv| Ok(json!(inv.options)));

    let response = program.exec("buy --free").unwrap();
    assert!(seen.borrow().is_empty(), "unexpected errors: {:?}", seen.borrow());
    assert_eq!(response.stdout, Some(json!({ "free": true })));

    let response = program.exec("buy --free --discount half").unwrap();
    assert_eq!(
        response.stderr,
        Some(vec!["Unknown options 'discount'".to_string()])
    );
}
