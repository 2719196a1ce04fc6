//! Help text layout.
//!
//! Rendering is driven by two small traits so the layout does not depend on
//! how commands and fields are stored.

/// A row in the `Arguments:` or `Options:` section.
pub trait FieldMeta {
    fn synopsis(&self) -> &str;
    fn description(&self) -> &str;
    fn required(&self) -> bool {
        false
    }
    fn default_value(&self) -> Option<String> {
        None
    }
    fn hidden(&self) -> bool {
        false
    }
}

/// Everything a help page shows.
pub trait HelpMeta {
    fn title(&self) -> &str;
    fn version(&self) -> &str;
    fn description(&self) -> &str;
    fn usage(&self) -> String;
    fn arguments(&self) -> Vec<&dyn FieldMeta> {
        Vec::new()
    }
    /// `(name, description)` rows for the `Commands:` section.
    fn commands(&self) -> Vec<(&str, &str)> {
        Vec::new()
    }
    fn options(&self) -> Vec<&dyn FieldMeta> {
        Vec::new()
    }
}

fn format_field_help(def: &dyn FieldMeta) -> String {
    let mut out = def.description().trim().to_string();
    if def.required() {
        if out.is_empty() {
            out.push_str("required");
        } else {
            out.push_str(" (required)");
        }
    }
    if let Some(default_value) = def.default_value() {
        if out.is_empty() {
            out.push_str(&format!("[default: {default_value}]"));
        } else {
            out.push_str(&format!(" [default: {default_value}]"));
        }
    }
    out
}

fn push_section(out: &mut String, title: &str, rows: Vec<(String, String)>) {
    if rows.is_empty() {
        return;
    }
    out.push_str(&format!("\n{title}:\n"));
    let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {}\n", left));
        } else {
            out.push_str(&format!("  {:width$}  {}\n", left, help, width = width));
        }
    }
}

fn field_rows(fields: Vec<&dyn FieldMeta>) -> Vec<(String, String)> {
    fields
        .into_iter()
        .filter(|f| !f.hidden())
        .map(|f| (f.synopsis().to_string(), format_field_help(f)))
        .collect()
}

/// Render a help page.
pub fn render<M: HelpMeta + ?Sized>(meta: &M) -> String {
    let mut out = String::new();

    let mut header = meta.title().trim().to_string();
    if !meta.version().trim().is_empty() {
        header.push(' ');
        header.push_str(meta.version().trim());
    }
    if !meta.description().trim().is_empty() {
        header.push_str(" — ");
        header.push_str(meta.description().trim());
    }
    out.push_str(&header);
    out.push('\n');

    out.push_str(&format!("\nUsage: {}\n", meta.usage().trim()));

    push_section(&mut out, "Arguments", field_rows(meta.arguments()));

    let commands = meta
        .commands()
        .into_iter()
        .map(|(name, desc)| (name.to_string(), desc.trim().to_string()))
        .collect();
    push_section(&mut out, "Commands", commands);

    push_section(&mut out, "Options", field_rows(meta.options()));

    out
}
