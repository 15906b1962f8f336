//! Demo entry point for the chaining builder.
//!
//! # Responsibility
//! - Build one sample document through the public chaining API.
//! - Print its rendering to stdout; output is deterministic.
//!
//! Logging is enabled only when `PARENTCHAIN_LOG_DIR` is set (absolute path);
//! `PARENTCHAIN_LOG_LEVEL` overrides the build-mode default.

use log::info;
use parentchain_core::{default_log_level, init_logging, Document, Element, HtmlTags};
use std::env;

const LOG_DIR_ENV: &str = "PARENTCHAIN_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PARENTCHAIN_LOG_LEVEL";

const ROWS: &[(&str, &str)] = &[("ada", "1815"), ("grace", "1906"), ("edsger", "1930")];

fn main() {
    init_logging_from_env();

    println!("parentchain_core version={}", parentchain_core::core_version());
    let document = sample_document();
    info!(
        "event=demo_render module=cli status=ok elements={}",
        document.elements().len()
    );
    println!("{}", document.render());
}

fn init_logging_from_env() {
    let Ok(log_dir) = env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn sample_document() -> Document {
    Document::new()
        .head()
        .child("title")
        .text("people")
        .up()
        .up()
        .body()
        .div()
        .attr("style", "bold")
        .text("born in")
        .up()
        .img()
        .attr("src", "portrait.png")
        .up()
        .table()
        .tr()
        .th()
        .text("name")
        .up()
        .th()
        .text("year")
        .up()
        .up()
        .apply(|table| {
            for (name, year) in ROWS {
                add_row(table, name, year);
            }
        })
        .up()
        .up()
}

fn add_row(table: &mut Element, name: &str, year: &str) {
    table.tr().td().text(name).up().td().text(year).up().up();
}

#[cfg(test)]
mod tests {
    use super::sample_document;

    #[test]
    fn sample_document_renders_table_rows_in_order() {
        let rendered = sample_document().render();

        assert!(rendered.starts_with("<head><title>people</title></head><body>"));
        assert!(rendered.contains("<div style=\"bold\">born in</div><img src=\"portrait.png\"/>"));
        assert!(rendered.contains(
            "<table><tr><th>name</th><th>year</th></tr>\
             <tr><td>ada</td><td>1815</td></tr>\
             <tr><td>grace</td><td>1906</td></tr>\
             <tr><td>edsger</td><td>1930</td></tr></table>"
        ));
        assert!(rendered.ends_with("</body>"));
    }
}
