use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W+").expect("static pattern");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    Text,
    Password,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Password => "password",
        }
    }
}

pub trait FormBuilder {
    fn add_title(&mut self, title: &str);
    fn add_label(&mut self, text: &str, row: usize, column: usize, target: &str);
    fn add_entry(&mut self, variable: &str, row: usize, column: usize, kind: EntryKind);
    fn add_button(&mut self, text: &str, row: usize, column: usize);

    fn form(&self) -> String;
}

/// Director for the sample: a username/password login form.
pub fn create_login_form(builder: &mut dyn FormBuilder) -> String {
    builder.add_title("Login");
    builder.add_label("Username", 0, 0, "username");
    builder.add_entry("username", 0, 1, EntryKind::Text);
    builder.add_label("Password", 1, 0, "password");
    builder.add_entry("password", 1, 1, EntryKind::Password);
    builder.add_button("Login", 2, 0);
    builder.add_button("Cancel", 2, 1);
    builder.form()
}

/// Lays cells out as an HTML table, ordered by (row, column).
#[derive(Debug, Clone)]
pub struct HtmlFormBuilder {
    title: String,
    cells: BTreeMap<(usize, usize), String>,
}

impl HtmlFormBuilder {
    pub fn new() -> Self {
        HtmlFormBuilder {
            title: "HtmlFormBuilder".to_string(),
            cells: BTreeMap::new(),
        }
    }
}

impl Default for HtmlFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBuilder for HtmlFormBuilder {
    fn add_title(&mut self, title: &str) {
        self.title = html_escape::encode_text(title).into_owned();
    }

    fn add_label(&mut self, text: &str, row: usize, column: usize, target: &str) {
        let cell = format!(
            "<td><label for=\"{}\">{}:</label></td>",
            html_escape::encode_double_quoted_attribute(target),
            html_escape::encode_text(text)
        );
        self.cells.insert((row, column), cell);
    }

    fn add_entry(&mut self, variable: &str, row: usize, column: usize, kind: EntryKind) {
        let cell = format!(
            "<td><input name=\"{}\" type=\"{}\" /></td>",
            html_escape::encode_double_quoted_attribute(variable),
            kind.as_str()
        );
        self.cells.insert((row, column), cell);
    }

    fn add_button(&mut self, text: &str, row: usize, column: usize) {
        let cell = format!(
            "<td><input type=\"submit\" value=\"{}\" /></td>",
            html_escape::encode_double_quoted_attribute(text)
        );
        self.cells.insert((row, column), cell);
    }

    fn form(&self) -> String {
        let mut html = vec![
            format!(
                "<!doctype html>\n<html><head><title>{}</title></head><body>",
                self.title
            ),
            "<form><table border=\"0\">".to_string(),
        ];
        let mut current_row = None;
        for (&(row, _), cell) in &self.cells {
            match current_row {
                None => html.push("  <tr>".to_string()),
                Some(previous) if previous != row => html.push("  </tr>\n  <tr>".to_string()),
                Some(_) => {}
            }
            current_row = Some(row);
            html.push(format!("    {cell}"));
        }
        if current_row.is_some() {
            html.push("  </tr>".to_string());
        }
        html.push("</table></form></body></html>".to_string());
        html.join("\n")
    }
}

/// Emits a Python/Tk script that creates the form as a dialog window.
#[derive(Debug, Clone)]
pub struct TkFormBuilder {
    title: String,
    statements: Vec<String>,
}

impl TkFormBuilder {
    pub fn new() -> Self {
        TkFormBuilder {
            title: "TkFormBuilder".to_string(),
            statements: Vec::new(),
        }
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

impl Default for TkFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns arbitrary text into a widget identifier: non-word characters are
/// dropped, a leading digit gets a `_` prefix, and the first letter is
/// lower-cased when `start_lower` is set.
pub fn canonicalize(text: &str, start_lower: bool) -> String {
    let word = NON_WORD.replace_all(text, "");
    let mut chars = word.chars();
    match chars.next() {
        None => "_".to_string(),
        Some(first) if first.is_numeric() => format!("_{word}"),
        Some(first) if start_lower => first.to_lowercase().chain(chars).collect(),
        Some(_) => word.to_string(),
    }
}

fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

impl FormBuilder for TkFormBuilder {
    fn add_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn add_label(&mut self, text: &str, row: usize, column: usize, _target: &str) {
        let name = canonicalize(text, true);
        self.statements.push(format!(
            "self.{name}Label = ttk.Label(self, text=\"{}:\")",
            quoted(text)
        ));
        self.statements.push(format!(
            "self.{name}Label.grid(row={row}, column={column}, sticky=tk.W, padx=\"0.75m\", pady=\"0.75m\")"
        ));
    }

    fn add_entry(&mut self, variable: &str, row: usize, column: usize, kind: EntryKind) {
        let name = canonicalize(variable, true);
        let extra = match kind {
            EntryKind::Password => ", show=\"*\"",
            EntryKind::Text => "",
        };
        self.statements
            .push(format!("self.{name}Entry = ttk.Entry(self{extra})"));
        self.statements.push(format!(
            "self.{name}Entry.grid(row={row}, column={column}, sticky=(tk.W, tk.E), padx=\"0.75m\", pady=\"0.75m\")"
        ));
    }

    fn add_button(&mut self, text: &str, row: usize, column: usize) {
        let name = canonicalize(text, true);
        self.statements.push(format!(
            "self.{name}Button = ttk.Button(self, text=\"{}\")",
            quoted(text)
        ));
        self.statements.push(format!(
            "self.{name}Button.grid(row={row}, column={column}, padx=\"0.75m\", pady=\"0.75m\")"
        ));
    }

    fn form(&self) -> String {
        let name = canonicalize(&self.title, false);
        let title = quoted(&self.title);
        let statements = self.statements.join("\n        ");
        format!(
            r#"#!/usr/bin/env python3
import tkinter as tk
import tkinter.ttk as ttk

class {name}Form(tk.Toplevel):

    def __init__(self, master):
        super().__init__(master)
        self.withdraw()     # hide until ready to show
        self.title("{title}")
        {statements}
        self.bind("<Escape>", lambda *args: self.destroy())
        self.deiconify()    # show when widgets are created and laid out
        if self.winfo_viewable():
            self.transient(master)
        self.wait_visibility()
        self.grab_set()
        self.wait_window(self)

if __name__ == "__main__":
    application = tk.Tk()
    window = {name}Form(application)
    application.protocol("WM_DELETE_WINDOW", application.quit)
    application.mainloop()
"#
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormStyle {
    #[default]
    Html,
    Tk,
}

impl FormStyle {
    pub fn builder(self) -> Box<dyn FormBuilder> {
        debug!(style = ?self, "selecting form builder");
        match self {
            FormStyle::Html => Box::new(HtmlFormBuilder::new()),
            FormStyle::Tk => Box::new(TkFormBuilder::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_login_form() {
        let html = create_login_form(&mut HtmlFormBuilder::new());
        let expected = [
            "<!doctype html>",
            "<html><head><title>Login</title></head><body>",
            "<form><table border=\"0\">",
            "  <tr>",
            "    <td><label for=\"username\">Username:</label></td>",
            "    <td><input name=\"username\" type=\"text\" /></td>",
            "  </tr>",
            "  <tr>",
            "    <td><label for=\"password\">Password:</label></td>",
            "    <td><input name=\"password\" type=\"password\" /></td>",
            "  </tr>",
            "  <tr>",
            "    <td><input type=\"submit\" value=\"Login\" /></td>",
            "    <td><input type=\"submit\" value=\"Cancel\" /></td>",
            "  </tr>",
            "</table></form></body></html>",
        ]
        .join("\n");
        assert_eq!(html, expected);
    }

    #[test]
    fn test_html_cells_sorted_regardless_of_insert_order() {
        let mut builder = HtmlFormBuilder::new();
        builder.add_button("Second", 0, 1);
        builder.add_button("First", 0, 0);
        let html = builder.form();
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut builder = HtmlFormBuilder::new();
        builder.add_title("<Admin & Co>");
        builder.add_label("a<b", 0, 0, "x");
        let html = builder.form();
        assert!(html.contains("<title>&lt;Admin &amp; Co&gt;</title>"));
        assert!(html.contains(">a&lt;b:</label>"));
    }

    #[test]
    fn test_empty_html_form_has_no_rows() {
        let html = HtmlFormBuilder::new().form();
        assert!(!html.contains("<tr>"));
        assert!(!html.contains("</tr>"));
        assert!(html.contains("<title>HtmlFormBuilder</title>"));
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("Username", true), "username");
        assert_eq!(canonicalize("Log In!", true), "logIn");
        assert_eq!(canonicalize("Login", false), "Login");
        assert_eq!(canonicalize("2nd Try", true), "_2ndTry");
        assert_eq!(canonicalize("!!", true), "_");
        assert_eq!(canonicalize("٣ Items", true), "_٣Items");
    }

    #[test]
    fn test_quoted_escapes_python_specials() {
        assert_eq!(quoted(r#"say "hi" \ bye"#), r#"say \"hi\" \\ bye"#);
        assert_eq!(quoted("two\nlines\r"), "two\\nlines\\r");
    }

    #[test]
    fn test_tk_title_with_newline_stays_on_one_line() {
        let mut builder = TkFormBuilder::new();
        builder.add_title("Multi\nLine");
        builder.add_button("Ok\nNow", 0, 0);
        let script = builder.form();
        assert!(script.contains("self.title(\"Multi\\nLine\")"));
        assert!(script.contains("self.okNowButton = ttk.Button(self, text=\"Ok\\nNow\")"));
    }

    #[test]
    fn test_tk_login_form() {
        let mut builder = TkFormBuilder::new();
        let script = create_login_form(&mut builder);

        assert_eq!(builder.statements().len(), 12);
        assert!(script.starts_with("#!/usr/bin/env python3\n"));
        assert!(script.contains("class LoginForm(tk.Toplevel):"));
        assert!(script.contains("self.title(\"Login\")"));
        assert!(script.contains("self.usernameLabel = ttk.Label(self, text=\"Username:\")"));
        assert!(script.contains("self.passwordEntry = ttk.Entry(self, show=\"*\")"));
        assert!(script.contains("self.usernameEntry = ttk.Entry(self)"));
        assert!(script.contains("self.cancelButton.grid(row=2, column=1, padx=\"0.75m\", pady=\"0.75m\")"));
        assert!(script.contains("window = LoginForm(application)"));
    }

    #[test]
    fn test_form_style_selects_builder() {
        let html = create_login_form(FormStyle::Html.builder().as_mut());
        assert!(html.starts_with("<!doctype html>"));
        let tk = create_login_form(FormStyle::Tk.builder().as_mut());
        assert!(tk.starts_with("#!/usr/bin/env python3"));
    }
}
