use crate::cli::output::current_preferences;

use super::table_renderer::visible_width;

const MIN_RULE_WIDTH: usize = 32;

/// A simple key/value pair for display.
pub struct DetailField {
    pub key: String,
    pub value: String,
}

/// A detail view model: title + fields.
pub struct DetailView {
    pub title: String,
    pub fields: Vec<DetailField>,
}

impl DetailView {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the view, returning self for chaining.
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.push(DetailField {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Renders the title, a rule, the aligned fields and a closing rule.
    pub fn render(&self) -> String {
        let lines = self.render_fields();
        let widest = lines
            .iter()
            .map(|line| visible_width(line))
            .chain(std::iter::once(visible_width(&self.title)))
            .max()
            .unwrap_or(0);
        let rule = horizontal_rule(widest.max(MIN_RULE_WIDTH));

        let mut output = vec![self.title.clone(), rule.clone()];
        output.extend(lines);
        output.push(rule);
        output.join("\n")
    }

    fn render_fields(&self) -> Vec<String> {
        let key_width = self
            .fields
            .iter()
            .map(|field| visible_width(&field.key))
            .max()
            .unwrap_or(0);

        self.fields
            .iter()
            .map(|field| {
                let padding = key_width.saturating_sub(visible_width(&field.key)) + 2;
                format!("  {}:{}{}", field.key, " ".repeat(padding), field.value)
            })
            .collect()
    }
}

fn horizontal_rule(len: usize) -> String {
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(len.max(1))
}
