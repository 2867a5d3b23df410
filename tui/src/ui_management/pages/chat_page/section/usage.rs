use ratatui::{
    style::Stylize,
    text::{Line, Span, Text},
};

/// A set of keys and what pressing any of them does
#[derive(Debug, Clone)]
pub struct UsageInfoLine {
    pub keys: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct UsageInfo {
    pub description: Option<String>,
    pub lines: Vec<UsageInfoLine>,
}

pub trait HasUsageInfo {
    fn usage_info(&self) -> UsageInfo;
}

fn key_to_span<'a>(key: &str) -> Span<'a> {
    Span::from(format!("({key})")).bold()
}

/// Renders `(a)`, `(a) or (b)`, `(a), (b), or (c)` followed by the description
fn usage_line_to_line<'a>(usage_line: UsageInfoLine) -> Line<'a> {
    let last_idx = usage_line.keys.len().saturating_sub(1);
    let mut spans: Vec<Span> = Vec::with_capacity(usage_line.keys.len() * 2 + 1);

    for (idx, key) in usage_line.keys.iter().enumerate() {
        if idx > 0 {
            spans.push(match (idx == last_idx, last_idx) {
                (true, 1) => " or ".into(),
                (true, _) => ", or ".into(),
                (false, _) => ", ".into(),
            });
        }
        spans.push(key_to_span(key));
    }

    spans.push(Span::from(format!(" {}", usage_line.description)));

    Line::from(spans)
}

pub fn widget_usage_to_text<'a>(usage: UsageInfo) -> Text<'a> {
    let description = usage.description.map(Line::from);
    let lines = usage.lines.into_iter().map(usage_line_to_line);

    Text::from(description.into_iter().chain(lines).collect::<Vec<Line>>())
}
