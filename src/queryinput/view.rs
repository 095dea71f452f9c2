//! View rendering for the query input.

use super::model::Model;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Span {
    Text,
    Selected,
    Cursor,
}

impl Model {
    /// Renders the prompt followed by the visible part of the value.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = self.offset_right.min(self.value.len());
        let start = self.offset.min(end);
        let selection = self.selection_range();

        let mut v = String::new();
        let mut run = String::new();
        let mut run_kind = Span::Text;
        for (idx, ch) in self.value.iter().enumerate().take(end).skip(start) {
            let kind = if self.focus && idx == self.pos {
                Span::Cursor
            } else if selection.as_ref().is_some_and(|r| r.contains(&idx)) {
                Span::Selected
            } else {
                Span::Text
            };
            if kind != run_kind && !run.is_empty() {
                v.push_str(&self.render_span(run_kind, &run));
                run.clear();
            }
            run_kind = kind;
            run.push(*ch);
        }
        if !run.is_empty() {
            v.push_str(&self.render_span(run_kind, &run));
        }

        // Cursor sits past the last visible character.
        if self.focus && self.pos >= end {
            v.push_str(&self.cursor_style.render(" "));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn render_span(&self, kind: Span, text: &str) -> String {
        match kind {
            Span::Text => self.text_style.render(text),
            Span::Selected => self.selection_style.render(text),
            Span::Cursor => self.cursor_style.render(text),
        }
    }

    /// Internal placeholder view rendering
    pub(super) fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let mut v = String::new();
        if self.focus {
            if let Some(first) = chars.next() {
                v.push_str(&self.cursor_style.render(&first.to_string()));
            }
        }
        let rest: String = chars.collect();
        if !rest.is_empty() {
            v.push_str(&self.placeholder_style.render(&rest));
        }
        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }
}
