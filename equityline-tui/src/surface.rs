//! Chart object store backing the terminal chart.
//!
//! Holds the line and label the indicator asks for, plus the user's edits to
//! the line (keyboard "drags"), which the indicator later reads back.

use equityline_core::host::{ChartSurface, LabelSpec, LineSpec};
use equityline_core::{LABEL_OBJECT_NAME, LINE_OBJECT_NAME};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    line: Option<LineSpec>,
    label: Option<LabelSpec>,
    first_visible_bar: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> Option<&LineSpec> {
        self.line.as_ref()
    }

    pub fn label(&self) -> Option<&LabelSpec> {
        self.label.as_ref()
    }

    pub fn set_first_visible_bar(&mut self, index: usize) {
        self.first_visible_bar = index;
    }

    /// Move the line by `delta` in price, as a mouse drag would. Returns false
    /// when there is no line to move.
    pub fn drag_line(&mut self, delta: f64) -> bool {
        match self.line.as_mut() {
            Some(line) => {
                line.price += delta;
                true
            }
            None => false,
        }
    }
}

impl ChartSurface for TerminalSurface {
    fn line_price(&self, name: &str) -> Option<f64> {
        self.line.as_ref().filter(|l| l.name == name).map(|l| l.price)
    }

    fn draw_line(&mut self, line: &LineSpec) {
        self.line = Some(line.clone());
    }

    fn draw_label(&mut self, label: &LabelSpec) {
        self.label = Some(label.clone());
    }

    fn remove_object(&mut self, name: &str) {
        match name {
            LINE_OBJECT_NAME => self.line = None,
            LABEL_OBJECT_NAME => self.label = None,
            _ => {}
        }
    }

    fn set_hidden(&mut self, name: &str, hidden: bool) {
        match name {
            LINE_OBJECT_NAME => {
                if let Some(line) = self.line.as_mut() {
                    line.hidden = hidden;
                }
            }
            LABEL_OBJECT_NAME => {
                if let Some(label) = self.label.as_mut() {
                    label.hidden = hidden;
                }
            }
            _ => {}
        }
    }

    fn first_visible_bar(&self) -> usize {
        self.first_visible_bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equityline_core::{LineStyle, Rgb};

    fn line_at(price: f64) -> LineSpec {
        LineSpec {
            name: LINE_OBJECT_NAME,
            price,
            color: Rgb::DODGER_BLUE,
            width: 2,
            style: LineStyle::Solid,
            interactive: true,
            hidden: false,
            comment: "",
        }
    }

    #[test]
    fn drag_without_line_is_a_no_op() {
        let mut surface = TerminalSurface::new();
        assert!(!surface.drag_line(0.001));
        assert_eq!(surface.line_price(LINE_OBJECT_NAME), None);
    }

    #[test]
    fn drag_moves_line_price() {
        let mut surface = TerminalSurface::new();
        surface.draw_line(&line_at(1.1));
        assert!(surface.drag_line(0.0010));
        let price = surface.line_price(LINE_OBJECT_NAME).unwrap();
        assert!((price - 1.1010).abs() < 1e-12);
    }

    #[test]
    fn remove_and_hide_by_name() {
        let mut surface = TerminalSurface::new();
        surface.draw_line(&line_at(1.1));
        surface.set_hidden(LINE_OBJECT_NAME, true);
        assert!(surface.line().unwrap().hidden);
        surface.set_hidden("unknown", false);
        assert!(surface.line().unwrap().hidden);

        surface.remove_object(LINE_OBJECT_NAME);
        assert!(surface.line().is_none());
    }
}
