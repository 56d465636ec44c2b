//! Log-line renderer

use anyhow::Result;
use log::info;
use raven_view_core::Renderer;
use raven_view_types::{IndicatorLevel, Snapshot, VisualState};
use std::fmt::Write as _;

/// Logs a one-line summary each time the summary changes
#[derive(Default)]
pub struct TextRenderer {
    last_line: Option<String>,
    lines_written: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Build the summary for `snapshot`
    pub fn summarize(snapshot: &Snapshot) -> String {
        let mut line = String::with_capacity(256);

        let status = &snapshot.status;
        let _ = write!(
            line,
            "[{} / {}",
            status.mode.map(|m| m.as_str()).unwrap_or("-"),
            status.substate.map(|s| s.as_str()).unwrap_or("-")
        );
        if let Some(time) = status.controller_time_ms {
            let _ = write!(line, " @ {:.0}ms", time);
        }
        line.push(']');

        for display in &snapshot.displays {
            let marker = match display.visual {
                VisualState::Normal => "",
                VisualState::Warning => "!",
            };
            let _ = write!(line, " {}={:.2}{}{}", display.name, display.value, display.unit, marker);
        }

        let lit: Vec<&str> = snapshot
            .indicators
            .iter()
            .filter(|i| i.level != IndicatorLevel::Off)
            .map(|i| i.name.as_str())
            .collect();
        if !lit.is_empty() {
            let _ = write!(line, " | on: {}", lit.join(","));
        }

        let warnings: Vec<&str> = snapshot
            .channels
            .iter()
            .filter(|c| c.above_warning)
            .map(|c| c.name.as_str())
            .collect();
        if !warnings.is_empty() {
            let _ = write!(line, " | limit: {}", warnings.join(","));
        }

        if let Some(message) = status.messages.last() {
            let _ = write!(line, " | {}", message);
        }
        line
    }
}

impl Renderer for TextRenderer {
    fn id(&self) -> &str {
        "text"
    }

    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        let line = Self::summarize(snapshot);
        if self.last_line.as_deref() != Some(line.as_str()) {
            info!("{}", line);
            self.last_line = Some(line);
            self.lines_written += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raven_view_types::{DisplaySnapshot, IndicatorSnapshot, SoftwareMode, StatusSnapshot};

    fn snapshot() -> Snapshot {
        Snapshot {
            channels: vec![],
            indicators: vec![
                IndicatorSnapshot {
                    name: "main_valve".to_string(),
                    level: IndicatorLevel::On,
                    raw: 1.0,
                },
                IndicatorSnapshot {
                    name: "ignition_relay".to_string(),
                    level: IndicatorLevel::Off,
                    raw: 0.0,
                },
            ],
            displays: vec![DisplaySnapshot {
                name: "thrust".to_string(),
                unit: "N".to_string(),
                value: 1600.0,
                threshold: 1500.0,
                visual: VisualState::Warning,
            }],
            status: StatusSnapshot {
                controller_time_ms: Some(1200.0),
                mode: Some(SoftwareMode::Sequence),
                substate: None,
                messages: vec!["armed".to_string()],
            },
        }
    }

    #[test]
    fn test_summary_line() {
        let line = TextRenderer::summarize(&snapshot());
        assert_eq!(
            line,
            "[SEQUENCE / - @ 1200ms] thrust=1600.00N! | on: main_valve | armed"
        );
    }

    #[test]
    fn test_only_changes_are_written() {
        let mut renderer = TextRenderer::new();
        let first = snapshot();
        renderer.render(&first).unwrap();
        renderer.render(&first).unwrap();
        assert_eq!(renderer.lines_written(), 1);

        let mut second = first.clone();
        second.displays[0].value = 1400.0;
        second.displays[0].visual = VisualState::Normal;
        renderer.render(&second).unwrap();
        assert_eq!(renderer.lines_written(), 2);
    }
}
