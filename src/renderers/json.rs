//! JSON-lines renderer

use anyhow::Result;
use raven_view_core::Renderer;
use raven_view_types::Snapshot;
use std::io::Write;

/// Writes every snapshot as one line of JSON
pub struct JsonRenderer<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn id(&self) -> &str {
        "json"
    }

    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_snapshot() {
        let mut renderer = JsonRenderer::new(Vec::new());
        let mut snapshot = Snapshot::default();
        renderer.render(&snapshot).unwrap();
        snapshot.status.messages.push("hello".to_string());
        renderer.render(&snapshot).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Snapshot = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.status.messages, vec!["hello"]);
    }
}
