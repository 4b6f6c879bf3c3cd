//! Standalone SVG markup for recorded scenes.

use crate::surface::{Node, RecordingSurface};
use std::fmt::Write;

/// Escape text for use in XML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl RecordingSurface {
    /// Render the recorded scene as an `<svg>` element.
    ///
    /// `id` and `class`, when given, are set on the root element.
    #[must_use]
    pub fn to_svg(&self, id: Option<&str>, class: Option<&str>) -> String {
        let mut children: Vec<Vec<usize>> = Vec::new();
        let mut roots = Vec::new();
        let mut group_slots: Vec<Option<usize>> = Vec::new();

        for (i, node) in self.nodes().iter().enumerate() {
            if let Node::Group { id, .. } = node {
                if group_slots.len() <= *id {
                    group_slots.resize(*id + 1, None);
                }
                group_slots[*id] = Some(children.len());
                children.push(Vec::new());
            }
            let parent_slot = node
                .parent()
                .and_then(|p| group_slots.get(p).copied().flatten());
            match parent_slot {
                Some(slot) => children[slot].push(i),
                None => roots.push(i),
            }
        }

        let size = self.size();
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="{}" width="{}" height="{}""#,
            crate::page::SVG_NS,
            size.width,
            size.height
        );
        if let Some(id) = id {
            let _ = write!(out, r#" id="{}""#, escape(id));
        }
        if let Some(class) = class {
            let _ = write!(out, r#" class="{}""#, escape(class));
        }
        out.push('>');
        for &i in &roots {
            self.write_node(&mut out, i, &children, &group_slots);
        }
        out.push_str("</svg>");
        out
    }

    fn write_node(
        &self,
        out: &mut String,
        index: usize,
        children: &[Vec<usize>],
        group_slots: &[Option<usize>],
    ) {
        match &self.nodes()[index] {
            Node::Group { id, spec, .. } => {
                out.push_str("<g");
                if let Some(element_id) = &spec.id {
                    let _ = write!(out, r#" id="{}""#, escape(element_id));
                }
                if let Some(class) = &spec.class {
                    let _ = write!(out, r#" class="{}""#, escape(class));
                }
                if spec.translate.x != 0.0 || spec.translate.y != 0.0 {
                    let _ = write!(
                        out,
                        r#" transform="translate({},{})""#,
                        spec.translate.x, spec.translate.y
                    );
                }
                out.push('>');
                let slot = group_slots.get(*id).copied().flatten();
                for &child in slot.map(|s| children[s].as_slice()).unwrap_or_default() {
                    self.write_node(out, child, children, group_slots);
                }
                out.push_str("</g>");
            }
            Node::Rect { spec, .. } => {
                out.push_str("<rect");
                if let Some(class) = &spec.class {
                    let _ = write!(out, r#" class="{}""#, escape(class));
                }
                if let Some(cell) = &spec.cell {
                    for (name, value) in cell.data_attributes() {
                        let _ = write!(out, r#" {name}="{value}""#);
                    }
                }
                let b = spec.bounds;
                let _ = write!(
                    out,
                    r#" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    b.x, b.y, b.width, b.height, spec.fill
                );
            }
            Node::Text { spec, .. } => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{}""#,
                    spec.position.x,
                    spec.position.y,
                    spec.anchor.as_svg(),
                    spec.font_size,
                    spec.fill
                );
                if let Some(dy) = spec.baseline.dy() {
                    let _ = write!(out, r#" dy="{dy}""#);
                }
                let _ = write!(out, ">{}</text>", escape(&spec.content));
            }
            Node::Line { spec, .. } => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    spec.from.x, spec.from.y, spec.to.x, spec.to.y, spec.stroke, spec.width
                );
            }
        }
    }
}
