//! SVG drawing surface backed by live DOM elements.
//!
//! Cells drawn through this surface get `mouseover`/`mouseout` listeners
//! that drive a shared [`TooltipController`] and mirror its state onto the
//! tooltip element.

use super::dom::js_error;
use super::log;
use std::cell::RefCell;
use std::rc::Rc;
use thermograph_core::page::SVG_NS;
use thermograph_core::{
    CellDatum, DrawSurface, GroupId, GroupSpec, LineSpec, Point, RectSpec, SurfaceError, TextSpec,
    TooltipController,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

/// Tooltip controller plus the element that displays it.
#[derive(Clone)]
pub struct Hover {
    controller: Rc<RefCell<TooltipController>>,
    element: HtmlElement,
}

impl Hover {
    pub fn new(controller: TooltipController, element: HtmlElement) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
            element,
        }
    }

    /// Shared controller, for inspection.
    pub fn controller(&self) -> Rc<RefCell<TooltipController>> {
        Rc::clone(&self.controller)
    }

    pub fn enter(&self, cell: &CellDatum, event: &MouseEvent) {
        let pointer = Point::new(f64::from(event.page_x()), f64::from(event.page_y()));
        let mut tooltip = self.controller.borrow_mut();
        tooltip.pointer_enter(cell, pointer);
        self.sync_or_warn(&tooltip);
    }

    pub fn leave(&self) {
        let mut tooltip = self.controller.borrow_mut();
        tooltip.pointer_leave();
        self.sync_or_warn(&tooltip);
    }

    fn sync_or_warn(&self, tooltip: &TooltipController) {
        if let Err(err) = self.sync(tooltip) {
            log::warn(&format!("thermograph: tooltip update failed: {err}"));
        }
    }

    /// Rewrite the tooltip element from scratch so no stale text survives.
    pub fn sync(&self, tooltip: &TooltipController) -> Result<(), SurfaceError> {
        self.element.set_text_content(Some(&tooltip.text()));
        match tooltip.content() {
            Some(content) => self
                .element
                .set_attribute("data-year", &content.year.to_string())
                .map_err(js_error)?,
            None => self.element.remove_attribute("data-year").map_err(js_error)?,
        }
        let style = self.element.style();
        for (property, value) in tooltip.style() {
            style.set_property(property, &value).map_err(js_error)?;
        }
        Ok(())
    }
}

/// [`DrawSurface`] that appends SVG elements under a root element.
pub struct SvgSurface {
    document: Document,
    root: Element,
    groups: Vec<Element>,
    hover: Option<Hover>,
    listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl SvgSurface {
    /// Draw into `root` (normally an `<svg>` element).
    pub fn new(document: Document, root: Element) -> Self {
        Self {
            document,
            root,
            groups: Vec::new(),
            hover: None,
            listeners: Vec::new(),
        }
    }

    /// Wire cells to a tooltip.
    #[must_use]
    pub fn with_hover(mut self, hover: Hover) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Number of event listeners attached to cells.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Keep the cell listeners alive for the lifetime of the page.
    pub fn persist(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }

    fn create(&self, tag: &str) -> Result<Element, SurfaceError> {
        self.document
            .create_element_ns(Some(SVG_NS), tag)
            .map_err(js_error)
    }

    fn attach(&self, parent: Option<GroupId>, el: &Element) -> Result<(), SurfaceError> {
        let parent = match parent {
            None => &self.root,
            Some(id) => self
                .groups
                .get(id)
                .ok_or_else(|| SurfaceError(format!("unknown group {id}")))?,
        };
        parent.append_child(el).map_err(js_error)?;
        Ok(())
    }

    fn listen_hover(&mut self, el: &Element, cell: CellDatum) -> Result<(), SurfaceError> {
        let Some(hover) = self.hover.clone() else {
            return Ok(());
        };

        let enter_hover = hover.clone();
        let on_enter = Closure::wrap(Box::new(move |e: MouseEvent| {
            enter_hover.enter(&cell, &e);
        }) as Box<dyn FnMut(MouseEvent)>);
        let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
            hover.leave();
        }) as Box<dyn FnMut(MouseEvent)>);

        el.add_event_listener_with_callback("mouseover", on_enter.as_ref().unchecked_ref())
            .map_err(js_error)?;
        el.add_event_listener_with_callback("mouseout", on_leave.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.listeners.push(on_enter);
        self.listeners.push(on_leave);
        Ok(())
    }
}

fn set(el: &Element, name: &str, value: impl ToString) -> Result<(), SurfaceError> {
    el.set_attribute(name, &value.to_string()).map_err(js_error)
}

impl DrawSurface for SvgSurface {
    fn add_group(
        &mut self,
        parent: Option<GroupId>,
        group: &GroupSpec,
    ) -> Result<GroupId, SurfaceError> {
        let el = self.create("g")?;
        if let Some(id) = &group.id {
            el.set_id(id);
        }
        if let Some(class) = &group.class {
            set(&el, "class", class)?;
        }
        if group.translate != Point::ORIGIN {
            set(
                &el,
                "transform",
                format!("translate({},{})", group.translate.x, group.translate.y),
            )?;
        }
        self.attach(parent, &el)?;
        self.groups.push(el);
        Ok(self.groups.len() - 1)
    }

    fn add_rect(&mut self, parent: Option<GroupId>, rect: &RectSpec) -> Result<(), SurfaceError> {
        let el = self.create("rect")?;
        if let Some(class) = &rect.class {
            set(&el, "class", class)?;
        }
        if let Some(cell) = &rect.cell {
            for (name, value) in cell.data_attributes() {
                set(&el, name, value)?;
            }
        }
        let b = rect.bounds;
        set(&el, "x", b.x)?;
        set(&el, "y", b.y)?;
        set(&el, "width", b.width)?;
        set(&el, "height", b.height)?;
        set(&el, "fill", rect.fill)?;
        if let Some(cell) = rect.cell {
            self.listen_hover(&el, cell)?;
        }
        self.attach(parent, &el)
    }

    fn add_text(&mut self, parent: Option<GroupId>, text: &TextSpec) -> Result<(), SurfaceError> {
        let el = self.create("text")?;
        set(&el, "x", text.position.x)?;
        set(&el, "y", text.position.y)?;
        set(&el, "text-anchor", text.anchor.as_svg())?;
        set(&el, "font-size", text.font_size)?;
        set(&el, "fill", text.fill)?;
        if let Some(dy) = text.baseline.dy() {
            set(&el, "dy", dy)?;
        }
        el.set_text_content(Some(&text.content));
        self.attach(parent, &el)
    }

    fn add_line(&mut self, parent: Option<GroupId>, line: &LineSpec) -> Result<(), SurfaceError> {
        let el = self.create("line")?;
        set(&el, "x1", line.from.x)?;
        set(&el, "y1", line.from.y)?;
        set(&el, "x2", line.to.x)?;
        set(&el, "y2", line.to.y)?;
        set(&el, "stroke", line.stroke)?;
        set(&el, "stroke-width", line.width)?;
        self.attach(parent, &el)
    }
}
