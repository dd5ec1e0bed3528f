//! `web-sys` implementation of the page seams: body style and DOM rendering.

use std::collections::BTreeMap;
use std::rc::Rc;

use stil_core::{
    Action, Document, ElementSpec, MountId, MountTarget, Result, StilError, StyleScope, UiEvent,
};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, Window};

/// Receives interactions from rendered elements.
pub(crate) type Dispatch = Rc<dyn Fn(UiEvent)>;

type Listener = Closure<dyn FnMut(Event)>;

pub(crate) fn js_err(value: JsValue) -> StilError {
    StilError::host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

struct MountedView {
    root: Element,
    // Dropped together with the subtree. wasm-bindgen defers freeing a
    // closure that is still executing, so a listener may unmount itself.
    _listeners: Vec<Listener>,
}

/// The live document. Theme properties go on `<body>`.
pub struct WebPage {
    window: Window,
    document: web_sys::Document,
    body: HtmlElement,
    mounts: BTreeMap<MountId, MountedView>,
    dispatch: Option<Dispatch>,
    next_id: u64,
}

impl WebPage {
    pub fn from_window(window: Window) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| StilError::host("window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| StilError::host("document has no body"))?;
        Ok(Self {
            window,
            document,
            body,
            mounts: BTreeMap::new(),
            dispatch: None,
            next_id: 0,
        })
    }

    /// Route interactions of elements rendered from now on to `dispatch`.
    pub(crate) fn set_dispatch(&mut self, dispatch: Dispatch) {
        self.dispatch = Some(dispatch);
    }

    fn listener(&self, action: Action) -> Listener {
        let dispatch = self.dispatch.clone();
        Closure::wrap(Box::new(move |event: Event| {
            let Some(dispatch) = dispatch.as_ref() else {
                return;
            };
            let value = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value());
            dispatch(UiEvent { action, value });
        }) as Box<dyn FnMut(Event)>)
    }

    fn render(&self, spec: &ElementSpec, listeners: &mut Vec<Listener>) -> Result<Element> {
        let element = self.document.create_element(spec.tag).map_err(js_err)?;
        if let Some(id) = &spec.id {
            element.set_id(id);
        }
        if !spec.class.is_empty() {
            element.set_class_name(&spec.class);
        }
        if !spec.style.is_empty() {
            element.set_attribute("style", &spec.style).map_err(js_err)?;
        }
        if !spec.text.is_empty() {
            element.set_text_content(Some(&spec.text));
        }
        for (name, value) in &spec.attributes {
            element.set_attribute(name, value).map_err(js_err)?;
        }
        for binding in &spec.events {
            let listener = self.listener(binding.action);
            element
                .add_event_listener_with_callback(
                    binding.kind.as_str(),
                    listener.as_ref().unchecked_ref(),
                )
                .map_err(js_err)?;
            listeners.push(listener);
        }
        for child in &spec.children {
            let node = self.render(child, listeners)?;
            element.append_child(&node).map_err(js_err)?;
        }
        Ok(element)
    }
}

impl StyleScope for WebPage {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.body.style().set_property(name, value).map_err(js_err)
    }

    fn remove_property(&mut self, name: &str) -> Result<()> {
        self.body
            .style()
            .remove_property(name)
            .map(drop)
            .map_err(js_err)
    }

    fn computed_property(&self, name: &str) -> String {
        self.window
            .get_computed_style(&self.body)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(name).ok())
            .unwrap_or_default()
    }
}

impl Document for WebPage {
    fn mount(&mut self, target: MountTarget<'_>, view: &ElementSpec) -> Result<MountId> {
        let parent: Element = match target {
            MountTarget::Body => self.body.clone().into(),
            MountTarget::Selector(selector) => self
                .document
                .query_selector(selector)
                .map_err(js_err)?
                .ok_or_else(|| StilError::missing_container(selector))?,
        };

        let mut listeners = Vec::new();
        let root = self.render(view, &mut listeners)?;
        parent.append_child(&root).map_err(js_err)?;

        let id = MountId(self.next_id);
        self.next_id += 1;
        debug!(mount = id.0, tag = view.tag, "view mounted");
        self.mounts.insert(
            id,
            MountedView {
                root,
                _listeners: listeners,
            },
        );
        Ok(id)
    }

    fn unmount(&mut self, id: MountId) {
        if let Some(mounted) = self.mounts.remove(&id) {
            mounted.root.remove();
            debug!(mount = id.0, "view unmounted");
        }
    }
}
