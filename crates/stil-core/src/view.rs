//! Declarative element trees.
//!
//! Views describe *what* the widget shows; hosts decide *how* it is mounted.
//! An [`ElementSpec`] carries its event bindings as [`Action`]s, and a host
//! reports interactions back as [`UiEvent`]s for the controller to handle.

use crate::mapping::ThemeKey;

/// DOM events the widget listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Change => "change",
        }
    }
}

/// What an interaction asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    OpenPanel,
    ClosePanel,
    Reset,
    /// Carries the input's new value in [`UiEvent::value`].
    SetColor(ThemeKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding {
    pub kind: EventKind,
    pub action: Action,
}

/// An interaction reported by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub action: Action,
    /// Current value of the element, for input events.
    pub value: Option<String>,
}

impl UiEvent {
    #[must_use]
    pub fn action(action: Action) -> Self {
        Self {
            action,
            value: None,
        }
    }

    #[must_use]
    pub fn color(key: ThemeKey, value: impl Into<String>) -> Self {
        Self {
            action: Action::SetColor(key),
            value: Some(value.into()),
        }
    }
}

/// One element and its subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub id: Option<String>,
    pub class: String,
    /// Inline `cssText`.
    pub style: String,
    pub text: String,
    pub attributes: Vec<(String, String)>,
    pub events: Vec<EventBinding>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    #[must_use]
    pub fn style(mut self, css: impl Into<String>) -> Self {
        self.style = css.into();
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn on(mut self, kind: EventKind, action: Action) -> Self {
        self.events.push(EventBinding { kind, action });
        self
    }

    #[must_use]
    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Pre-order walk over this element and all descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &ElementSpec> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&ElementSpec> {
        self.descendants().find(|el| el.id.as_deref() == Some(id))
    }

    /// First element in the subtree bound to `action`.
    #[must_use]
    pub fn find_by_action(&self, action: Action) -> Option<&ElementSpec> {
        self.descendants()
            .find(|el| el.events.iter().any(|binding| binding.action == action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ElementSpec {
        ElementSpec::new("div")
            .id("root")
            .child(
                ElementSpec::new("section")
                    .id("a")
                    .child(ElementSpec::new("span").id("a1")),
            )
            .child(ElementSpec::new("button").id("b").on(EventKind::Click, Action::Reset))
    }

    #[test]
    fn descendants_walk_in_document_order() {
        let ids: Vec<_> = sample()
            .descendants()
            .filter_map(|el| el.id.clone())
            .collect();
        assert_eq!(ids, ["root", "a", "a1", "b"]);
    }

    #[test]
    fn lookups_by_id_and_action() {
        let root = sample();
        assert_eq!(root.find_by_id("a1").map(|el| el.tag), Some("span"));
        assert_eq!(root.find_by_id("missing"), None);
        assert_eq!(
            root.find_by_action(Action::Reset).and_then(|el| el.id.as_deref()),
            Some("b")
        );
        assert_eq!(root.find_by_action(Action::OpenPanel), None);
    }

    #[test]
    fn attribute_lookup_returns_first_match() {
        let input = ElementSpec::new("input").attr("type", "color").attr("value", "");
        assert_eq!(input.attribute("type"), Some("color"));
        assert_eq!(input.attribute("value"), Some(""));
        assert_eq!(input.attribute("for"), None);
    }
}
