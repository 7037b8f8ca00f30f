use std::collections::BTreeMap;
use std::fmt;

use scraper::ElementRef;
use scraper::Html;
use scraper::Node;

/// Name of the attribute that carries inline CSS.
const STYLE_ATTR: &str = "style";

/// Separator between an existing `style` value and an appended declaration.
const DECLARATION_SEPARATOR: &str = "; ";

/// Why [`InlineStyler::apply`] returned the input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    /// The tag to declaration mapping is empty.
    NoStyles,
    /// No element in the fragment has a configured tag name.
    NoMatch,
    /// The parsed fragment has no root element to serialize from.
    NoRoot,
}

impl fmt::Display for UnchangedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnchangedReason::NoStyles => write!(f, "no inline styles configured"),
            UnchangedReason::NoMatch => write!(f, "no element matches a configured tag"),
            UnchangedReason::NoRoot => write!(f, "parsed fragment has no root element"),
        }
    }
}

/// Result of injecting inline styles into an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOutcome<'a> {
    /// Re-serialized HTML with styles merged in, and the number of styled elements.
    Styled { html: String, count: usize },

    /// The original HTML, byte for byte.
    Unchanged {
        original: &'a str,
        reason: UnchangedReason,
    },
}

impl StyleOutcome<'_> {
    pub fn is_styled(&self) -> bool {
        matches!(self, StyleOutcome::Styled { .. })
    }

    /// Collapse to the HTML to emit.
    pub fn into_html(self) -> String {
        match self {
            StyleOutcome::Styled { html, .. } => html,
            StyleOutcome::Unchanged { original, .. } => original.to_string(),
        }
    }
}

/// Merges per-tag CSS declarations into the `style` attribute of matching elements.
///
/// An element that already has a `style` attribute gets the declaration appended
/// after a `"; "` separator; otherwise a `style` attribute is added after the
/// existing ones. Existing attributes are never removed or reordered.
/// Declarations are concatenated as is: neither CSS syntax nor duplicated
/// properties are checked.
pub struct InlineStyler<'s> {
    styles: &'s BTreeMap<String, String>,
}

impl<'s> InlineStyler<'s> {
    pub fn new(styles: &'s BTreeMap<String, String>) -> Self {
        Self { styles }
    }

    /// Parse `html` as a fragment, style it and serialize it back.
    ///
    /// Never fails: when there is nothing to do or the tree can not be
    /// serialized, the input is returned as [`StyleOutcome::Unchanged`].
    pub fn apply<'a>(&self, html: &'a str) -> StyleOutcome<'a> {
        let unchanged = |reason| StyleOutcome::Unchanged {
            original: html,
            reason,
        };

        if self.styles.is_empty() {
            return unchanged(UnchangedReason::NoStyles);
        }

        let mut fragment = Html::parse_fragment(html);

        // A fragment is parsed into a synthetic `<html>` element; its children are the content.
        let root_id = fragment
            .tree
            .root()
            .children()
            .find(|node| node.value().is_element())
            .map(|node| node.id());

        let Some(root_id) = root_id else {
            return unchanged(UnchangedReason::NoRoot);
        };

        // Depth first, parents before children.
        let matched = fragment
            .tree
            .get(root_id)
            .into_iter()
            .flat_map(|root| root.descendants().skip(1))
            .filter(|node| {
                node.value()
                    .as_element()
                    .is_some_and(|el| self.styles.contains_key(el.name()))
            })
            .map(|node| node.id())
            .collect::<Vec<_>>();

        if matched.is_empty() {
            return unchanged(UnchangedReason::NoMatch);
        }

        for id in matched.iter() {
            let Some(mut node) = fragment.tree.get_mut(*id) else {
                continue;
            };

            if let Node::Element(element) = node.value() {
                if let Some(declaration) = self.styles.get(element.name()) {
                    Self::merge_style(element, declaration);
                }
            }
        }

        let Some(root) = fragment.tree.get(root_id).and_then(ElementRef::wrap) else {
            return unchanged(UnchangedReason::NoRoot);
        };

        StyleOutcome::Styled {
            html: root.inner_html(),
            count: matched.len(),
        }
    }

    fn merge_style(element: &mut scraper::node::Element, declaration: &str) {
        let existing = element
            .attrs
            .iter_mut()
            .find(|(name, _)| &*name.local == STYLE_ATTR);

        if let Some((_, value)) = existing {
            value.push_slice(DECLARATION_SEPARATOR);
            value.push_slice(declaration);
            return;
        }

        let mut name = element.name.clone();
        name.prefix = None;
        name.ns = Default::default();
        name.local = STYLE_ATTR.into();

        element.attrs.insert(name, declaration.into());
    }
}

/// Inject `styles` into `html`, falling back to `html` itself.
pub fn apply(html: &str, styles: &BTreeMap<String, String>) -> String {
    let outcome = InlineStyler::new(styles).apply(html);

    match &outcome {
        StyleOutcome::Styled { count, .. } => {
            tracing::debug!("applied inline styles to {} element(s)", count);
        }
        StyleOutcome::Unchanged { reason, .. } => {
            tracing::debug!("inline styles not applied: {}", reason);
        }
    }

    outcome.into_html()
}
