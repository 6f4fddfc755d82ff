//! Framework-agnostic element tree
//!
//! Classes and inline styles are kept apart from the other attributes so that
//! adding a class or one style property never requires re-parsing a string.

use std::collections::BTreeMap;

/// Attribute name to value, in stable order
pub type Attributes = BTreeMap<String, String>;

/// One element of an embed structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    pub name: String,
    pub classes: Vec<String>,
    /// Every attribute except `class` and `style`
    pub attributes: Attributes,
    pub styles: BTreeMap<String, String>,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(name: impl Into<String>) -> Self {
        ElementNode {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.styles.insert(property.into(), value.into());
    }

    pub fn remove_style(&mut self, property: &str) {
        self.styles.remove(property);
    }

    /// The `class` attribute value, if any class is set
    pub fn class_attribute(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    /// The `style` attribute value, if any property is set
    pub fn style_attribute(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        Some(declarations.join("; "))
    }

    /// Replace the classes with those in a whitespace-separated `class` value
    pub fn set_class_attribute(&mut self, raw: &str) {
        self.classes.clear();
        for class in raw.split_whitespace() {
            self.add_class(class);
        }
    }

    /// Replace the styles with the declarations of a `style` value
    pub fn set_style_attribute(&mut self, raw: &str) {
        self.styles = parse_style(raw);
    }

    /// Attributes as they appear in markup, with `class` and `style` folded back in
    pub fn markup_attributes(&self) -> Attributes {
        let mut attributes = self.attributes.clone();
        if let Some(class) = self.class_attribute() {
            attributes.insert("class".to_string(), class);
        }
        if let Some(style) = self.style_attribute() {
            attributes.insert("style".to_string(), style);
        }
        attributes
    }

    /// First direct child element with the given name and class
    pub fn child_with_class(&self, name: &str, class: &str) -> Option<&ElementNode> {
        self.children
            .iter()
            .find(|child| child.is(name) && child.has_class(class))
    }

    pub fn child_with_class_mut(&mut self, name: &str, class: &str) -> Option<&mut ElementNode> {
        self.children
            .iter_mut()
            .find(|child| child.is(name) && child.has_class(class))
    }
}

/// Split a `style` value into property/value pairs, lowercasing property names
pub fn parse_style(raw: &str) -> BTreeMap<String, String> {
    raw.split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim();
            (!property.is_empty()).then(|| (property, value.to_string()))
        })
        .collect()
}
