//! Event namespaces
//!
//! Every event name belongs to exactly one event type: the prefix before the
//! first separator, or the default type when there is none.

use crate::CustomEventsConfig;

/// Resolve the event type a name is dispatched under
pub fn event_type_of<'a>(name: &'a str, config: &'a CustomEventsConfig) -> &'a str {
    match name.find(config.separator) {
        Some(index) => &name[..index],
        None => &config.default_type,
    }
}

/// One or more event names
///
/// `bind` accepts either a single name or an ordered list of names that all
/// receive the same callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNames(Vec<String>);

impl EventNames {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for EventNames {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for EventNames {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<&[&str]> for EventNames {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for EventNames {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<Vec<String>> for EventNames {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for EventNames {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_before_first_separator() {
        let config = CustomEventsConfig::default();

        assert_eq!(event_type_of("ns-one", &config), "ns");
        assert_eq!(event_type_of("ns-two", &config), "ns");
        assert_eq!(event_type_of("ns-a-b-c", &config), "ns");
    }

    #[test]
    fn test_no_separator_uses_default_type() {
        let config = CustomEventsConfig::default();

        assert_eq!(event_type_of("solo", &config), "DDomCE");
        assert_eq!(event_type_of("", &config), "DDomCE");
    }

    #[test]
    fn test_leading_separator_gives_empty_type() {
        let config = CustomEventsConfig::default();
        assert_eq!(event_type_of("-foo", &config), "");
    }

    #[test]
    fn test_custom_separator() {
        let config = CustomEventsConfig {
            separator: ':',
            default_type: "app".to_string(),
        };

        assert_eq!(event_type_of("ui:click", &config), "ui");
        assert_eq!(event_type_of("ui-click", &config), "app");
    }

    #[test]
    fn test_multibyte_prefix() {
        let config = CustomEventsConfig::default();
        assert_eq!(event_type_of("ñandú-corre", &config), "ñandú");
    }

    #[test]
    fn test_event_names_conversions() {
        assert_eq!(EventNames::from("a-x").len(), 1);

        let names = EventNames::from(["a-x", "b-y"]);
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["a-x", "b-y"]);

        let empty: &[&str] = &[];
        assert!(EventNames::from(empty).is_empty());
    }
}
