use crate::models::Metric;
use serde::{Deserialize, Serialize};

/// The user-controlled inputs every view is parameterized by.
///
/// It lives in the browser session; the page sends it with each event and
/// gets the updated copy back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub primary_metric: Metric,
    pub secondary_metric: Option<Metric>,
    pub selected_country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PrimaryMetric,
    SecondaryMetric,
    SelectedCountry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SelectPrimary { metric: Metric },
    SelectSecondary { metric: Option<Metric> },
    MapClick { location: String },
}

impl SelectionState {
    /// Applies `event` and reports which field it changed. Setting a field to
    /// the value it already holds changes nothing.
    pub fn apply(&mut self, event: Event) -> Option<Field> {
        match event {
            Event::SelectPrimary { metric } => {
                replace(&mut self.primary_metric, metric).then_some(Field::PrimaryMetric)
            }
            Event::SelectSecondary { metric } => {
                replace(&mut self.secondary_metric, metric).then_some(Field::SecondaryMetric)
            }
            Event::MapClick { location } => replace(&mut self.selected_country, Some(location))
                .then_some(Field::SelectedCountry),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_score_only() {
        let selection = SelectionState::default();
        assert_eq!(selection.primary_metric, Metric::Score);
        assert!(selection.secondary_metric.is_none());
        assert!(selection.selected_country.is_none());
    }

    #[test]
    fn map_click_sets_country() {
        let mut selection = SelectionState::default();
        let changed = selection.apply(Event::MapClick {
            location: "Finland".into(),
        });
        assert_eq!(changed, Some(Field::SelectedCountry));
        assert_eq!(selection.selected_country.as_deref(), Some("Finland"));
    }

    #[test]
    fn repeated_value_changes_nothing() {
        let mut selection = SelectionState::default();
        assert_eq!(
            selection.apply(Event::SelectPrimary {
                metric: Metric::Score
            }),
            None
        );
        assert_eq!(
            selection.apply(Event::SelectSecondary {
                metric: Some(Metric::Generosity)
            }),
            Some(Field::SecondaryMetric)
        );
        assert_eq!(
            selection.apply(Event::SelectSecondary {
                metric: Some(Metric::Generosity)
            }),
            None
        );
        assert_eq!(
            selection.apply(Event::SelectSecondary { metric: None }),
            Some(Field::SecondaryMetric)
        );
    }

    #[test]
    fn events_use_snake_case_tags() {
        let event: Event =
            serde_json::from_str(r#"{"type":"select_primary","metric":"GDP per capita"}"#)
                .unwrap();
        assert_eq!(
            event,
            Event::SelectPrimary {
                metric: Metric::GdpPerCapita
            }
        );

        let event: Event =
            serde_json::from_str(r#"{"type":"select_secondary","metric":null}"#).unwrap();
        assert_eq!(event, Event::SelectSecondary { metric: None });
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let selection: SelectionState = serde_json::from_str("{}").unwrap();
        assert_eq!(selection, SelectionState::default());
    }
}
