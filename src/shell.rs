use crate::dataset::Dataset;
use crate::selection::{Event, Field, SelectionState};
use crate::views::{Binding, View};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

pub type Views = BTreeMap<Binding, View>;

#[derive(Debug, Serialize)]
pub struct Update {
    pub selection: SelectionState,
    pub changed: Vec<Field>,
    pub views: Views,
}

/// Bindings whose declared inputs include any of `changed`, in page order.
pub fn affected(changed: &[Field]) -> Vec<Binding> {
    Binding::ALL
        .into_iter()
        .filter(|binding| binding.inputs().iter().any(|field| changed.contains(field)))
        .collect()
}

pub fn render(dataset: &Dataset, selection: &SelectionState, bindings: &[Binding]) -> Views {
    bindings
        .iter()
        .map(|binding| (*binding, binding.render(dataset, selection)))
        .collect()
}

pub fn render_all(dataset: &Dataset, selection: &SelectionState) -> Views {
    render(dataset, selection, &Binding::ALL)
}

pub fn dispatch(dataset: &Dataset, mut selection: SelectionState, event: Event) -> Update {
    let changed: Vec<Field> = selection.apply(event).into_iter().collect();
    let bindings = affected(&changed);
    debug!(?changed, ?bindings, "dispatching selection change");
    let views = render(dataset, &selection, &bindings);
    Update {
        selection,
        changed,
        views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metric, Row};
    use crate::views::TextBlock;

    fn sample() -> Dataset {
        let rows = [("Finland", 7.769), ("Denmark", 7.6), ("Norway", 7.554)]
            .into_iter()
            .enumerate()
            .map(|(index, (country, score))| Row {
                rank: index as u32 + 1,
                country: country.to_string(),
                score,
                gdp_per_capita: 1.3,
                social_support: 1.5,
                healthy_life_expectancy: 1.0,
                freedom: 0.6,
                generosity: 0.2,
                corruption: 0.4,
            })
            .collect();
        Dataset::from_rows(rows).unwrap()
    }

    fn detail_text(view: &View) -> Vec<String> {
        match view {
            View::Text(TextBlock { items }) => items.iter().map(|item| item.text.clone()).collect(),
            View::Figure(_) => panic!("expected text view"),
        }
    }

    #[test]
    fn primary_change_skips_country_detail() {
        assert_eq!(
            affected(&[Field::PrimaryMetric]),
            [
                Binding::Map,
                Binding::Insights,
                Binding::Scatter,
                Binding::Bar,
                Binding::Trend,
                Binding::Pie,
            ]
        );
    }

    #[test]
    fn map_click_touches_detail_and_pie_only() {
        assert_eq!(
            affected(&[Field::SelectedCountry]),
            [Binding::CountryDetail, Binding::Pie]
        );
    }

    #[test]
    fn secondary_change_touches_scatter_only() {
        assert_eq!(affected(&[Field::SecondaryMetric]), [Binding::Scatter]);
    }

    #[test]
    fn initial_render_covers_every_region() {
        let dataset = sample();
        let views = render_all(&dataset, &SelectionState::default());
        assert_eq!(views.len(), Binding::ALL.len());
    }

    #[test]
    fn clicking_top_ranked_country_fills_detail_and_pie() {
        let dataset = sample();
        let update = dispatch(
            &dataset,
            SelectionState::default(),
            Event::MapClick {
                location: "Finland".into(),
            },
        );
        assert_eq!(update.changed, [Field::SelectedCountry]);
        assert_eq!(update.views.len(), 2);

        let detail = detail_text(&update.views[&Binding::CountryDetail]);
        assert!(detail.contains(&"Overall Rank: 1".to_string()));

        let View::Figure(pie) = &update.views[&Binding::Pie] else {
            panic!("expected pie figure");
        };
        let pie = serde_json::to_value(pie).unwrap();
        assert_eq!(pie["data"][0]["values"][0], serde_json::json!(7.769));
        assert_eq!(
            pie["data"][0]["values"][1],
            serde_json::json!(dataset.mean(Metric::Score))
        );
    }

    #[test]
    fn unresolved_click_yields_placeholders() {
        let dataset = sample();
        let update = dispatch(
            &dataset,
            SelectionState::default(),
            Event::MapClick {
                location: "Atlantis".into(),
            },
        );
        assert_eq!(update.selection.selected_country.as_deref(), Some("Atlantis"));
        let detail = detail_text(&update.views[&Binding::CountryDetail]);
        assert_eq!(detail, ["Click on a country to see details."]);
    }

    #[test]
    fn unchanged_selection_renders_nothing() {
        let dataset = sample();
        let update = dispatch(
            &dataset,
            SelectionState::default(),
            Event::SelectPrimary {
                metric: Metric::Score,
            },
        );
        assert!(update.changed.is_empty());
        assert!(update.views.is_empty());
    }

    #[test]
    fn update_serializes_views_by_region() {
        let dataset = sample();
        let update = dispatch(
            &dataset,
            SelectionState::default(),
            Event::SelectSecondary {
                metric: Some(Metric::Freedom),
            },
        );
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["changed"], serde_json::json!(["secondary_metric"]));
        assert!(value["views"]["scatter-plot"].is_object());
        assert_eq!(
            value["selection"]["secondary_metric"],
            serde_json::json!("Freedom to make life choices")
        );
    }
}
