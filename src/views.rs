use crate::dataset::Dataset;
use crate::figure::{
    Bar, BarMarker, Choropleth, ColorBar, Figure, Geo, Layout, PLASMA, Pie, PieMarker, Projection,
    RDBU, Scatter, Title, Trace, VIRIDIS, color_scale,
};
use crate::models::{Metric, Row};
use crate::query::Direction;
use crate::selection::{Field, SelectionState};
use serde::Serialize;

pub const TOP_COUNT: usize = 10;

// serializes as the page element id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Binding {
    #[serde(rename = "world-map")]
    Map,
    #[serde(rename = "data-insights")]
    Insights,
    #[serde(rename = "country-details")]
    CountryDetail,
    #[serde(rename = "scatter-plot")]
    Scatter,
    #[serde(rename = "bar-chart")]
    Bar,
    #[serde(rename = "trend-line")]
    Trend,
    #[serde(rename = "pie-chart")]
    Pie,
}

impl Binding {
    pub const ALL: [Binding; 7] = [
        Binding::Map,
        Binding::Insights,
        Binding::CountryDetail,
        Binding::Scatter,
        Binding::Bar,
        Binding::Trend,
        Binding::Pie,
    ];

    pub fn inputs(self) -> &'static [Field] {
        match self {
            Binding::Map | Binding::Insights | Binding::Bar | Binding::Trend => {
                &[Field::PrimaryMetric]
            }
            Binding::CountryDetail => &[Field::SelectedCountry],
            Binding::Scatter => &[Field::PrimaryMetric, Field::SecondaryMetric],
            Binding::Pie => &[Field::SelectedCountry, Field::PrimaryMetric],
        }
    }

    pub fn region(self) -> &'static str {
        match self {
            Binding::Map => "world-map",
            Binding::Insights => "data-insights",
            Binding::CountryDetail => "country-details",
            Binding::Scatter => "scatter-plot",
            Binding::Bar => "bar-chart",
            Binding::Trend => "trend-line",
            Binding::Pie => "pie-chart",
        }
    }

    pub fn render(self, dataset: &Dataset, selection: &SelectionState) -> View {
        let primary = selection.primary_metric;
        let country = selection.selected_country.as_deref();
        match self {
            Binding::Map => View::Figure(map_view(dataset, primary)),
            Binding::Insights => View::Text(insights_view(dataset, primary)),
            Binding::CountryDetail => View::Text(country_detail_view(dataset, country)),
            Binding::Scatter => View::Figure(scatter_view(
                dataset,
                primary,
                selection.secondary_metric,
            )),
            Binding::Bar => View::Figure(bar_view(dataset, primary)),
            Binding::Trend => View::Figure(trend_view(dataset, primary)),
            Binding::Pie => View::Figure(pie_view(dataset, country, primary)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum View {
    Figure(Figure),
    Text(TextBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub items: Vec<TextItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextItem {
    pub style: TextStyle,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Heading,
    Paragraph,
}

impl TextItem {
    fn heading(text: impl Into<String>) -> Self {
        Self {
            style: TextStyle::Heading,
            text: text.into(),
        }
    }

    fn paragraph(text: impl Into<String>) -> Self {
        Self {
            style: TextStyle::Paragraph,
            text: text.into(),
        }
    }
}

pub fn map_view(dataset: &Dataset, metric: Metric) -> Figure {
    let rows = dataset.rows();
    let countries: Vec<String> = rows.iter().map(|row| row.country.clone()).collect();
    let mut layout = Layout::dark(format!("World Happiness Index: {metric}"));
    layout.geo = Some(Geo {
        bgcolor: "black",
        showframe: false,
        showcoastlines: true,
        projection: Projection {
            kind: "natural earth",
        },
    });

    Figure {
        data: vec![Trace::Choropleth(Choropleth {
            locations: countries.clone(),
            locationmode: "country names",
            z: rows.iter().map(|row| row.value(metric)).collect(),
            text: countries,
            colorscale: color_scale(&PLASMA),
            colorbar: ColorBar {
                title: Title::new(metric.column()),
            },
            hovertemplate: format!("<b>%{{text}}</b><br>{metric}: %{{z}}<extra></extra>"),
        })],
        layout,
    }
}

pub fn insights_view(dataset: &Dataset, metric: Metric) -> TextBlock {
    let highest = dataset.extremum(metric, Direction::Max);
    let lowest = dataset.extremum(metric, Direction::Min);
    TextBlock {
        items: vec![
            TextItem::heading(format!(
                "Highest {metric}: {} ({})",
                highest.country,
                format_value(highest.value(metric))
            )),
            TextItem::heading(format!(
                "Lowest {metric}: {} ({})",
                lowest.country,
                format_value(lowest.value(metric))
            )),
        ],
    }
}

pub fn country_detail_view(dataset: &Dataset, country: Option<&str>) -> TextBlock {
    let Some(row) = country.and_then(|name| dataset.by_country(name)) else {
        return TextBlock {
            items: vec![TextItem::paragraph("Click on a country to see details.")],
        };
    };

    let mut items = vec![
        TextItem::heading(format!("Details for {}", row.country)),
        TextItem::paragraph(format!("Overall Rank: {}", row.rank)),
    ];
    items.extend(detail_lines(row).map(TextItem::paragraph));
    TextBlock { items }
}

fn detail_lines(row: &Row) -> impl Iterator<Item = String> + '_ {
    [
        ("Score", Metric::Score),
        ("GDP per Capita", Metric::GdpPerCapita),
        ("Social Support", Metric::SocialSupport),
        ("Healthy Life Expectancy", Metric::HealthyLifeExpectancy),
        ("Freedom to Make Life Choices", Metric::Freedom),
        ("Generosity", Metric::Generosity),
        ("Perceptions of Corruption", Metric::Corruption),
    ]
    .into_iter()
    .map(move |(label, metric)| format!("{label}: {}", format_value(row.value(metric))))
}

/// Whole numbers keep one decimal place, so `0` reads as `0.0`.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

pub fn scatter_view(dataset: &Dataset, primary: Metric, secondary: Option<Metric>) -> Figure {
    let Some(secondary) = secondary else {
        return Figure::empty("Select metrics to visualize");
    };

    // one trace per country gives each its own colour and legend entry
    let data = dataset
        .rows()
        .iter()
        .map(|row| {
            Trace::Scatter(Scatter {
                mode: "markers",
                name: Some(row.country.clone()),
                x: vec![row.value(primary)],
                y: vec![row.value(secondary)],
                text: Vec::new(),
                hovertemplate: format!(
                    "<b>{}</b><br>{primary}: %{{x}}<br>{secondary}: %{{y}}<extra></extra>",
                    row.country
                ),
            })
        })
        .collect();

    Figure {
        data,
        layout: Layout::dark(format!("{primary} vs {secondary}"))
            .with_axes(primary.column(), secondary.column()),
    }
}

pub fn bar_view(dataset: &Dataset, metric: Metric) -> Figure {
    let top = dataset.top_n(metric, TOP_COUNT);
    let values: Vec<f64> = top.iter().map(|row| row.value(metric)).collect();

    Figure {
        data: vec![Trace::Bar(Bar {
            x: top.iter().map(|row| row.country.clone()).collect(),
            y: values.clone(),
            marker: BarMarker {
                color: values,
                colorscale: color_scale(&VIRIDIS),
                showscale: true,
                colorbar: ColorBar {
                    title: Title::new(metric.column()),
                },
            },
            hovertemplate: format!("%{{x}}<br>{metric}: %{{y}}<extra></extra>"),
        })],
        layout: Layout::dark(format!("Top {TOP_COUNT} Countries by {metric}"))
            .with_axes("Country or region", metric.column()),
    }
}

pub fn trend_view(dataset: &Dataset, metric: Metric) -> Figure {
    let sorted = dataset.sorted_by(metric);

    Figure {
        data: vec![Trace::Scatter(Scatter {
            mode: "lines",
            name: None,
            x: sorted.iter().map(|row| f64::from(row.rank)).collect(),
            y: sorted.iter().map(|row| row.value(metric)).collect(),
            text: sorted.iter().map(|row| row.country.clone()).collect(),
            hovertemplate: format!(
                "%{{text}}<br>Overall rank: %{{x}}<br>{metric}: %{{y}}<extra></extra>"
            ),
        })],
        layout: Layout::dark(format!("{metric} Trend vs Overall Rank"))
            .with_axes("Overall rank", metric.column()),
    }
}

pub fn pie_view(dataset: &Dataset, country: Option<&str>, metric: Metric) -> Figure {
    let Some(row) = country.and_then(|name| dataset.by_country(name)) else {
        // an empty pie trace keeps plotly from drawing cartesian axes
        return Figure {
            data: vec![pie_trace(Vec::new(), Vec::new())],
            layout: Layout::dark("Click on a country to generate the pie chart"),
        };
    };

    Figure {
        data: vec![pie_trace(
            vec![
                format!("{}'s {metric}", row.country),
                "Global Average".to_string(),
            ],
            vec![row.value(metric), dataset.mean(metric)],
        )],
        layout: Layout::dark(format!("{metric}: {} vs Global Average", row.country)),
    }
}

fn pie_trace(labels: Vec<String>, values: Vec<f64>) -> Trace {
    Trace::Pie(Pie {
        labels,
        values,
        marker: PieMarker {
            colors: RDBU.to_vec(),
        },
        sort: false,
    })
}
