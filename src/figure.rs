use serde::Serialize;

pub const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

pub const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

pub const RDBU: [&str; 11] = [
    "rgb(103,0,31)",
    "rgb(178,24,43)",
    "rgb(214,96,77)",
    "rgb(244,165,130)",
    "rgb(253,219,199)",
    "rgb(247,247,247)",
    "rgb(209,229,240)",
    "rgb(146,197,222)",
    "rgb(67,147,195)",
    "rgb(33,102,172)",
    "rgb(5,48,97)",
];

// [[position, colour], ...]
pub type ColorScale = Vec<(f64, &'static str)>;

pub fn color_scale(palette: &[&'static str]) -> ColorScale {
    let last = palette.len().saturating_sub(1).max(1) as f64;
    palette
        .iter()
        .enumerate()
        .map(|(index, colour)| (index as f64 / last, *colour))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::dark(title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Choropleth(Choropleth),
    Scatter(Scatter),
    Bar(Bar),
    Pie(Pie),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choropleth {
    pub locations: Vec<String>,
    pub locationmode: &'static str,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    pub colorscale: ColorScale,
    pub colorbar: ColorBar,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub marker: BarMarker,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<f64>,
    pub colorscale: ColorScale,
    pub showscale: bool,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pie {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub marker: PieMarker,
    pub sort: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub bgcolor: &'static str,
    pub showframe: bool,
    pub showcoastlines: bool,
    pub projection: Projection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Layout {
    pub fn dark(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
            paper_bgcolor: "black",
            plot_bgcolor: "black",
            font: Font { color: "white" },
            xaxis: None,
            yaxis: None,
            geo: None,
            showlegend: None,
        }
    }

    pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.xaxis = Some(Axis { title: Title::new(x) });
        self.yaxis = Some(Axis { title: Title::new(y) });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_scale_spans_unit_interval() {
        let scale = color_scale(&PLASMA);
        assert_eq!(scale.len(), PLASMA.len());
        assert_eq!(scale[0], (0.0, "#0d0887"));
        assert_eq!(scale[scale.len() - 1], (1.0, "#f0f921"));
    }

    #[test]
    fn traces_carry_plotly_type_tag() {
        let trace = Trace::Pie(Pie {
            labels: vec!["a".into()],
            values: vec![1.0],
            marker: PieMarker { colors: vec!["red"] },
            sort: false,
        });
        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], json!("pie"));
        assert_eq!(value["labels"], json!(["a"]));
    }

    #[test]
    fn empty_figure_omits_unset_layout_fields() {
        let value = serde_json::to_value(Figure::empty("Pick one")).unwrap();
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["layout"]["title"]["text"], json!("Pick one"));
        assert!(value["layout"].get("xaxis").is_none());
    }
}
