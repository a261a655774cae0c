use indexmap::IndexSet;

use crate::core::{ChartType, MarkKind};
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::render::{MIME_TEXT_HTML, MIME_TEXT_PLAIN, Renderable, escape_html};

use super::ChartTypeChange;

/// Mutually exclusive toolbar selection between the table and chart types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTypeSelector {
    options: Vec<ChartType>,
    current: ChartType,
}

impl Default for ChartTypeSelector {
    fn default() -> Self {
        Self {
            options: ChartType::ALL.to_vec(),
            current: ChartType::Table,
        }
    }
}

impl ChartTypeSelector {
    pub fn new(options: Vec<ChartType>, initial: ChartType) -> AutoVegaResult<Self> {
        ensure_toolbar_options(&options, initial)?;
        Ok(Self {
            options,
            current: initial,
        })
    }

    #[must_use]
    pub fn options(&self) -> &[ChartType] {
        &self.options
    }

    #[must_use]
    pub fn current(&self) -> ChartType {
        self.current
    }

    #[must_use]
    pub fn current_mark(&self) -> Option<MarkKind> {
        self.current.mark()
    }

    #[must_use]
    pub fn is_registered(&self, chart_type: ChartType) -> bool {
        self.options.contains(&chart_type)
    }

    /// Switches the active option. Any registered option can be selected at any time.
    pub fn select(&mut self, chart_type: ChartType) -> AutoVegaResult<ChartTypeChange> {
        if !self.is_registered(chart_type) {
            return Err(AutoVegaError::UnknownChartType(chart_type));
        }
        let previous = std::mem::replace(&mut self.current, chart_type);
        Ok(ChartTypeChange {
            previous,
            current: chart_type,
        })
    }

    /// Toggle-button row; the active option is bracketed in the text form.
    #[must_use]
    pub fn render_toolbar(&self) -> Renderable {
        let plain: Vec<String> = self
            .options
            .iter()
            .map(|option| {
                if *option == self.current {
                    format!("[{option}]")
                } else {
                    option.to_string()
                }
            })
            .collect();

        let mut html = String::from("<div class=\"autovega-toolbar\">");
        for option in &self.options {
            let class = if *option == self.current {
                "autovega-toggle active"
            } else {
                "autovega-toggle"
            };
            html.push_str(&format!(
                "<button class=\"{class}\">{}</button>",
                escape_html(option.as_str())
            ));
        }
        html.push_str("</div>");

        Renderable::new()
            .with_mime(MIME_TEXT_PLAIN, plain.join(" "))
            .with_mime(MIME_TEXT_HTML, html)
    }
}

/// Toolbar options must be non-empty, unique and include `initial`.
pub(crate) fn ensure_toolbar_options(
    options: &[ChartType],
    initial: ChartType,
) -> AutoVegaResult<()> {
    if options.is_empty() {
        return Err(AutoVegaError::InvalidConfig(
            "chart type toolbar must offer at least one option".to_owned(),
        ));
    }
    let mut unique = IndexSet::with_capacity(options.len());
    for chart_type in options {
        if !unique.insert(*chart_type) {
            return Err(AutoVegaError::InvalidConfig(format!(
                "chart type `{chart_type}` is offered more than once"
            )));
        }
    }
    if !unique.contains(&initial) {
        return Err(AutoVegaError::InvalidConfig(format!(
            "initial chart type `{initial}` is not offered by the toolbar"
        )));
    }
    Ok(())
}
