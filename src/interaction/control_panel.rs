use indexmap::{IndexMap, IndexSet};

use crate::core::{Channel, ColumnCatalog, Encoding};
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::render::{MIME_TEXT_HTML, MIME_TEXT_PLAIN, Renderable, escape_html};

use super::ChannelControl;

/// Builds the encoding from the enabled controls.
///
/// Pure: a channel is included iff its control is enabled, and the result is
/// ordered by declared channel order rather than by iteration order.
pub fn derive_encoding<'a, I>(controls: I) -> Encoding
where
    I: IntoIterator<Item = &'a ChannelControl>,
{
    controls
        .into_iter()
        .filter_map(|control| {
            control
                .binding()
                .map(|column| (control.channel(), column.clone()))
        })
        .collect()
}

/// Channel controls must be non-empty and unique.
pub(crate) fn ensure_channel_list(channels: &[Channel]) -> AutoVegaResult<()> {
    if channels.is_empty() {
        return Err(AutoVegaError::InvalidConfig(
            "at least one channel control must be configured".to_owned(),
        ));
    }
    let mut unique = IndexSet::with_capacity(channels.len());
    for channel in channels {
        if !unique.insert(*channel) {
            return Err(AutoVegaError::InvalidConfig(format!(
                "channel `{channel}` is configured more than once"
            )));
        }
    }
    Ok(())
}

/// Channel-keyed table of controls: the interactive encoding editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    controls: IndexMap<Channel, ChannelControl>,
}

impl ControlPanel {
    /// Creates one control per channel, in the given order, pre-bound from `initial`.
    pub fn new(
        channels: &[Channel],
        catalog: &ColumnCatalog,
        initial: &Encoding,
    ) -> AutoVegaResult<Self> {
        ensure_channel_list(channels)?;
        let controls = channels
            .iter()
            .map(|&channel| {
                ChannelControl::new(channel, catalog, initial.get(channel).cloned())
                    .map(|control| (channel, control))
            })
            .collect::<AutoVegaResult<IndexMap<_, _>>>()?;
        Ok(Self { controls })
    }

    #[must_use]
    pub fn control(&self, channel: Channel) -> Option<&ChannelControl> {
        self.controls.get(&channel)
    }

    pub fn control_mut(&mut self, channel: Channel) -> AutoVegaResult<&mut ChannelControl> {
        self.controls
            .get_mut(&channel)
            .ok_or(AutoVegaError::UnknownChannel(channel))
    }

    /// Controls in registration order.
    pub fn controls(&self) -> impl Iterator<Item = &ChannelControl> {
        self.controls.values()
    }

    pub fn channels(&self) -> impl Iterator<Item = Channel> {
        self.controls.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    #[must_use]
    pub fn derive_encoding(&self) -> Encoding {
        derive_encoding(self.controls.values())
    }

    /// Dropdown and checkbox per channel, in registration order.
    #[must_use]
    pub fn render(&self, catalog: &ColumnCatalog) -> Renderable {
        let mut plain = Vec::with_capacity(self.controls.len());
        let mut html = String::from("<div class=\"autovega-encoding\">");

        for control in self.controls.values() {
            let selected = control.selected_column().map(|column| column.name());
            let checkbox = if control.is_enabled() { "[x]" } else { "[ ]" };
            plain.push(format!(
                "{}: {} {checkbox} Enabled",
                control.channel().title(),
                selected.unwrap_or("-")
            ));

            html.push_str(&format!(
                "<div class=\"autovega-channel\"><label>{}:</label><select>",
                control.channel().title()
            ));
            for name in catalog.names() {
                let attr = if Some(name) == selected { " selected" } else { "" };
                let name = escape_html(name);
                html.push_str(&format!("<option value=\"{name}\"{attr}>{name}</option>"));
            }
            let checked = if control.is_enabled() { " checked" } else { "" };
            html.push_str(&format!(
                "</select><label><input type=\"checkbox\"{checked}>Enabled</label></div>"
            ));
        }
        html.push_str("</div>");

        Renderable::new()
            .with_mime(MIME_TEXT_PLAIN, plain.join("\n"))
            .with_mime(MIME_TEXT_HTML, html)
    }
}
