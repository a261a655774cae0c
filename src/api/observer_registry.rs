use crate::data::Dataset;
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::extensions::WidgetObserver;
use crate::render::ChartBuilder;

use super::AutoVegaWidget;

impl<D: Dataset, C: ChartBuilder> AutoVegaWidget<D, C> {
    /// Attaches an observer. It sees every event from the next mutation on,
    /// after the observers attached before it.
    pub fn register_observer(&mut self, observer: Box<dyn WidgetObserver>) -> AutoVegaResult<()> {
        let id = observer.id();
        if id.is_empty() {
            return Err(AutoVegaError::InvalidData(
                "widget observers need a non-empty id".to_owned(),
            ));
        }
        if self.observer_position(id).is_some() {
            return Err(AutoVegaError::InvalidData(format!(
                "an observer with id `{id}` is already attached to this widget"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Detaches the observer with `observer_id`; `false` if none was attached.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        match self.observer_position(observer_id) {
            Some(position) => {
                self.observers.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observer_position(observer_id).is_some()
    }

    fn observer_position(&self, observer_id: &str) -> Option<usize> {
        self.observers
            .iter()
            .position(|observer| observer.id() == observer_id)
    }
}
