//! Fluent builder for opening a [`ScheduleEditor`].

use it_core::{ClockTime, PlannerConfig};
use it_schedule::{Itinerary, PlaceSeed, PlanSnapshot, SeedDefaults};

use crate::editor::check_stay;
use crate::{EditorObserver, EditorResult, NoopObserver, ScheduleEditor};

/// Fluent builder for [`ScheduleEditor<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                 |
/// |-------------------|-----------------------------------------|
/// | `.start(t)`       | `config.default_start`                  |
/// | `.end(t)`         | `config.default_end`                    |
/// | `.places(v)`      | no activities                           |
/// | `.catalog(v)`     | empty catalog                           |
/// | `.snapshot(s)`    | none; overrides start/end/places        |
/// | `.observer(o)`    | [`NoopObserver`]                        |
///
/// # Example
///
/// ```rust,ignore
/// let mut editor = EditorBuilder::new(PlannerConfig::default())
///     .start("10:00".parse()?)
///     .places(chosen)
///     .build()?;
/// editor.reorder(id, 0)?;
/// ```
pub struct EditorBuilder<O: EditorObserver = NoopObserver> {
    config:   PlannerConfig,
    start:    Option<ClockTime>,
    end:      Option<Option<ClockTime>>,
    places:   Vec<PlaceSeed>,
    catalog:  Vec<PlaceSeed>,
    snapshot: Option<PlanSnapshot>,
    observer: O,
}

impl EditorBuilder<NoopObserver> {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            start:    None,
            end:      None,
            places:   Vec::new(),
            catalog:  Vec::new(),
            snapshot: None,
            observer: NoopObserver,
        }
    }
}

impl<O: EditorObserver> EditorBuilder<O> {
    pub fn start(mut self, start: ClockTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Window end; pass `None` to open the session without one even if the
    /// config has a default.
    pub fn end(mut self, end: Option<ClockTime>) -> Self {
        self.end = Some(end);
        self
    }

    /// Places already chosen, in visit order.
    pub fn places(mut self, places: Vec<PlaceSeed>) -> Self {
        self.places = places;
        self
    }

    /// Places the session may add by name via
    /// [`ScheduleEditor::select_place`].
    pub fn catalog(mut self, catalog: Vec<PlaceSeed>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Resume editing a previously finalized plan.
    pub fn snapshot(mut self, snapshot: PlanSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn observer<P: EditorObserver>(self, observer: P) -> EditorBuilder<P> {
        EditorBuilder {
            config:   self.config,
            start:    self.start,
            end:      self.end,
            places:   self.places,
            catalog:  self.catalog,
            snapshot: self.snapshot,
            observer,
        }
    }

    /// Validate the config, build and reflow the itinerary, and return a
    /// ready editor.  Every stay must be within `max_stay_minutes`.
    pub fn build(self) -> EditorResult<ScheduleEditor<O>> {
        self.config.validate()?;

        let defaults = SeedDefaults {
            stay_minutes:   self.config.default_stay_minutes,
            travel_minutes: self.config.default_travel_minutes,
        };

        let itinerary = match &self.snapshot {
            Some(snapshot) => Itinerary::from_snapshot(snapshot, defaults)?,
            None => {
                let start = self.start.unwrap_or(self.config.default_start);
                let end = self.end.unwrap_or(self.config.default_end);
                let mut itinerary = Itinerary::from_seeds(start, self.places, defaults)?;
                itinerary.set_schedule_end(end)?;
                itinerary
            }
        };

        for activity in itinerary.iter() {
            check_stay(&self.config, activity.duration_minutes() as i64)?;
        }

        tracing::info!(
            start = %itinerary.schedule_start(),
            activities = itinerary.len(),
            catalog = self.catalog.len(),
            "editing session opened"
        );

        Ok(ScheduleEditor::from_parts(itinerary, self.config, self.catalog, self.observer))
    }
}
