use std::marker::PhantomData;

use crate::{
    action::{action_model::ActionId, error::Result},
    picker::{
        counter::StateCounter,
        event::EventId,
        picker_model::{
            IconPickerConfig, MouseButton, PickerIcons, PickerLayout, PickerValue, PickerView,
            PointerEvent, PointerOutcome,
        },
    },
    resolve::resolver::ActionResolver,
};

/// Whether the picker currently holds back a value while hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suspension {
    Active,
    Suspended(PickerValue),
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Icon-based input for buffs, consumables and similar toggles.
///
/// The picker never owns the value it edits: every change goes through the
/// config's setter, and the host calls [`IconPicker::handle_changed`] whenever
/// the bound object reports a change.
pub struct IconPicker<M, C: IconPickerConfig<M>> {
    config: C,
    counter: StateCounter,
    suspension: Suspension,
    layout: PickerLayout,
    view: PickerView,
    last_event: Option<EventId>,
    _obj: PhantomData<fn(&M)>,
}

impl<M, C: IconPickerConfig<M>> IconPicker<M, C> {
    pub fn new(config: C, obj: &mut M) -> Self {
        let states = config.states();
        let use_improved_icons = config.improved_id().is_some();
        let layout = PickerLayout {
            use_improved_icons,
            use_improved_icons2: config.improved_id2().is_some(),
            use_counter: !use_improved_icons && states > 2,
            counter_label_hidden: states <= 2,
        };

        let mut picker = Self {
            counter: StateCounter::new(states, config.step()),
            config,
            suspension: Suspension::Active,
            layout,
            view: PickerView::default(),
            last_event: None,
            _obj: PhantomData,
        };

        let initial = picker.config.get_value(obj);
        picker.set_input_value(initial);
        picker.update_state(obj);
        picker
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn current_value(&self) -> i32 {
        self.counter.value()
    }

    pub fn is_active(&self) -> bool {
        self.counter.value() > 0
    }

    pub fn suspension(&self) -> Suspension {
        self.suspension
    }

    pub fn stored_value(&self) -> Option<PickerValue> {
        match self.suspension {
            Suspension::Active => None,
            Suspension::Suspended(value) => Some(value),
        }
    }

    pub fn layout(&self) -> PickerLayout {
        self.layout
    }

    pub fn view(&self) -> &PickerView {
        &self.view
    }

    pub fn last_event_id(&self) -> Option<EventId> {
        self.last_event
    }

    // ---- Transitions ----

    pub fn increment_value(&mut self, obj: &mut M) -> Option<EventId> {
        if self.counter.increment() {
            Some(self.input_changed(obj))
        } else {
            None
        }
    }

    pub fn decrement_value(&mut self, obj: &mut M) -> EventId {
        self.counter.decrement();
        self.input_changed(obj)
    }

    fn advance(&mut self, direction: Direction, obj: &mut M) -> Option<EventId> {
        match direction {
            Direction::Up => self.increment_value(obj),
            Direction::Down => Some(self.decrement_value(obj)),
        }
    }

    /// Route a pointer event. Left click counts up and right button counts
    /// down, swapped when the config asks for `reverse`.
    pub fn handle_pointer(&mut self, event: PointerEvent, obj: &mut M) -> PointerOutcome {
        let (left, right) = if self.config.reverse() {
            (Direction::Down, Direction::Up)
        } else {
            (Direction::Up, Direction::Down)
        };

        match event {
            PointerEvent::Click => PointerOutcome {
                prevent_default: true,
                event_id: self.advance(left, obj),
            },
            PointerEvent::MouseDown(MouseButton::Right) => PointerOutcome {
                prevent_default: true,
                event_id: self.advance(right, obj),
            },
            PointerEvent::MouseDown(_) => PointerOutcome::default(),
            PointerEvent::ContextMenu => PointerOutcome {
                prevent_default: true,
                event_id: None,
            },
        }
    }

    /// Push the exposed value to the bound object, then mirror whatever the
    /// object now reports.
    fn input_changed(&mut self, obj: &mut M) -> EventId {
        let event_id = EventId::next();
        let value = self.input_value();
        tracing::debug!("icon picker {} -> {:?}", event_id, value);

        self.config.set_value(event_id, obj, value);
        let synced = self.config.get_value(obj);
        self.set_input_value(synced);

        self.last_event = Some(event_id);
        event_id
    }

    // ---- Value mapping ----

    pub fn input_value(&self) -> PickerValue {
        if self.config.states() == 2 {
            PickerValue::Bool(self.counter.value() != 0)
        } else {
            PickerValue::Int(self.counter.value())
        }
    }

    /// Set the counter and refresh the view flags.
    pub fn set_input_value(&mut self, value: PickerValue) {
        let v = value.as_number();
        self.counter.set(v);

        let states = self.config.states();
        let has_improved = self.config.improved_id().is_some();

        self.view.root_active = v > 0;
        self.view.counter_active = v > 0;

        if states >= 3 && has_improved {
            self.view.improved_active = v > 1;
        }
        if states >= 4 && self.config.improved_id2().is_some() {
            let second_tier = v > 2;
            self.view.improved2_active = second_tier;
            self.view.improved_hidden = second_tier;
            self.view.improved2_hidden = !second_tier;
        }

        if !has_improved && (states > 3 || states == 0) {
            self.view.counter_text = Some(v.to_string());
        }
    }

    /// Icon for the value currently stored on the object. Reads the getter
    /// rather than the counter, which may lag behind while a change is still
    /// propagating.
    pub fn action_id(&self, obj: &M) -> Option<ActionId> {
        match self.config.get_value(obj).as_number() {
            0 => None,
            1 => self.config.action_id(obj),
            2 if self.config.improved_id().is_some() => self.config.improved_id().cloned(),
            3 if self.config.improved_id2().is_some() => self.config.improved_id2().cloned(),
            _ => self.config.action_id(obj),
        }
    }

    // ---- Suspend / restore ----

    /// Remember the current value and zero the input. No-op while already
    /// suspended.
    pub fn store_value(&mut self, obj: &mut M) -> Option<EventId> {
        if let Suspension::Suspended(_) = self.suspension {
            return None;
        }

        self.suspension = Suspension::Suspended(self.input_value());
        self.set_input_value(PickerValue::Int(0));
        Some(self.input_changed(obj))
    }

    /// Put back the value saved by [`IconPicker::store_value`]. No-op when
    /// nothing is stored.
    pub fn restore_value(&mut self, obj: &mut M) -> Option<EventId> {
        let Suspension::Suspended(stored) = self.suspension else {
            return None;
        };

        self.set_input_value(stored);
        let event_id = self.input_changed(obj);
        self.suspension = Suspension::Active;
        Some(event_id)
    }

    pub fn show_when(&self, obj: &M) -> bool {
        self.config.action_id(obj).is_some() && self.config.show_when(obj)
    }

    /// Call when the bound object's change event fires.
    pub fn handle_changed(&mut self, obj: &mut M) {
        let value = self.config.get_value(obj);
        self.set_input_value(value);
        self.update_state(obj);
    }

    fn update_state(&mut self, obj: &mut M) {
        if self.show_when(obj) {
            self.view.hidden = false;
            self.restore_value(obj);
        } else {
            self.store_value(obj);
            self.view.hidden = true;
        }
    }

    // ---- Icons ----

    /// Resolve names and icons for the base and improved ids.
    pub async fn resolve_icons(&self, obj: &M, resolver: &ActionResolver) -> Result<PickerIcons> {
        let mut icons = PickerIcons::default();

        if let Some(id) = self.config.action_id(obj) {
            icons.action_id = Some(resolver.fill(&id, None).await?);
        }
        let states = self.config.states();
        if states >= 3 {
            if let Some(id) = self.config.improved_id() {
                icons.improved_id = Some(resolver.fill(id, None).await?);
            }
        }
        if states >= 4 {
            if let Some(id) = self.config.improved_id2() {
                icons.improved_id2 = Some(resolver.fill(id, None).await?);
            }
        }
        Ok(icons)
    }
}
