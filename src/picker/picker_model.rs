use crate::{action::action_model::ActionId, picker::event::EventId};

/// Value a picker exposes to the object it edits: a flag for two-state
/// pickers, an integer otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerValue {
    Bool(bool),
    Int(i32),
}

impl PickerValue {
    pub fn as_number(self) -> i32 {
        match self {
            PickerValue::Bool(b) => b as i32,
            PickerValue::Int(v) => v,
        }
    }
}

impl From<bool> for PickerValue {
    fn from(b: bool) -> Self {
        PickerValue::Bool(b)
    }
}

impl From<i32> for PickerValue {
    fn from(v: i32) -> Self {
        PickerValue::Int(v)
    }
}

/// Binds an icon picker to a field of some externally owned object `M`
/// (a player, a raid target, the sim settings, ...).
///
/// Everything but `set_value` must be a pure function of the object.
pub trait IconPickerConfig<M> {
    /// Icon shown for the first state, or `None` when the input does not apply.
    fn action_id(&self, obj: &M) -> Option<ActionId>;

    /// Number of states. 2 is an on/off toggle; 0 means unbounded.
    fn states(&self) -> u32;

    /// Icon for the second tier, used when `states >= 3`.
    fn improved_id(&self) -> Option<&ActionId> {
        None
    }

    /// Icon for the third tier, used when `states >= 4`.
    fn improved_id2(&self) -> Option<&ActionId> {
        None
    }

    /// Swap click roles so a left click counts down.
    fn reverse(&self) -> bool {
        false
    }

    /// Value change per state.
    fn step(&self) -> i32 {
        1
    }

    fn show_when(&self, _obj: &M) -> bool {
        true
    }

    fn get_value(&self, obj: &M) -> PickerValue;

    fn set_value(&self, event_id: EventId, obj: &mut M, value: PickerValue);
}

type ActionIdFn<M> = Box<dyn Fn(&M) -> Option<ActionId>>;
type ShowWhenFn<M> = Box<dyn Fn(&M) -> bool>;
type GetValueFn<M> = Box<dyn Fn(&M) -> PickerValue>;
type SetValueFn<M> = Box<dyn Fn(EventId, &mut M, PickerValue)>;

/// Closure-backed [`IconPickerConfig`], for inputs declared inline.
pub struct PickerConfig<M> {
    action_id: ActionIdFn<M>,
    states: u32,
    improved_id: Option<ActionId>,
    improved_id2: Option<ActionId>,
    reverse: bool,
    step: i32,
    show_when: Option<ShowWhenFn<M>>,
    get_value: GetValueFn<M>,
    set_value: SetValueFn<M>,
}

impl<M> PickerConfig<M> {
    pub fn new(
        states: u32,
        action_id: impl Fn(&M) -> Option<ActionId> + 'static,
        get_value: impl Fn(&M) -> PickerValue + 'static,
        set_value: impl Fn(EventId, &mut M, PickerValue) + 'static,
    ) -> Self {
        Self {
            action_id: Box::new(action_id),
            states,
            improved_id: None,
            improved_id2: None,
            reverse: false,
            step: 1,
            show_when: None,
            get_value: Box::new(get_value),
            set_value: Box::new(set_value),
        }
    }

    pub fn with_improved_id(mut self, id: ActionId) -> Self {
        self.improved_id = Some(id);
        self
    }

    pub fn with_improved_id2(mut self, id: ActionId) -> Self {
        self.improved_id2 = Some(id);
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn with_show_when(mut self, show_when: impl Fn(&M) -> bool + 'static) -> Self {
        self.show_when = Some(Box::new(show_when));
        self
    }
}

impl<M> IconPickerConfig<M> for PickerConfig<M> {
    fn action_id(&self, obj: &M) -> Option<ActionId> {
        (self.action_id)(obj)
    }

    fn states(&self) -> u32 {
        self.states
    }

    fn improved_id(&self) -> Option<&ActionId> {
        self.improved_id.as_ref()
    }

    fn improved_id2(&self) -> Option<&ActionId> {
        self.improved_id2.as_ref()
    }

    fn reverse(&self) -> bool {
        self.reverse
    }

    fn step(&self) -> i32 {
        self.step
    }

    fn show_when(&self, obj: &M) -> bool {
        self.show_when.as_ref().is_none_or(|f| f(obj))
    }

    fn get_value(&self, obj: &M) -> PickerValue {
        (self.get_value)(obj)
    }

    fn set_value(&self, event_id: EventId, obj: &mut M, value: PickerValue) {
        (self.set_value)(event_id, obj, value)
    }
}

// ============================================================================
// Pointer input
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary-button click.
    Click,
    MouseDown(MouseButton),
    ContextMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerOutcome {
    /// The host should suppress the browser's default handling.
    pub prevent_default: bool,
    /// Set when the event changed the value.
    pub event_id: Option<EventId>,
}

// ============================================================================
// Visual state
// ============================================================================

/// Presentation choices fixed when the picker is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerLayout {
    pub use_improved_icons: bool,
    pub use_improved_icons2: bool,
    /// Plain counter badge instead of tier icons.
    pub use_counter: bool,
    /// Counter label is only shown for pickers with more than two states.
    pub counter_label_hidden: bool,
}

/// Classes and text the renderer should apply, kept in sync with the value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickerView {
    pub hidden: bool,
    pub root_active: bool,
    pub counter_active: bool,
    pub improved_active: bool,
    pub improved_hidden: bool,
    pub improved2_active: bool,
    pub improved2_hidden: bool,
    pub counter_text: Option<String>,
}

/// Filled icons for rendering a picker.
#[derive(Debug, Clone, Default)]
pub struct PickerIcons {
    pub action_id: Option<ActionId>,
    pub improved_id: Option<ActionId>,
    pub improved_id2: Option<ActionId>,
}
