//! Widget registry — the single source of truth for open floating widgets.
//!
//! DESIGN
//! ======
//! The registry tracks two collections: the open set (a vec whose order is
//! the stacking order, back on top) and the minimized set. All mutation goes
//! through the methods here; components only ever read. The state is
//! deliberately not persisted — a reload starts with every widget closed.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

/// The closed set of widgets the site can float.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetId {
    Chat,
    Activity,
    Terminal,
    SkillMap,
    Arcade,
}

impl WidgetId {
    /// Every widget, in dock order.
    pub const ALL: [Self; 5] = [Self::Chat, Self::Activity, Self::Terminal, Self::SkillMap, Self::Arcade];

    /// Window title shown in the shell's title bar.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Chat => "assistant",
            Self::Activity => "github activity",
            Self::Terminal => "terminal",
            Self::SkillMap => "skill map",
            Self::Arcade => "arcade",
        }
    }

    /// Stable identifier used for CSS hooks and logging.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Activity => "activity",
            Self::Terminal => "terminal",
            Self::SkillMap => "skill-map",
            Self::Arcade => "arcade",
        }
    }
}

/// Which widgets are open and which of those are minimized.
///
/// Invariant: the minimized set is a subset of the open set. A closed widget
/// cannot be minimized.
#[derive(Clone, Debug, Default)]
pub struct WidgetRegistry {
    open: Vec<WidgetId>,
    minimized: Vec<WidgetId>,
}

impl WidgetRegistry {
    /// Advance `id` through its visibility cycle:
    /// closed → open, open → minimized, minimized → restored.
    pub fn toggle(&mut self, id: WidgetId) {
        if !self.is_open(id) {
            self.open.push(id);
            self.minimized.retain(|w| *w != id);
        } else if self.is_minimized(id) {
            self.minimized.retain(|w| *w != id);
        } else {
            self.minimized.push(id);
        }
    }

    /// Remove `id` from both sets. Safe to call in any state.
    pub fn close(&mut self, id: WidgetId) {
        self.open.retain(|w| *w != id);
        self.minimized.retain(|w| *w != id);
    }

    /// Minimize an open, non-minimized widget; no-op otherwise.
    pub fn minimize(&mut self, id: WidgetId) {
        if self.is_open(id) && !self.is_minimized(id) {
            self.minimized.push(id);
        }
    }

    /// Move an open widget to the top of the stacking order; no-op when
    /// closed.
    pub fn raise(&mut self, id: WidgetId) {
        if self.is_open(id) {
            self.open.retain(|w| *w != id);
            self.open.push(id);
        }
    }

    #[must_use]
    pub fn is_open(&self, id: WidgetId) -> bool {
        self.open.contains(&id)
    }

    #[must_use]
    pub fn is_minimized(&self, id: WidgetId) -> bool {
        self.minimized.contains(&id)
    }

    /// Open widgets in stacking order (last = topmost).
    #[must_use]
    pub fn stacking_order(&self) -> &[WidgetId] {
        &self.open
    }

    /// Position of `id` in the stacking order, for z-index assignment.
    #[must_use]
    pub fn stack_index(&self, id: WidgetId) -> Option<usize> {
        self.open.iter().position(|w| *w == id)
    }
}
