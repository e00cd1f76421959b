//! Theme preference state: explicit mode, resolved light/dark, mount gate.
//!
//! DESIGN
//! ======
//! The controller is a plain value so the cycle and resolution rules can be
//! exercised without a browser. The three outside collaborators (persistent
//! store, OS color-scheme query, document root marker) sit behind small
//! traits; `util::theme` supplies the `web-sys` implementation.
//!
//! ERROR HANDLING
//! ==============
//! Every outside read is best-effort. A missing, unreadable, or malformed
//! stored value resolves to `ThemeMode::System`; a failed OS query reads as
//! "prefers light". Nothing here returns an error.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the explicit mode. Absent means "follow system".
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while the dark theme is rendered.
pub const DARK_CLASS: &str = "dark";

/// The user's explicit theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Defer to the operating environment's preference.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Next mode in the fixed `System → Light → Dark → System` cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// Decode a persisted value. Only the exact strings `"light"` and
    /// `"dark"` are explicit choices; anything else follows the system.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::System,
        }
    }

    /// Value to persist for this mode, or `None` when the key must be absent.
    #[must_use]
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::System => None,
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
        }
    }

    /// Resolve against an OS preference sample.
    #[must_use]
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::from_prefers_dark(prefers_dark),
        }
    }
}

/// The concrete theme actually rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// One-shot readiness gate. The control renders a neutral placeholder until
/// the stored and OS preferences have been read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Ready,
}

/// Persistent key-value store holding [`STORAGE_KEY`].
pub trait PreferenceStore {
    /// Current stored value, `None` when absent or unreadable.
    fn read(&self) -> Option<String>;
    fn write(&mut self, value: &str);
    fn remove(&mut self);
}

/// Operating-environment color-scheme preference.
pub trait ColorSchemeQuery {
    /// Whether the environment prefers a dark scheme. Failures read as `false`.
    fn prefers_dark(&self) -> bool;
}

/// Top-level rendered node carrying the dark marker.
pub trait RootMarker {
    fn set_dark(&mut self, enabled: bool);
}

/// Everything the controller touches outside itself.
pub trait ThemeEnv: PreferenceStore + ColorSchemeQuery + RootMarker {}

impl<T: PreferenceStore + ColorSchemeQuery + RootMarker> ThemeEnv for T {}

/// Theme controller state.
///
/// `resolved` is only meaningful once `lifecycle` is [`Lifecycle::Ready`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    resolved: ResolvedTheme,
    lifecycle: Lifecycle,
}

impl ThemeState {
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Read the stored mode and OS preference and mark the controller ready.
    ///
    /// Runs once per page instance; later calls leave the state untouched and
    /// return `false`.
    pub fn initialize<E: PreferenceStore + ColorSchemeQuery + ?Sized>(&mut self, env: &E) -> bool {
        if self.is_ready() {
            return false;
        }
        let stored = env.read();
        let prefers_dark = env.prefers_dark();
        self.mode = ThemeMode::from_stored(stored.as_deref());
        self.resolved = self.mode.resolve(prefers_dark);
        self.lifecycle = Lifecycle::Ready;
        true
    }

    /// Bring the store, `resolved`, and the root marker in line with `mode`.
    ///
    /// No-op before [`ThemeState::initialize`]. Returns whether `resolved`
    /// changed, so a reactive caller knows to publish the new value. A second
    /// call with unchanged state writes the same store value and marker again
    /// and returns `false`.
    pub fn apply_effects<E: ThemeEnv + ?Sized>(&mut self, env: &mut E) -> bool {
        if !self.is_ready() {
            return false;
        }
        let resolved = match self.mode.as_stored() {
            Some(value) => {
                env.write(value);
                // Explicit modes ignore the OS sample.
                self.mode.resolve(false)
            }
            None => {
                env.remove();
                ResolvedTheme::from_prefers_dark(env.prefers_dark())
            }
        };
        let changed = resolved != self.resolved;
        self.resolved = resolved;
        env.set_dark(self.resolved.is_dark());
        changed
    }

    /// Advance `mode` to the next value in the cycle. `resolved` is left for
    /// [`ThemeState::apply_effects`] to recompute.
    pub fn toggle(&mut self) {
        self.mode = self.mode.next();
    }

    /// Tooltip text for the toggle control.
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        match (self.mode, self.resolved) {
            (ThemeMode::System, ResolvedTheme::Dark) => "System: Dark",
            (ThemeMode::System, ResolvedTheme::Light) => "System: Light",
            (ThemeMode::Dark, _) => "Dark mode",
            (ThemeMode::Light, _) => "Light mode",
        }
    }
}
