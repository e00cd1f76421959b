#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{ResolvedTheme, ThemeMode, ThemeState};

#[test]
fn read_is_absent_in_non_hydrate_tests() {
    assert_eq!(BrowserThemeEnv.read(), None);
}

#[test]
fn prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!BrowserThemeEnv.prefers_dark());
}

#[test]
fn writes_are_noop_but_callable() {
    let mut env = BrowserThemeEnv;
    env.write("dark");
    env.remove();
    env.set_dark(true);
    env.set_dark(false);
    assert_eq!(env.read(), None);
}

#[test]
fn controller_falls_back_to_system_light_without_browser() {
    let mut env = BrowserThemeEnv;
    let mut state = ThemeState::default();
    assert!(state.initialize(&env));
    assert!(!state.apply_effects(&mut env));
    assert_eq!(state.mode(), ThemeMode::System);
    assert_eq!(state.resolved(), ResolvedTheme::Light);
    assert_eq!(state.display_label(), "System: Light");
}
