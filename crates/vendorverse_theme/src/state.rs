//! Theme manager
//!
//! Owns the active theme, keeps the persisted preference, the document and
//! any switcher controls in step with it, and sequences animated switches.
//!
//! The manager never sleeps. Animated switches queue timed steps; the host
//! calls [`ThemeManager::tick`] with its clock (a `setTimeout` armed for
//! [`ThemeManager::next_deadline`] in a browser, a loop in tests).

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::id::ThemeId;
use crate::switcher::{self, SwitcherBindings};
use crate::transition::{
    transition_machine, ActiveTransition, Step, TransitionEvent, TransitionPhase, TransitionToken,
};
use std::time::Duration;
use tracing::{debug, info, trace, warn};
use vendorverse_animation::{transition_list, Due, TimerQueue};
use vendorverse_core::fsm::StateMachine;
use vendorverse_core::{ControlEvent, ElementRef, PreferenceStore, ThemeDocument};

/// Theme manager over an injected preference store and document
pub struct ThemeManager<S, D> {
    config: ThemeConfig,
    store: S,
    document: D,
    timers: TimerQueue<Step>,
    machine: StateMachine<TransitionPhase, TransitionEvent>,
    active: Option<ActiveTransition>,
}

impl<S, D> ThemeManager<S, D>
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    /// Manager with the default configuration
    pub fn new(store: S, document: D) -> Self {
        Self::with_config(ThemeConfig::default(), store, document)
    }

    pub fn with_config(config: ThemeConfig, store: S, document: D) -> Self {
        Self {
            config,
            store,
            document,
            timers: TimerQueue::new(),
            machine: transition_machine(),
            active: None,
        }
    }

    // ========== Lifecycle ==========

    /// Apply the persisted preference without animation and report the
    /// switcher controls the host should listen to.
    ///
    /// Calling it again re-applies the persisted theme.
    pub fn initialize(&mut self, now: Duration) -> SwitcherBindings {
        let theme = self.stored_preference();
        self.apply(theme, false, now);

        let bindings = switcher::discover(&self.document, &self.config);
        info!(
            "theme system loaded: {} (select: {}, buttons: {})",
            theme,
            bindings.select,
            bindings.buttons.len()
        );
        bindings
    }

    /// Persisted preference, or the default when absent, unknown or
    /// unreadable
    pub fn stored_preference(&self) -> ThemeId {
        match self.store.load(&self.config.storage_key) {
            Ok(Some(value)) => ThemeId::normalize(&value),
            Ok(None) => ThemeId::default(),
            Err(err) => {
                warn!("theme preference unreadable, using default: {err}");
                ThemeId::default()
            }
        }
    }

    // ========== Switching ==========

    /// Apply a theme by raw id. Unknown ids apply the default theme.
    ///
    /// Returns the theme that will be active once the switch completes.
    pub fn apply_theme(&mut self, requested: &str, animate: bool, now: Duration) -> ThemeId {
        let theme = ThemeId::normalize(requested);
        if theme.id() != requested {
            debug!("unknown theme {:?}, falling back to {}", requested, theme);
        }
        self.apply(theme, animate, now);
        theme
    }

    /// Apply a theme. A request made while another switch is in flight
    /// cancels the older one.
    pub fn apply(&mut self, theme: ThemeId, animate: bool, now: Duration) {
        self.supersede(animate);

        if !animate {
            self.machine.send(TransitionEvent::StartImmediate);
            self.commit(theme);
            self.machine.send(TransitionEvent::Settle);
            return;
        }

        debug!("theme transition to {} started", theme);
        self.machine.send(TransitionEvent::Start);
        self.begin_fade_out();

        let token = TransitionToken(self.timers.group());
        let delay = self.config.timing.commit_delay();
        self.timers.schedule(now, delay, token.0, Step::Commit);
        self.active = Some(ActiveTransition {
            token,
            target: theme,
            started_at: now,
        });
    }

    /// Theme currently reflected on the document; the default when unset
    pub fn current_theme(&self) -> ThemeId {
        self.document
            .attribute(self.config.target.element(), &self.config.theme_attribute)
            .map(|v| ThemeId::normalize(&v))
            .unwrap_or_default()
    }

    /// Animated light/dark toggle based on [`Self::current_theme`]
    pub fn toggle_theme(&mut self, now: Duration) -> ThemeId {
        let next = self.current_theme().toggled();
        self.apply(next, true, now);
        next
    }

    /// Route a switcher control event to an animated switch
    pub fn handle_event(&mut self, event: &ControlEvent, now: Duration) -> ThemeId {
        trace!("switcher event {:?}", event);
        self.apply_theme(event.value(), true, now)
    }

    // ========== Timers ==========

    /// Run every step due at `now`. Returns true while steps remain.
    pub fn tick(&mut self, now: Duration) -> bool {
        while let Some(due) = self.timers.pop_due(now) {
            self.run_step(due);
        }
        !self.timers.is_empty()
    }

    /// Earliest pending step deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    // ========== Introspection ==========

    pub fn phase(&self) -> TransitionPhase {
        self.machine.current_state()
    }

    /// Target of the in-flight transition
    pub fn pending_theme(&self) -> Option<ThemeId> {
        self.active.map(|t| t.target)
    }

    pub fn active_transition(&self) -> Option<ActiveTransition> {
        self.active
    }

    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Recent phase changes, oldest first
    pub fn transition_history(&self) -> &[(TransitionPhase, TransitionEvent, TransitionPhase)] {
        self.machine.history()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }

    // ========== Internals ==========

    fn supersede(&mut self, animate: bool) {
        let Some(old) = self.active.take() else {
            return;
        };

        let dropped = self.timers.cancel_group(old.token.0);
        debug!(
            "theme transition to {} superseded ({} steps dropped)",
            old.target, dropped
        );
        self.machine.send(TransitionEvent::Cancel);

        // An animated successor restyles everything itself.
        if !animate {
            let restored = self.restore_styles();
            log_failure("restore", restored);
        }
    }

    fn run_step(&mut self, due: Due<Step>) {
        let Some(active) = self.active else {
            trace!("stray {:?} step ignored", due.payload);
            return;
        };
        if active.token.0 != due.group {
            trace!("{:?} step of a superseded transition ignored", due.payload);
            return;
        }

        trace!("theme step {:?} at {:?}", due.payload, due.deadline);
        match due.payload {
            Step::Commit => {
                self.machine.send(TransitionEvent::Commit);
                self.commit(active.target);
                self.machine.send(TransitionEvent::Committed);

                let timing = &self.config.timing;
                let (fade_in, settle) = (timing.fade_in_delay(), timing.settle_delay());
                self.timers
                    .schedule(due.deadline, fade_in, due.group, Step::FadeIn);
                self.timers
                    .schedule(due.deadline, settle, due.group, Step::Settle);
            }
            Step::FadeIn => {
                let shown = self.set_logo_opacity("1");
                log_failure("fade-in", shown);
                self.machine.send(TransitionEvent::FadeIn);
            }
            Step::Settle => {
                self.timers.cancel_group(due.group);
                let restored = self.restore_styles();
                log_failure("settle", restored);
                self.machine.send(TransitionEvent::Settle);
                self.active = None;
                debug!("theme transition to {} settled", active.target);
            }
        }
    }

    /// Write the theme everywhere it is observable. Each part is attempted
    /// even if an earlier one fails.
    fn commit(&mut self, theme: ThemeId) {
        let target = self.config.target.element();
        let attr = self.document.set_attribute(
            target,
            &self.config.theme_attribute,
            theme.id(),
        );
        log_failure("attribute", attr.map_err(Into::into));

        let logo = ElementRef::Id(&self.config.logo_id);
        if self.document.contains(logo) {
            let html = self.document.set_inner_html(logo, theme.logo());
            log_failure("logo", html.map_err(Into::into));
        }

        if let Err(err) = self.store.save(&self.config.storage_key, theme.id()) {
            warn!("theme preference not persisted: {err}");
        }

        let synced = switcher::sync(&mut self.document, &self.config, theme);
        log_failure("switchers", synced);

        debug!("theme {} committed", theme);
    }

    fn begin_fade_out(&mut self) {
        let timing = &self.config.timing;
        let target_css = transition_list(&timing.target_transitions);
        let logo_css = transition_list(&timing.logo_transitions);

        let target = self.config.target.element();
        let res = self
            .document
            .set_style(target, "transition", Some(&target_css));
        log_failure("fade-out", res.map_err(Into::into));

        let logo = ElementRef::Id(&self.config.logo_id);
        if self.document.contains(logo) {
            let res = self
                .document
                .set_style(logo, "transition", Some(&logo_css))
                .and_then(|_| self.document.set_style(logo, "opacity", Some("0")));
            log_failure("fade-out", res.map_err(Into::into));
        }
    }

    fn set_logo_opacity(&mut self, value: &str) -> Result<()> {
        let logo = ElementRef::Id(&self.config.logo_id);
        if self.document.contains(logo) {
            self.document.set_style(logo, "opacity", Some(value))?;
        }
        Ok(())
    }

    /// Drop transition styling and make sure the logo is visible
    fn restore_styles(&mut self) -> Result<()> {
        let target = self.config.target.element();
        self.document.set_style(target, "transition", None)?;

        let logo = ElementRef::Id(&self.config.logo_id);
        if self.document.contains(logo) {
            self.document.set_style(logo, "transition", None)?;
            self.document.set_style(logo, "opacity", Some("1"))?;
        }
        Ok(())
    }
}

fn log_failure(step: &str, result: Result<()>) {
    if let Err(err) = result {
        warn!("theme {step} step failed: {err}");
    }
}
