//! Voice and video call screens
//!
//! There is no signaling or media here. A call rings, connects on its own after
//! the connect delay (or right away when an incoming call is accepted), counts
//! seconds while connected, and once ended dismisses itself after a short pause.

use crate::config::TimingConfig;
use crate::format::format_call_timer;
use crate::models::CallType;
use crate::navigation::{CallParams, Navigator};
use crate::timer::TaskSet;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::{Arc, Weak};
use tokio::sync::watch;

const CONNECT_TASK: &str = "connect";
const TICK_TASK: &str = "tick";
const DISMISS_TASK: &str = "dismiss";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallPhase {
    Ringing,
    Connected,
    Ended,
}

/// Point-in-time view of a call screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallSnapshot {
    pub phase: CallPhase,
    pub duration_secs: u64,
    pub muted: bool,
    pub speaker_on: bool,
    pub camera_off: bool,
    pub show_controls: bool,
    pub status_text: String,
}

struct CallState {
    phase: CallPhase,
    duration_secs: u64,
    muted: bool,
    speaker_on: bool,
    camera_off: bool,
    show_controls: bool,
    phase_tx: watch::Sender<CallPhase>,
    tasks: TaskSet,
}

impl CallState {
    fn set_phase(&mut self, phase: CallPhase) {
        self.phase = phase;
        self.phase_tx.send_replace(phase);
    }
}

pub struct CallScreen {
    params: CallParams,
    timings: TimingConfig,
    navigator: Navigator,
    state: Arc<Mutex<CallState>>,
}

impl CallScreen {
    /// Opens the screen in `Ringing` and arms the auto-connect timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open(params: CallParams, timings: TimingConfig, navigator: Navigator) -> Self {
        let (phase_tx, _) = watch::channel(CallPhase::Ringing);
        let state = Arc::new(Mutex::new(CallState {
            phase: CallPhase::Ringing,
            duration_secs: 0,
            muted: false,
            speaker_on: false,
            camera_off: false,
            show_controls: true,
            phase_tx,
            tasks: TaskSet::new(),
        }));

        log::info!(
            "{} call with {} ringing ({})",
            match params.call_type {
                CallType::Voice => "Voice",
                CallType::Video => "Video",
            },
            params.name,
            if params.is_incoming { "incoming" } else { "outgoing" }
        );

        {
            let weak = Arc::downgrade(&state);
            let tick = timings.duration_tick();
            let mut guard = state.lock();
            guard.tasks.once(CONNECT_TASK, timings.connect_delay(), move || {
                if let Some(state) = weak.upgrade() {
                    let mut guard = state.lock();
                    if guard.phase == CallPhase::Ringing {
                        log::info!("Call connected");
                        connect(&state, &mut guard, tick);
                    }
                }
            });
        }

        Self {
            params,
            timings,
            navigator,
            state,
        }
    }

    pub fn params(&self) -> &CallParams {
        &self.params
    }

    pub fn phase(&self) -> CallPhase {
        self.state.lock().phase
    }

    /// Watch channel updated on every phase change.
    pub fn phase_changes(&self) -> watch::Receiver<CallPhase> {
        self.state.lock().phase_tx.subscribe()
    }

    pub fn duration_secs(&self) -> u64 {
        self.state.lock().duration_secs
    }

    /// Accept and decline are offered only while an incoming call rings.
    pub fn can_answer(&self) -> bool {
        self.params.is_incoming && self.phase() == CallPhase::Ringing
    }

    /// Connects a ringing incoming call immediately.
    pub fn accept(&self) -> bool {
        if !self.params.is_incoming {
            return false;
        }

        let mut guard = self.state.lock();
        if guard.phase != CallPhase::Ringing {
            return false;
        }

        guard.tasks.cancel(CONNECT_TASK);
        log::info!("Call accepted");
        connect(&self.state, &mut guard, self.timings.duration_tick());
        true
    }

    /// Ends the call from any non-terminal phase and schedules the single
    /// dismissal. Returns `false` when the call had already ended.
    pub fn end(&self) -> bool {
        let mut guard = self.state.lock();
        if guard.phase == CallPhase::Ended {
            return false;
        }

        guard.tasks.cancel(CONNECT_TASK);
        guard.tasks.cancel(TICK_TASK);
        guard.set_phase(CallPhase::Ended);
        log::info!(
            "Call with {} ended after {}",
            self.params.name,
            format_call_timer(guard.duration_secs)
        );

        let navigator = self.navigator.clone();
        guard
            .tasks
            .once(DISMISS_TASK, self.timings.dismiss_delay(), move || {
                navigator.go_back();
            });
        true
    }

    pub fn toggle_mute(&self) -> bool {
        let mut guard = self.state.lock();
        guard.muted = !guard.muted;
        guard.muted
    }

    pub fn toggle_speaker(&self) -> bool {
        let mut guard = self.state.lock();
        guard.speaker_on = !guard.speaker_on;
        guard.speaker_on
    }

    pub fn toggle_camera(&self) -> bool {
        let mut guard = self.state.lock();
        guard.camera_off = !guard.camera_off;
        guard.camera_off
    }

    /// Video calls hide their controls when the remote view is tapped.
    pub fn toggle_controls(&self) -> bool {
        let mut guard = self.state.lock();
        guard.show_controls = !guard.show_controls;
        guard.show_controls
    }

    pub fn status_text(&self) -> String {
        let guard = self.state.lock();
        self.status_for(&guard)
    }

    pub fn snapshot(&self) -> CallSnapshot {
        let guard = self.state.lock();
        CallSnapshot {
            phase: guard.phase,
            duration_secs: guard.duration_secs,
            muted: guard.muted,
            speaker_on: guard.speaker_on,
            camera_off: guard.camera_off,
            show_controls: guard.show_controls,
            status_text: self.status_for(&guard),
        }
    }

    /// Timers still scheduled for this screen.
    pub fn pending_timers(&self) -> usize {
        self.state.lock().tasks.pending_count()
    }

    fn status_for(&self, state: &CallState) -> String {
        match state.phase {
            CallPhase::Ringing if self.params.is_incoming => match self.params.call_type {
                CallType::Voice => "Incoming call...".to_string(),
                CallType::Video => "Incoming video call...".to_string(),
            },
            CallPhase::Ringing => "Calling...".to_string(),
            CallPhase::Connected => format_call_timer(state.duration_secs),
            CallPhase::Ended => "Call ended".to_string(),
        }
    }
}

impl Drop for CallScreen {
    fn drop(&mut self) {
        self.state.lock().tasks.cancel_all();
    }
}

fn connect(shared: &Arc<Mutex<CallState>>, state: &mut CallState, tick: std::time::Duration) {
    state.set_phase(CallPhase::Connected);

    let weak: Weak<Mutex<CallState>> = Arc::downgrade(shared);
    state.tasks.every(TICK_TASK, tick, move || {
        if let Some(shared) = weak.upgrade() {
            let mut guard = shared.lock();
            if guard.phase == CallPhase::Connected {
                guard.duration_secs += 1;
            }
        }
    });
}
