use embassy_time::Instant;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::command::{
    self, CONNECT_SECTIONS, CONNECTED, Command, OptionOutcome, SELECT_MODE_DONE, SET_OPTION_DONE,
};
use crate::config::{Configuration, ScheduleState};
use crate::context::{Frame, Runtime, SpeedSource, StepContext};
use crate::effect;
use crate::mode::ModeId;
use crate::modifier::{self, ModifierState};
use crate::scheduler::StepScheduler;
use crate::storage::{self, Autosave, PersistentStore};
use crate::transport::{ConnectionId, Transport, TransportEvent};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0x5EED_1ED5;

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Seed for effect randomness
    pub seed: u64,
    /// Restore the configuration from the store and save changes back
    pub persist: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            persist: true,
        }
    }
}

/// Wrapping microsecond clock
fn micros(now: Instant) -> u32 {
    now.as_micros() as u32
}

/// Wrapping millisecond clock
fn millis(now: Instant) -> u32 {
    now.as_millis() as u32
}

/// Render loop - the main orchestrator
///
/// Owns the configuration, every pixel buffer and the three collaborators:
/// the LED sink, the session transport and the persistent store.
pub struct Renderer<D, T, S, const N: usize>
where
    D: OutputDriver,
    T: Transport,
    S: PersistentStore,
{
    // Collaborators
    driver: D,
    transport: T,
    store: S,
    persist: bool,

    // Persisted state
    config: Configuration,
    schedule: ScheduleState,

    // Runtime state
    frame: Frame<N>,
    modifier: ModifierState<N>,
    scheduler: StepScheduler,
    runtime: Runtime,
    autosave: Autosave,
}

impl<D, T, S, const N: usize> Renderer<D, T, S, N>
where
    D: OutputDriver,
    T: Transport,
    S: PersistentStore,
{
    /// Create a renderer and restore the configuration
    ///
    /// Falls back to defaults and `Off` when the store holds no valid blob.
    pub fn new(config: &RendererConfig, driver: D, transport: T, store: S, now: Instant) -> Self {
        let mut renderer = Self {
            driver,
            transport,
            store,
            persist: config.persist,
            config: Configuration::default(),
            schedule: ScheduleState::default(),
            frame: Frame::new(),
            modifier: ModifierState::new(),
            scheduler: StepScheduler::new(),
            runtime: Runtime {
                speed_source: SpeedSource::Zero,
                wave_phase: [0; 3],
                rng: SmallRng::seed_from_u64(config.seed),
            },
            autosave: Autosave::new(),
        };
        renderer.restore(now);
        renderer
    }

    fn restore(&mut self, now: Instant) {
        if self.persist {
            match storage::load(&self.store) {
                Ok(state) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[Renderer.restore] loaded mode {}", state.config.mode.as_str());
                    self.config = state.config;
                    self.schedule = state.schedule;
                    self.select_mode_id(self.config.mode, now);
                    self.autosave.clear();
                    return;
                }
                Err(_error) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[Renderer.restore] stored configuration rejected: {}", _error);
                }
            }
        }
        self.config.set_defaults(millis(now));
        self.select_mode_id(ModeId::Off, now);
    }

    /// Process one tick
    ///
    /// Call this continuously. Steps that are not due are skipped, so the
    /// call is cheap when nothing changes.
    pub fn tick(&mut self, now: Instant) {
        self.process_transport(now);

        let now_us = micros(now);
        self.scheduler.settle(now_us);

        if self.modifier.is_active() && self.scheduler.is_due(now_us) {
            modifier::step(&mut self.context(now));
        }

        if !self.modifier.is_effect_paused()
            && !self.scheduler.is_overflow()
            && millis(now) > self.config.cycle.next_change
        {
            effect::special_step(&mut self.context(now));
        }

        if self.effect_speed() != 0
            && self.scheduler.is_due(now_us)
            && !self.modifier.is_effect_paused()
        {
            let mode = self.config.mode;
            let mut ctx = self.context(now);
            effect::step(mode, &mut ctx, false);
            let speed = ctx.effect_speed();
            ctx.schedule(speed);
        }

        if self.frame.dirty {
            self.flush();
        }

        self.process_autosave(now);
    }

    /// Switch to the mode named `name`, `Off` when unknown
    pub fn select_mode(&mut self, name: &str, now: Instant) {
        let mode = ModeId::parse_from_str(name).unwrap_or_default();
        self.select_mode_id(mode, now);
    }

    /// Switch to `mode`, dropping any running modifier
    pub fn select_mode_id(&mut self, mode: ModeId, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.select_mode] {}", mode.as_str());

        self.config.mode = mode;
        self.config.special_mode = if mode.is_special() {
            mode
        } else {
            ModeId::Off
        };
        effect::step(mode, &mut self.context(now), true);
        self.modifier.cancel();
        self.frame.dirty = true;
        self.autosave.mark(now);
    }

    /// Set an option of the controlling mode
    pub fn set_option(&mut self, name: &str, value: &str, now: Instant) -> OptionOutcome {
        let outcome = command::apply_option(&mut self.config, name, value, millis(now));
        match outcome {
            OptionOutcome::Ignored => {
                #[cfg(feature = "esp32-log")]
                println!("[Renderer.set_option] ignoring {}={}", name, value);
                return outcome;
            }
            OptionOutcome::Updated => {}
            OptionOutcome::Reinitialize => {
                let mode = self.config.mode;
                effect::step(mode, &mut self.context(now), true);
            }
        }
        self.autosave.mark(now);
        outcome
    }

    /// Current pixel buffer
    pub const fn leds(&self) -> &[Rgb; N] {
        self.frame.leds()
    }

    pub const fn frame(&self) -> &Frame<N> {
        &self.frame
    }

    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    pub const fn schedule_state(&self) -> &ScheduleState {
        &self.schedule
    }

    pub const fn modifier(&self) -> &ModifierState<N> {
        &self.modifier
    }

    pub const fn scheduler(&self) -> &StepScheduler {
        &self.scheduler
    }

    pub const fn speed_source(&self) -> SpeedSource {
        self.runtime.speed_source
    }

    /// Signed speed of the active effect
    pub const fn effect_speed(&self) -> i8 {
        self.runtime.speed_source.resolve(&self.config)
    }

    /// A configuration change is waiting to be saved
    pub const fn is_save_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    fn context(&mut self, now: Instant) -> StepContext<'_, N> {
        StepContext {
            config: &mut self.config,
            frame: &mut self.frame,
            modifier: &mut self.modifier,
            scheduler: &mut self.scheduler,
            runtime: &mut self.runtime,
            now,
        }
    }

    fn flush(&mut self) {
        for (index, color) in self.frame.leds.iter().enumerate() {
            self.driver.set_pixel(index, *color);
        }
        self.driver.flush();
        self.frame.dirty = false;
    }

    fn process_autosave(&mut self, now: Instant) {
        if !self.persist || !self.autosave.is_due(now) {
            return;
        }
        self.autosave.clear();
        if let Err(_error) = storage::save(&mut self.store, &self.config, &self.schedule) {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer.autosave] commit failed: {:?}", _error);
            self.autosave.mark(now);
        }
    }

    /// Handle every pending transport event (non-blocking)
    fn process_transport(&mut self, now: Instant) {
        while let Some(event) = self.transport.poll() {
            match event {
                TransportEvent::Connected {
                    id,
                    remote: _remote,
                    url: _url,
                } => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[Renderer.connect] client {} from {}.{}.{}.{} url {}",
                        id, _remote[0], _remote[1], _remote[2], _remote[3], _url
                    );
                    self.transport.send(id, CONNECTED);
                    for mode in CONNECT_SECTIONS {
                        self.send_section(id, mode);
                    }
                }
                TransportEvent::Disconnected { id: _id } => {
                    #[cfg(feature = "esp32-log")]
                    println!("[Renderer.disconnect] client {}", _id);
                }
                TransportEvent::Text { id, message } => self.process_message(id, &message, now),
            }
        }
    }

    fn process_message(&mut self, id: ConnectionId, message: &str, now: Instant) {
        match Command::parse(message) {
            Some(Command::SelectMode(name)) => {
                self.select_mode(name, now);
                self.transport.send(id, SELECT_MODE_DONE);
            }
            Some(Command::SetOption { name, value }) => {
                self.set_option(name, value, now);
                self.transport.send(id, SET_OPTION_DONE);
            }
            Some(Command::Dump) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Renderer.dump] mode {} special {} speed {} modifier {:?} paused {} deadline {} overflow {}",
                    self.config.mode.as_str(),
                    self.config.special_mode.as_str(),
                    self.effect_speed(),
                    self.modifier.active(),
                    self.modifier.is_effect_paused(),
                    self.scheduler.deadline(),
                    self.scheduler.is_overflow()
                );
                let mode = self.config.controlling_mode();
                self.send_section(id, mode);
            }
            Some(Command::Unknown) => {
                #[cfg(feature = "esp32-log")]
                println!("[Renderer.command] unknown operation {:?}", message);
            }
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[Renderer.command] dropping malformed {:?}", message);
            }
        }
    }

    /// Send the options of `mode` as `<mode>:<option>:<value>` lines
    fn send_section(&mut self, id: ConnectionId, mode: ModeId) {
        let Self {
            config, transport, ..
        } = self;
        command::for_each_option(config, mode, |option, value| {
            transport.send(id, &command::format_line(mode, option, value));
        });
    }
}
