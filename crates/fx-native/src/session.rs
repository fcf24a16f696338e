//! Runs the scene the way a camera app would: detector frames on one thread,
//! render ticks on another, both against one `Arc<Mutex<FxScene>>`.

use crate::script::{self, FRAME_MS, OBSERVATION_HZ};
use anyhow::anyhow;
use fx_core::{AppMode, CommandLog, FxConfig, FxScene, GestureEvent, SessionClock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub seconds: f64,
    pub fps: u32,
    pub persistent: bool,
    pub seed: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seconds: 6.0,
            fps: 60,
            persistent: false,
            seed: 42,
        }
    }
}

impl SessionOptions {
    pub fn config(&self) -> FxConfig {
        FxConfig {
            persistent_line: self.persistent,
            ..FxConfig::default()
        }
    }

    /// Reject settings neither loop can run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.fps > 0, "fps must be positive");
        anyhow::ensure!(
            self.seconds.is_finite() && self.seconds > 0.0,
            "session length must be a positive number of seconds, got {}",
            self.seconds
        );
        Ok(())
    }

    fn tick_ms(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }
}

/// What the observation side saw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObservationStats {
    pub frames: u64,
    pub snaps: u64,
    pub rain_frames: u64,
    pub erases: u64,
    pub mode_changes: u64,
    pub winks: u64,
}

/// What the render side drew.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub ticks: u64,
    pub peak_particles: usize,
    pub trail_strokes: u64,
    pub ink_segments: u64,
    pub ink_clears: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub observation: ObservationStats,
    pub render: RenderStats,
    pub final_mode: AppMode,
}

/// The two layers a frontend would composite, recorded instead of drawn.
#[derive(Default)]
pub struct Surfaces {
    pub effects: CommandLog,
    pub ink: CommandLog,
}

/// Feed script frame `n` to the scene, stamped `now_ms`.
pub fn observe(scene: &mut FxScene, n: u64, now_ms: f64, stats: &mut ObservationStats) {
    let frame = script::frame(n);
    stats.frames += 1;
    let events = scene.on_hands(&frame.hands, now_ms);
    for ev in &events {
        match ev {
            GestureEvent::Snap { .. } => stats.snaps += 1,
            GestureEvent::Rain { .. } => stats.rain_frames += 1,
            GestureEvent::Erase => stats.erases += 1,
            GestureEvent::ModeChanged { .. } => stats.mode_changes += 1,
            GestureEvent::Point { .. } | GestureEvent::StrokeEnd { .. } => {}
        }
    }
    if scene.on_face(frame.face.as_ref(), now_ms).is_some() {
        stats.winks += 1;
    }
}

/// One render tick onto `surfaces`, folding the draw calls into `stats`.
pub fn render(scene: &mut FxScene, surfaces: &mut Surfaces, stats: &mut RenderStats) {
    surfaces.effects.reset();
    surfaces.ink.reset();
    scene.tick(&mut surfaces.effects, &mut surfaces.ink);
    stats.ticks += 1;
    stats.peak_particles = stats.peak_particles.max(scene.particles().live().len());
    stats.trail_strokes += surfaces.effects.strokes().count() as u64;
    stats.ink_segments += surfaces.ink.strokes().count() as u64;
    stats.ink_clears += surfaces.ink.clears() as u64;
}

/// Interleave both loops on a virtual clock. Deterministic for a given seed.
pub fn replay(opts: &SessionOptions) -> SessionStats {
    let mut scene = FxScene::new(opts.config(), opts.seed);
    let mut surfaces = Surfaces::default();
    let mut stats = SessionStats::default();
    let frames = (opts.seconds * OBSERVATION_HZ).ceil().max(0.0) as u64;
    let ticks = (opts.seconds * opts.fps as f64).ceil().max(0.0) as u64;
    let tick_ms = opts.tick_ms();

    let (mut n, mut t) = (0u64, 0u64);
    while n < frames || t < ticks {
        let next_obs = n as f64 * FRAME_MS;
        let next_tick = t as f64 * tick_ms;
        if n < frames && (t >= ticks || next_obs <= next_tick) {
            observe(&mut scene, n, next_obs, &mut stats.observation);
            n += 1;
        } else {
            render(&mut scene, &mut surfaces, &mut stats.render);
            t += 1;
        }
    }
    stats.final_mode = scene.mode();
    stats
}

fn lock(scene: &Mutex<FxScene>) -> anyhow::Result<std::sync::MutexGuard<'_, FxScene>> {
    scene.lock().map_err(|_| anyhow!("scene lock poisoned"))
}

/// Run both loops in real time: observation on its own thread at 30 Hz,
/// render ticks on the calling thread at `opts.fps`.
pub fn run(opts: &SessionOptions) -> anyhow::Result<SessionStats> {
    opts.validate()?;

    let scene = Arc::new(Mutex::new(FxScene::new(opts.config(), opts.seed)));
    let stop = Arc::new(AtomicBool::new(false));
    let clock = SessionClock::start();

    let observer = {
        let scene = Arc::clone(&scene);
        let stop = Arc::clone(&stop);
        thread::Builder::new()
            .name("observation".into())
            .spawn(move || -> anyhow::Result<ObservationStats> {
                let mut stats = ObservationStats::default();
                let interval = Duration::from_secs_f64(FRAME_MS / 1000.0);
                let mut n = 0u64;
                while !stop.load(Ordering::Relaxed) {
                    let started = Instant::now();
                    {
                        let mut scene = lock(&scene)?;
                        observe(&mut scene, n, clock.now_ms(), &mut stats);
                    }
                    n += 1;
                    thread::sleep(interval.saturating_sub(started.elapsed()));
                }
                Ok(stats)
            })?
    };

    let mut surfaces = Surfaces::default();
    let mut render_stats = RenderStats::default();
    let tick_interval = Duration::from_secs_f64(opts.tick_ms() / 1000.0);
    let deadline = Duration::from_secs_f64(opts.seconds);
    let start = Instant::now();
    let mut last_report = 0u64;
    let render_result = (|| -> anyhow::Result<AppMode> {
        while start.elapsed() < deadline {
            let tick_start = Instant::now();
            let mode = {
                let mut scene = lock(&scene)?;
                render(&mut scene, &mut surfaces, &mut render_stats);
                scene.mode()
            };
            let secs = start.elapsed().as_secs();
            if secs > last_report {
                last_report = secs;
                log::info!(
                    "[frame] {}s ticks={} peak_particles={} mode={}",
                    secs,
                    render_stats.ticks,
                    render_stats.peak_particles,
                    mode
                );
            }
            thread::sleep(tick_interval.saturating_sub(tick_start.elapsed()));
        }
        Ok(lock(&scene)?.mode())
    })();

    stop.store(true, Ordering::Relaxed);
    let observation = observer
        .join()
        .map_err(|_| anyhow!("observation thread panicked"))??;
    let final_mode = render_result?;

    Ok(SessionStats {
        observation,
        render: render_stats,
        final_mode,
    })
}
