use clap::Parser;
use fx_native::{SessionOptions, SessionStats};

/// Headless hand-fx session driven by a scripted gesture replay.
#[derive(Parser, Debug)]
#[command(name = "fx-native", version, about)]
struct Args {
    /// Session length in seconds
    #[arg(long, default_value_t = 6.0)]
    seconds: f64,

    /// Render ticks per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Paint persistent ink instead of fading trails
    #[arg(long)]
    persistent: bool,

    /// Seed for particle jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Interleave the loops on a virtual clock instead of real time
    #[arg(long)]
    replay: bool,
}

fn report(stats: &SessionStats) {
    let o = &stats.observation;
    let r = &stats.render;
    log::info!(
        "[session] frames={} snaps={} rain_frames={} erases={} mode_changes={} winks={}",
        o.frames,
        o.snaps,
        o.rain_frames,
        o.erases,
        o.mode_changes,
        o.winks
    );
    log::info!(
        "[session] ticks={} peak_particles={} trail_strokes={} ink_segments={} ink_clears={} final_mode={}",
        r.ticks,
        r.peak_particles,
        r.trail_strokes,
        r.ink_segments,
        r.ink_clears,
        stats.final_mode
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let opts = SessionOptions {
        seconds: args.seconds,
        fps: args.fps,
        persistent: args.persistent,
        seed: args.seed,
    };
    opts.validate()?;
    log::info!(
        "[session] {:.1}s at {} fps, persistent={}, seed={}",
        opts.seconds,
        opts.fps,
        opts.persistent,
        opts.seed
    );

    let stats = if args.replay {
        fx_native::replay(&opts)
    } else {
        fx_native::run(&opts)?
    };
    report(&stats);
    Ok(())
}
