//! Plain mode: dance without a terminal UI.
//!
//! Runs the driver against a virtual stage and writes one JSON line per tick
//! with the frame the presentation layer would receive.

use std::future::Future;
use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::dance::{AnimationState, RenderFrame, Viewport};
use crate::driver::AnimationDriver;
use crate::{MoonwalkConfig, Result};

/// Default width of the virtual stage in pixels.
pub const DEFAULT_STAGE_WIDTH: i32 = 800;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    /// Stop after this many ticks; run until shutdown when `None`
    pub ticks: Option<u64>,
    /// Width of the virtual stage in pixels
    pub stage_width: i32,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            ticks: None,
            stage_width: DEFAULT_STAGE_WIDTH,
        }
    }
}

/// Stage of fixed pixel width; the figure is anchored at its right edge.
#[derive(Debug, Clone, Copy)]
pub struct VirtualStage {
    pub width: i32,
}

impl Viewport for VirtualStage {
    fn right_edge(&self, right_offset: i32) -> i32 {
        self.width - right_offset
    }
}

#[derive(Serialize)]
struct TickLine<'a> {
    tick: u64,
    #[serde(flatten)]
    frame: &'a RenderFrame,
}

/// Dance until `options.ticks` ticks have passed or `shutdown` resolves.
///
/// Returns the number of ticks written.
pub async fn run<W, F>(
    config: &MoonwalkConfig,
    options: &HeadlessOptions,
    shutdown: F,
    out: &mut W,
) -> Result<u64>
where
    W: Write,
    F: Future<Output = ()>,
{
    let stage = VirtualStage {
        width: options.stage_width,
    };
    let mut state = AnimationState::new(config);
    let mut driver = AnimationDriver::new();

    state.toggle_running();
    driver.start(state.tick_interval());
    info!(
        "Dancing {} every {}ms on a {}px stage",
        state.dance_mode().label(),
        state.tick_interval().as_millis(),
        stage.width
    );

    tokio::pin!(shutdown);
    let mut ticks = 0u64;
    while options.ticks.is_none_or(|limit| ticks < limit) {
        tokio::select! {
            _ = driver.next_tick() => {}
            _ = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
        }

        state.tick();
        state.observe_viewport(&stage);
        ticks += 1;

        let frame = state.render_frame();
        serde_json::to_writer(&mut *out, &TickLine { tick: ticks, frame: &frame })?;
        writeln!(out)?;
        out.flush()?;
    }

    driver.stop();
    info!("Stopped after {} ticks", ticks);
    Ok(ticks)
}
