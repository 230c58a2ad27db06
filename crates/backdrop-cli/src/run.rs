//! Live forwarding: capture session on a blocking message-loop thread,
//! stopped on Ctrl-C.

use backdrop_forward::Config;

/// How long a resolved set of wallpaper windows is reused.
#[cfg(windows)]
const SURFACE_REFRESH: std::time::Duration = std::time::Duration::from_secs(1);

#[cfg(windows)]
pub async fn run(config: Config) -> anyhow::Result<()> {
    use backdrop_forward::windows::{
        ForegroundDesktop, MonitorLayout, PostMessagePoster, WindowTitleSurfaces,
    };
    use backdrop_forward::{CachedSurfaces, Collaborators, Dispatcher};
    use backdrop_input::windows::{HiddenWindowHost, SystemCursor};
    use backdrop_input::CaptureSession;
    use backdrop_types::CaptureMode;
    use tokio::sync::oneshot;
    use tracing::{info, warn};

    if config.capture.mode == CaptureMode::Off {
        warn!("capture mode is off; nothing will be forwarded");
    }

    let (closer_tx, closer_rx) = oneshot::channel();

    // The host window has thread affinity: create, pump and destroy it on
    // one blocking thread.
    let mut message_loop = tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let dispatcher = Dispatcher::new(
            &config.forwarding,
            Collaborators {
                surfaces: Box::new(CachedSurfaces::new(
                    WindowTitleSurfaces::new(config.surfaces.clone()),
                    SURFACE_REFRESH,
                )),
                displays: Box::new(MonitorLayout),
                focus: Box::new(ForegroundDesktop),
                cursor: Box::new(SystemCursor),
                poster: Box::new(PostMessagePoster),
            },
        );
        let mut session = CaptureSession::start(
            config.capture.mode,
            HiddenWindowHost::new(),
            dispatcher.into_hook(),
        )?;
        let _ = closer_tx.send(session.host().closer());
        info!(surfaces = config.surfaces.len(), "forwarding input; press Ctrl-C to stop");

        let pumped = session.host().pump_messages();
        session.stop();
        pumped?;
        Ok(())
    });

    // A dropped sender means start failed; its error is in the task result.
    let Ok(closer) = closer_rx.await else {
        return message_loop.await?;
    };

    tokio::select! {
        result = &mut message_loop => return result?,
        signal = tokio::signal::ctrl_c() => signal?,
    }

    info!("shutting down");
    if let Some(closer) = closer {
        closer.request_close()?;
    }
    message_loop.await?
}

#[cfg(not(windows))]
#[allow(clippy::unused_async)]
pub async fn run(_config: Config) -> anyhow::Result<()> {
    Err(backdrop_input::InputError::Unavailable.into())
}
