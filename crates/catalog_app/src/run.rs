use std::io::Write;

use catalog_logging::{catalog_debug, catalog_info};
use listing_core::{Msg, NavigationMode};
use listing_runtime::{ListingSession, MemoryHistory};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render::render;
use crate::script::Command;

/// Mounts the listing, feeds it the script read from `input` and writes
/// every navigation and view change to `out`. Pending work is allowed to
/// settle once the script ends.
pub async fn run_script<R, W>(
    session: &mut ListingSession<MemoryHistory>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut reported = 0;

    session.dispatch(Msg::Mounted);
    report(session, out, &mut reported)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => apply(session, command, out).await?,
                    Ok(None) => {}
                    Err(err) => writeln!(out, "error: {err:#}")?,
                }
            }
            alive = session.pump() => {
                if !alive {
                    break;
                }
            }
        }
        report(session, out, &mut reported)?;
    }

    settle(session).await;
    report(session, out, &mut reported)?;
    session.dispatch(Msg::Unmounted);
    catalog_info!("script finished at {}", session.state().location());
    Ok(())
}

async fn apply<W: Write>(
    session: &mut ListingSession<MemoryHistory>,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    catalog_debug!("script command {:?}", command);
    match command {
        Command::Back => match session.navigator_mut().back() {
            Some(location) => session.dispatch(Msg::LocationChanged(location)),
            None => writeln!(out, "already at the oldest entry")?,
        },
        Command::Forward => match session.navigator_mut().forward() {
            Some(location) => session.dispatch(Msg::LocationChanged(location)),
            None => writeln!(out, "already at the newest entry")?,
        },
        Command::Settle => settle(session).await,
        Command::Show => write_view(&session.state().view(), out)?,
        command => match command.to_msg(&session.state().view()) {
            Some(msg) => session.dispatch(msg),
            None => writeln!(out, "ignored: {command:?}")?,
        },
    }
    Ok(())
}

/// Pumps until no debounce is armed and no page is loading.
async fn settle(session: &mut ListingSession<MemoryHistory>) {
    while session.is_busy() {
        if !session.pump().await {
            break;
        }
    }
}

fn report<W: Write>(
    session: &mut ListingSession<MemoryHistory>,
    out: &mut W,
    reported: &mut usize,
) -> anyhow::Result<()> {
    let calls = session.navigator().calls();
    for (mode, url) in &calls[*reported..] {
        let verb = match mode {
            NavigationMode::Push => "push",
            NavigationMode::Replace => "replace",
        };
        writeln!(out, "{verb} {url}")?;
    }
    *reported = calls.len();

    if let Some(view) = session.take_view() {
        write_view(&view, out)?;
    }
    Ok(())
}

fn write_view<W: Write>(view: &listing_core::ListingViewModel, out: &mut W) -> anyhow::Result<()> {
    for line in render(view) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
