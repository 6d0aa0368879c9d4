// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One print batch: everything the host sends while the printer is busy.

use embedded_hal::delay::DelayNs;

use crate::error::RenderError;
use crate::font::GlyphTable;
use crate::motors::Actuators;
use crate::protocol::{Event, Session};
use crate::render::Renderer;

/// Print `first` and every byte `next` yields after it, inside one job.
///
/// `next` is asked again after each byte, so input that arrives while a character is on the
/// tape joins the running batch. The batch ends when `next` returns `None`. `echo` sees each
/// printable byte just before it is rendered.
///
/// A render fault abandons the rest of the batch; unread bytes stay with `next`. The actuators
/// are detached in every case and the first error is returned.
pub fn print_batch<A, D, G>(
    renderer: &mut Renderer<A, D, G>,
    session: &mut Session,
    first: u8,
    mut next: impl FnMut() -> Option<u8>,
    mut echo: impl FnMut(u8),
) -> Result<(), RenderError<A::Error>>
where
    A: Actuators,
    D: DelayNs,
    G: GlyphTable,
{
    let mut job = renderer.begin_job()?;

    let mut rendered = Ok(());
    let mut byte = Some(first);
    while let Some(b) = byte {
        if let Some(Event::Print(code)) = session.push(b) {
            echo(code);
            if let Err(e) = job.render_char(code) {
                rendered = Err(e);
                break;
            }
        }
        byte = next();
    }

    let detached = job.finish();
    rendered.and(detached.map_err(RenderError::from))
}
