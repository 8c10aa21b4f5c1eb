use anyhow::Result;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::Lines;
use tokio::sync::mpsc;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

enum Source {
    Internal(Option<Event>),
    Input(std::io::Result<Option<String>>),
}

/// Merges terminal input lines with events raised inside the application,
/// such as the catalog finishing loading.
pub struct EventsService<R> {
    input: Lines<R>,
    input_closed: bool,
    events: mpsc::UnboundedReceiver<Event>,
    events_closed: bool,
}

impl<R> EventsService<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(input: R, events: mpsc::UnboundedReceiver<Event>) -> EventsService<R> {
        return EventsService {
            input: input.lines(),
            input_closed: false,
            events,
            events_closed: false,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let source = tokio::select! {
                biased;
                event = self.events.recv(), if !self.events_closed => Source::Internal(event),
                line = self.input.next_line(), if !self.input_closed => Source::Input(line),
                else => return Ok(Event::Quit),
            };

            match source {
                Source::Internal(Some(event)) => return Ok(event),
                Source::Internal(None) => self.events_closed = true,
                Source::Input(Ok(Some(line))) => return Ok(Event::from_input(&line)),
                Source::Input(Ok(None)) => {
                    self.input_closed = true;
                    return Ok(Event::Quit);
                }
                Source::Input(Err(err)) => return Err(err.into()),
            }
        }
    }
}
