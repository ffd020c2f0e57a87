//! Observation stages: inspect and trace
use std::fmt::Debug;

use crate::error::StreamResult;
use crate::stream_configuration::TraceConfig;
use super::core::Extractor;

// Inspect
#[derive(Debug, Clone)]
pub struct Inspect<E, F> {
    pub(crate) source: E,
    pub(crate) f: F,
    pub(crate) inspected: bool,
}

impl<E, F> Extractor for Inspect<E, F>
where
    E: Extractor,
    F: FnMut(&E::Item),
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        self.inspected = false;
        self.source.advance()
    }

    // The callback sees each element once, however many times it is read
    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        let item = self.source.try_get()?;
        if !self.inspected {
            (self.f)(item);
            self.inspected = true;
        }
        Ok(item)
    }
}

/// Logs every element that passes through, using the `log` facade.
///
/// Lines read `label[i]: item`, where `i` is the element's position in the
/// output of the stage being traced. Like `Inspect`, an element is logged on
/// its first read, so elements that no downstream stage reads (skipped
/// further down, or merely counted) are not logged.
#[derive(Debug, Clone)]
pub struct Trace<E> {
    pub(crate) source: E,
    pub(crate) config: TraceConfig,
    pub(crate) seen: usize,
    pub(crate) logged: bool,
}

impl<E> Extractor for Trace<E>
where
    E: Extractor,
    E::Item: Debug,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        self.logged = false;
        let advanced = self.source.advance();
        if advanced {
            self.seen = self.seen.saturating_add(1);
        }
        advanced
    }

    fn try_get(&mut self) -> StreamResult<&Self::Item> {
        let item = self.source.try_get()?;
        if !self.logged {
            let index = self.seen.saturating_sub(1);
            log::log!(self.config.level, "{}[{}]: {:?}", self.config.label, index, item);
            self.logged = true;
        }
        Ok(item)
    }
}
