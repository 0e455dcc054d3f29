//! The clock module keeps the "current time" that drives the widget preview.
//!
//! A [`ClockReading`] is re-sampled once per [`TICK_INTERVAL`]. [`use_clock`] ties the ticker to
//! the scope of the component that calls it: the ticker future lives inside `use_future`, so when
//! the component unmounts the future is dropped with the scope and no further readings are
//! produced.

use chrono::{Local, NaiveDate, NaiveDateTime};
use dioxus::prelude::*;
use futures::{Stream, StreamExt};
use std::fmt;
use std::time::Duration;


/// How often the preview clock is re-sampled.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A local wall-clock instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockReading(NaiveDateTime);

impl ClockReading {
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Builds a reading from calendar components, `None` if they don't name a real minute.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, 0)
            .map(Self)
    }

    /// Formats the reading with a strftime pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }
}

impl From<NaiveDateTime> for ClockReading {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Where the ticker gets its readings from.
pub trait TimeSource {
    fn now(&self) -> ClockReading;
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> ClockReading {
        ClockReading::now()
    }
}

/// Sleeps on whichever timer the target platform provides.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// An endless stream yielding one reading per [`TICK_INTERVAL`].
pub fn ticks<S: TimeSource>(source: S) -> impl Stream<Item = ClockReading> {
    futures::stream::unfold(source, |source| async move {
        sleep(TICK_INTERVAL).await;
        let reading = source.now();
        Some((reading, source))
    })
}

/// Feeds every tick to `on_tick`. Runs until the future is dropped.
pub async fn run_ticker<S: TimeSource>(source: S, mut on_tick: impl FnMut(ClockReading)) {
    tracing::debug!("clock ticker started");

    let stream = ticks(source);
    futures::pin_mut!(stream);
    while let Some(reading) = stream.next().await {
        tracing::trace!(%reading, "tick");
        on_tick(reading);
    }
}

/// Hook returning a signal that holds the current reading, refreshed every second while the
/// calling component is mounted.
pub fn use_clock() -> ReadSignal<ClockReading> {
    use_clock_with(LocalTime)
}

/// [`use_clock`] over any [`TimeSource`].
pub fn use_clock_with<S>(source: S) -> ReadSignal<ClockReading>
where
    S: TimeSource + Clone + 'static,
{
    let seed = source.clone();
    let mut reading = use_signal(move || seed.now());

    use_future(move || run_ticker(source.clone(), move |now| reading.set(now)));

    reading.into()
}
