//! Decorative image rotator and the weekday background.

use crate::config::ImagesConfig;
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use rand::Rng;

/// Rotation interval used when the configured one cannot be represented.
pub const DEFAULT_ROTATE_SECS: i64 = 60;

/// Cycles through a fixed list of images.
///
/// Starts on a random image, advances on its own every `rotate_every`, and
/// can be stepped with buttons or a horizontal swipe. Any manual step restarts
/// the rotation timer.
#[derive(Debug, Clone)]
pub struct ImageRotator {
    images: Vec<String>,
    current: usize,
    rotate_every: Duration,
    swipe_threshold: f64,
    last_change: DateTime<Utc>,
}

impl ImageRotator {
    pub fn new(images: Vec<String>, rotate_every: Duration, swipe_threshold: f64, now: DateTime<Utc>) -> Self {
        Self {
            images,
            current: 0,
            rotate_every,
            swipe_threshold,
            last_change: now,
        }
    }

    pub fn from_config<R: Rng>(config: &ImagesConfig, rng: &mut R, now: DateTime<Utc>) -> Self {
        let mut rotator = Self::new(
            config.image_paths(),
            rotate_interval(config.rotate_secs),
            config.swipe_threshold,
            now,
        );
        rotator.shuffle_start(rng, now);
        rotator
    }

    pub fn rotate_every(&self) -> Duration {
        self.rotate_every
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Path of the image on display, `None` with an empty list.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Jump to a random image (page load, pull-to-refresh).
    pub fn shuffle_start<R: Rng>(&mut self, rng: &mut R, now: DateTime<Utc>) -> Option<&str> {
        if !self.images.is_empty() {
            self.current = rng.random_range(0..self.images.len());
        }
        self.last_change = now;
        self.current()
    }

    /// Step by `direction` (+1 next, -1 previous), wrapping at both ends.
    pub fn step(&mut self, direction: isize, now: DateTime<Utc>) -> Option<&str> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        let offset = direction.rem_euclid(len as isize) as usize;
        self.current = (self.current + offset) % len;
        self.last_change = now;
        self.current()
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> Option<&str> {
        self.step(1, now)
    }

    pub fn previous(&mut self, now: DateTime<Utc>) -> Option<&str> {
        self.step(-1, now)
    }

    /// Horizontal swipe over the image: left shows the next image, right the
    /// previous one. Shorter swipes are ignored.
    pub fn swipe(&mut self, start_x: f64, end_x: f64, now: DateTime<Utc>) -> Option<&str> {
        if end_x < start_x - self.swipe_threshold {
            self.next(now)
        } else if end_x > start_x + self.swipe_threshold {
            self.previous(now)
        } else {
            None
        }
    }

    /// Timer callback. Advances when the current image has been up long enough.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<&str> {
        if now - self.last_change >= self.rotate_every {
            self.next(now)
        } else {
            None
        }
    }
}

/// `secs` as a duration, falling back to the default when out of range.
fn rotate_interval(secs: u64) -> Duration {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or_else(|| {
            log::warn!(
                "event=images_config module=images status=out_of_range rotate_secs={} fallback={}",
                secs,
                DEFAULT_ROTATE_SECS
            );
            Duration::seconds(DEFAULT_ROTATE_SECS)
        })
}

/// Background image for the day of the week, e.g. `imgs/bgs/monday.jpg`.
pub fn background_for(weekday: Weekday) -> String {
    let day = match weekday {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    };
    format!("imgs/bgs/{day}.jpg")
}

pub fn background_on<T: Datelike>(date: &T) -> String {
    background_for(date.weekday())
}
