//! Full-length waits on a `DelayNs`.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

/// Wait out all of `duration`, which may be longer than one `delay_us` call
/// can express (about 71.6 minutes).
///
/// Always awaits `delay` at least once, even for a zero duration.
pub(crate) async fn delay_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut remaining = duration.as_micros();
    loop {
        let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
        delay.delay_us(chunk).await;
        remaining -= u64::from(chunk);
        if remaining == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;

    #[derive(Default)]
    struct Calls(Vec<u32>);

    impl DelayNs for Calls {
        async fn delay_ns(&mut self, ns: u32) {
            self.0.push(ns / 1_000);
        }

        async fn delay_us(&mut self, us: u32) {
            self.0.push(us);
        }
    }

    #[test]
    fn short_duration_is_one_call() {
        let mut delay = Calls::default();
        block_on(delay_for(&mut delay, Duration::from_millis(100)));
        assert_eq!(delay.0, vec![100_000]);
    }

    #[test]
    fn zero_duration_still_awaits_once() {
        let mut delay = Calls::default();
        block_on(delay_for(&mut delay, Duration::from_ticks(0)));
        assert_eq!(delay.0, vec![0]);
    }

    #[test]
    fn long_duration_is_split_without_losing_time() {
        let two_hours = Duration::from_secs(2 * 3600);
        let mut delay = Calls::default();
        block_on(delay_for(&mut delay, two_hours));

        assert_eq!(delay.0[0], u32::MAX);
        let total: u64 = delay.0.iter().map(|&us| u64::from(us)).sum();
        assert_eq!(total, two_hours.as_micros());
    }
}
