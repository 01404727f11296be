//! Notify-mode consumer: toggles the indicator once per received notification.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::hardware::traits::{ActuatorCommand, Indicator};
use crate::signal::notify::Notification;
use crate::signal::{Timeout, WaitOutcome};

/// Blocks on its notification and toggles on every wake.
///
/// Debouncing is the sampler's business; this task only reacts.
pub struct Toggler<'a, M: RawMutex, I, D> {
    notification: &'a Notification<M>,
    indicator: I,
    delay: D,
    timeout: Timeout,
    received: u32,
}

impl<'a, M, I, D> Toggler<'a, M, I, D>
where
    M: RawMutex,
    I: Indicator,
    D: DelayNs,
{
    pub fn new(notification: &'a Notification<M>, indicator: I, delay: D, timeout: Timeout) -> Self {
        Self {
            notification,
            indicator,
            delay,
            timeout,
            received: 0,
        }
    }

    /// Notifications acted on so far.
    pub fn received(&self) -> u32 {
        self.received
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Wait for one notification (or the timeout) and react to it.
    pub async fn step(&mut self) -> Result<WaitOutcome, crate::Error> {
        let outcome = self.notification.wait(self.timeout, &mut self.delay).await;
        match outcome {
            WaitOutcome::Signaled => {
                self.received = self.received.wrapping_add(1);
                self.indicator.apply(ActuatorCommand::Toggle)?;
                info!("Notification is received ({})", self.received);
            }
            WaitOutcome::TimedOut => {
                warn!("no notification within {:?}", self.timeout);
            }
        }
        Ok(outcome)
    }

    pub async fn run(mut self) -> ! {
        info!(
            "toggler waiting, timeout {:?}, action {:?}",
            self.timeout,
            self.notification.action()
        );
        loop {
            if let Err(e) = self.step().await {
                error!("indicator toggle failed: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::pin::pin;

    use embassy_futures::{block_on, poll_once};
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    use super::*;
    use crate::signal::notify::NotifyAction;

    #[derive(Default)]
    struct Toggles(u32);

    impl Indicator for Toggles {
        fn on(&mut self) -> Result<(), crate::Error> {
            unreachable!("toggler only toggles")
        }

        fn off(&mut self) -> Result<(), crate::Error> {
            unreachable!("toggler only toggles")
        }

        fn toggle(&mut self) -> Result<(), crate::Error> {
            self.0 += 1;
            Ok(())
        }
    }

    struct Immediate;

    impl DelayNs for Immediate {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn toggles_once_per_notification() {
        let notification = Notification::<CriticalSectionRawMutex>::new(NotifyAction::NoAction);
        let mut toggler = Toggler::new(&notification, Toggles::default(), Immediate, Timeout::Forever);

        notification.notify();
        assert_eq!(block_on(toggler.step()), Ok(WaitOutcome::Signaled));
        notification.notify();
        assert_eq!(block_on(toggler.step()), Ok(WaitOutcome::Signaled));

        assert_eq!(toggler.indicator().0, 2);
        assert_eq!(toggler.received(), 2);
    }

    #[test]
    fn blocked_until_notified() {
        let notification = Notification::<CriticalSectionRawMutex>::new(NotifyAction::NoAction);
        let mut toggler = Toggler::new(&notification, Toggles::default(), Immediate, Timeout::Forever);

        {
            let mut step = pin!(toggler.step());
            assert!(poll_once(step.as_mut()).is_pending());
            assert!(poll_once(step.as_mut()).is_pending());
            notification.notify();
            assert!(poll_once(step.as_mut()).is_ready());
        }
        assert_eq!(toggler.indicator().0, 1);
    }

    #[test]
    fn counting_notification_toggles_for_each_notify() {
        let notification = Notification::<CriticalSectionRawMutex>::new(NotifyAction::Increment);
        let mut toggler = Toggler::new(&notification, Toggles::default(), Immediate, Timeout::Forever);
        assert_eq!(notification.action(), NotifyAction::Increment);

        notification.notify();
        notification.notify();
        assert_eq!(block_on(toggler.step()), Ok(WaitOutcome::Signaled));
        assert_eq!(block_on(toggler.step()), Ok(WaitOutcome::Signaled));

        assert_eq!(toggler.indicator().0, 2);
    }

    #[test]
    fn timeout_leaves_indicator_alone() {
        let notification = Notification::<CriticalSectionRawMutex>::new(NotifyAction::NoAction);
        let mut toggler =
            Toggler::new(&notification, Toggles::default(), Immediate, Timeout::from_millis(10));

        assert_eq!(block_on(toggler.step()), Ok(WaitOutcome::TimedOut));
        assert_eq!(toggler.indicator().0, 0);
        assert_eq!(toggler.received(), 0);
    }
}
