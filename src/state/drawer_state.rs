//! Drawer overlay state with a deferred save

use crate::error::FormError;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Edge of the screen the drawer slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl Placement {
    pub const ALL: [Placement; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Top,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Left,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl FromStr for Placement {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FormError::InvalidOption {
                option: "placement",
                value: s.to_string(),
            })
    }
}

/// Drawer size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl DrawerSize {
    pub const ALL: [DrawerSize; 3] = [Self::Sm, Self::Md, Self::Lg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Sm => Self::Md,
            Self::Md => Self::Lg,
            Self::Lg => Self::Sm,
        }
    }

    /// Share of the screen along the placement axis
    pub fn percent(&self) -> u16 {
        match self {
            Self::Sm => 30,
            Self::Md => 45,
            Self::Lg => 65,
        }
    }
}

impl FromStr for DrawerSize {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| FormError::InvalidOption {
                option: "size",
                value: s.to_string(),
            })
    }
}

/// Events delivered back to the drawer from scheduled work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    SaveCompleted { ticket: u64 },
}

#[derive(Debug)]
struct PendingSave {
    ticket: u64,
    handle: JoinHandle<()>,
}

/// Drawer demo state.
///
/// `save` flips `is_loading` on and schedules a single completion after
/// `save_delay`. The completion arrives as a [`DrawerEvent`] and only applies
/// if it matches the save still pending. Dropping the state aborts the timer.
#[derive(Debug)]
pub struct DrawerState {
    pub is_open: bool,
    pub is_loading: bool,
    pub placement: Placement,
    pub size: DrawerSize,
    save_delay: Duration,
    pending_save: Option<PendingSave>,
    next_ticket: u64,
    opened_at: Option<Instant>,
}

impl DrawerState {
    pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);
    /// Duration of the slide-in animation
    const SLIDE_DURATION: Duration = Duration::from_millis(200);

    pub fn new(save_delay: Duration) -> Self {
        Self {
            is_open: false,
            is_loading: false,
            placement: Placement::default(),
            size: DrawerSize::default(),
            save_delay,
            pending_save: None,
            next_ticket: 0,
            opened_at: None,
        }
    }

    pub fn save_delay(&self) -> Duration {
        self.save_delay
    }

    pub fn toggle_is_open(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.is_open = true;
            self.opened_at = Some(Instant::now());
        }
    }

    /// Close the drawer, abandoning any save in flight
    pub fn close(&mut self) {
        if self.cancel_pending_save() {
            tracing::info!("drawer closed with save in flight; save cancelled");
        }
        self.is_loading = false;
        self.is_open = false;
        self.opened_at = None;
    }

    pub fn set_placement(&mut self, placement: &str) -> Result<(), FormError> {
        self.placement = placement.parse()?;
        Ok(())
    }

    pub fn set_size(&mut self, size: &str) -> Result<(), FormError> {
        self.size = size.parse()?;
        Ok(())
    }

    /// Start a save. Must be called from within a tokio runtime.
    ///
    /// Returns false if a save is already pending.
    pub fn save(&mut self, events: UnboundedSender<DrawerEvent>) -> bool {
        if self.pending_save.is_some() {
            tracing::debug!("save already pending; ignoring");
            return false;
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let delay = self.save_delay;
        let deadline = tokio::time::Instant::now() + delay;
        self.is_loading = true;

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // receiver gone means the app is shutting down
            let _ = events.send(DrawerEvent::SaveCompleted { ticket });
        });
        self.pending_save = Some(PendingSave { ticket, handle });
        tracing::info!(ticket, delay_ms = delay.as_millis() as u64, "drawer save started");
        true
    }

    /// Apply a scheduled event. Returns true only if it completed the pending save.
    pub fn handle_event(&mut self, event: DrawerEvent) -> bool {
        match event {
            DrawerEvent::SaveCompleted { ticket } => {
                let matches = self
                    .pending_save
                    .as_ref()
                    .is_some_and(|pending| pending.ticket == ticket);
                if !matches {
                    tracing::debug!(ticket, "stale save completion ignored");
                    return false;
                }
                self.pending_save = None;
                self.is_loading = false;
                self.is_open = false;
                self.opened_at = None;
                tracing::info!(ticket, "drawer save completed");
                true
            }
        }
    }

    pub fn has_pending_save(&self) -> bool {
        self.pending_save.is_some()
    }

    /// Slide-in progress from 0.0 to 1.0, eased
    pub fn slide_progress(&self) -> f32 {
        match self.opened_at {
            Some(opened_at) => {
                let elapsed = opened_at.elapsed();
                if elapsed >= Self::SLIDE_DURATION {
                    1.0
                } else {
                    let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
                    simple_easing::cubic_out(progress)
                }
            }
            None => 0.0,
        }
    }

    fn cancel_pending_save(&mut self) -> bool {
        match self.pending_save.take() {
            Some(pending) => {
                pending.handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAVE_DELAY)
    }
}

impl Drop for DrawerState {
    fn drop(&mut self) {
        self.cancel_pending_save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults() {
            let drawer = DrawerState::default();
            assert!(!drawer.is_open);
            assert!(!drawer.is_loading);
            assert_eq!(drawer.placement, Placement::Right);
            assert_eq!(drawer.size, DrawerSize::Md);
            assert_eq!(drawer.save_delay(), Duration::from_millis(1000));
        }

        #[test]
        fn test_toggle_is_open() {
            let mut drawer = DrawerState::default();
            drawer.toggle_is_open();
            assert!(drawer.is_open);
            drawer.toggle_is_open();
            assert!(!drawer.is_open);
        }

        #[test]
        fn test_set_placement_and_size() {
            let mut drawer = DrawerState::default();
            drawer.set_placement("left").unwrap();
            drawer.set_size("lg").unwrap();
            assert_eq!(drawer.placement, Placement::Left);
            assert_eq!(drawer.size, DrawerSize::Lg);
        }

        #[test]
        fn test_unknown_placement_is_rejected() {
            let mut drawer = DrawerState::default();
            let err = drawer.set_placement("center").unwrap_err();
            assert_eq!(
                err,
                FormError::InvalidOption {
                    option: "placement",
                    value: "center".to_string()
                }
            );
            assert_eq!(drawer.placement, Placement::Right);
        }

        #[test]
        fn test_unknown_size_is_rejected() {
            assert!("xl".parse::<DrawerSize>().is_err());
        }

        #[test]
        fn test_next_cycles_back() {
            let mut placement = Placement::Left;
            for _ in 0..Placement::ALL.len() {
                placement = placement.next();
            }
            assert_eq!(placement, Placement::Left);
            assert_eq!(DrawerSize::Lg.next(), DrawerSize::Sm);
        }

        #[test]
        fn test_slide_progress_closed_is_zero() {
            assert_eq!(DrawerState::default().slide_progress(), 0.0);
        }
    }

    mod save {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_save_flow_completes_after_delay() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut drawer = DrawerState::default();
            drawer.toggle_is_open();

            assert!(drawer.save(tx));
            assert!(drawer.is_loading);
            assert!(drawer.is_open);

            tokio::time::advance(Duration::from_millis(999)).await;
            assert!(rx.try_recv().is_err());
            assert!(drawer.is_loading);
            assert!(drawer.is_open);

            let event = rx.recv().await.unwrap();
            assert!(drawer.handle_event(event));
            assert!(!drawer.is_loading);
            assert!(!drawer.is_open);
            assert!(!drawer.has_pending_save());
        }

        #[tokio::test(start_paused = true)]
        async fn test_second_save_while_loading_is_ignored() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut drawer = DrawerState::default();

            assert!(drawer.save(tx.clone()));
            assert!(!drawer.save(tx));

            let event = rx.recv().await.unwrap();
            assert_eq!(event, DrawerEvent::SaveCompleted { ticket: 1 });
            drawer.handle_event(event);

            tokio::time::sleep(Duration::from_secs(2)).await;
            assert!(rx.try_recv().is_err());
        }

        #[tokio::test(start_paused = true)]
        async fn test_close_cancels_pending_save() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut drawer = DrawerState::default();
            drawer.toggle_is_open();
            drawer.save(tx);

            drawer.toggle_is_open();
            assert!(!drawer.is_loading);
            assert!(!drawer.has_pending_save());

            tokio::time::sleep(Duration::from_secs(2)).await;
            assert!(rx.try_recv().is_err());
        }

        #[tokio::test(start_paused = true)]
        async fn test_drop_cancels_pending_save() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut drawer = DrawerState::default();
            drawer.save(tx);
            drop(drawer);

            tokio::time::sleep(Duration::from_secs(2)).await;
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_stale_completion_is_noop() {
            let mut drawer = DrawerState::default();
            drawer.toggle_is_open();
            assert!(!drawer.handle_event(DrawerEvent::SaveCompleted { ticket: 42 }));
            assert!(drawer.is_open);
            assert!(!drawer.is_loading);
        }

        #[tokio::test(start_paused = true)]
        async fn test_custom_delay() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut drawer = DrawerState::new(Duration::from_millis(250));
            drawer.save(tx);

            tokio::time::advance(Duration::from_millis(249)).await;
            assert!(rx.try_recv().is_err());
            tokio::time::advance(Duration::from_millis(2)).await;
            let event = rx.recv().await.unwrap();
            drawer.handle_event(event);
            assert!(!drawer.is_loading);
        }
    }
}
