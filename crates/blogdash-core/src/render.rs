//! Card-grid render choreography.
//!
//! A [`RenderPlan`] lists what the card grid does when a new derived view is
//! published, with the delay of each step relative to publication. Every
//! plan is stamped with the generation of the view it was built for; a step
//! whose generation is no longer current must be dropped by the renderer.

use std::time::Duration;

/// Delay before the empty-state panel appears, after the grid is cleared.
pub const EMPTY_STATE_DELAY: Duration = Duration::from_millis(50);
/// Time given to outgoing cards to play their removal animation.
pub const CARD_REMOVAL_DELAY: Duration = Duration::from_millis(150);
/// Entrance stagger between consecutive cards.
pub const CARD_STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderAction {
    HideEmptyState,
    ClearGrid,
    ShowEmptyState,
    MarkCardsRemoving { count: usize },
    /// Replace the grid with the view's cards; card `i` animates in after
    /// `i * CARD_STAGGER`.
    DisplayCards { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStep {
    pub delay: Duration,
    pub action: RenderAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub generation: u64,
    pub steps: Vec<RenderStep>,
}

impl RenderPlan {
    /// Plan the transition from a grid showing `previous_cards` cards to a
    /// view of `view_len` posts.
    pub fn transition(generation: u64, previous_cards: usize, view_len: usize) -> Self {
        let mut steps = vec![RenderStep::now(RenderAction::HideEmptyState)];

        if view_len == 0 {
            steps.push(RenderStep::now(RenderAction::ClearGrid));
            steps.push(RenderStep::after(EMPTY_STATE_DELAY, RenderAction::ShowEmptyState));
        } else if previous_cards > 0 {
            steps.push(RenderStep::now(RenderAction::MarkCardsRemoving {
                count: previous_cards,
            }));
            steps.push(RenderStep::after(
                CARD_REMOVAL_DELAY,
                RenderAction::DisplayCards { count: view_len },
            ));
        } else {
            steps.push(RenderStep::now(RenderAction::DisplayCards { count: view_len }));
        }

        Self { generation, steps }
    }

    /// Entrance delay of the card at `index`.
    pub fn card_delay(index: usize) -> Duration {
        CARD_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
    }

    /// Time from publication until the last step has run.
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| step.delay)
            .max()
            .unwrap_or_default()
    }
}

impl RenderStep {
    fn now(action: RenderAction) -> Self {
        Self::after(Duration::ZERO, action)
    }

    fn after(delay: Duration, action: RenderAction) -> Self {
        Self { delay, action }
    }
}
