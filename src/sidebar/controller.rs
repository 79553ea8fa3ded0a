//! Sidebar open/closed state and animation targets.
//!
//! The controller only decides where the sidebar should go; playing the
//! animation frames is up to whoever renders it.

use crate::workspace::settings::{AUTO_COLLAPSE_BREAKPOINT, SidebarSettings};

/// Expanded sidebar width in pixels.
pub const SIDEBAR_WIDTH: f32 = 288.0;

/// Width of the collapsed icon rail in pixels.
pub const COLLAPSED_WIDTH: f32 = 64.0;

/// Animation duration in milliseconds.
pub const ANIMATION_DURATION_MS: u64 = 300;

/// Frame time for ~60fps animation.
pub const FRAME_TIME_MS: u64 = 16;

/// Result of a sidebar state change that may require animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationTarget {
    /// No animation needed
    None,
    /// Animate to fully open (1.0)
    Open,
    /// Animate to fully closed (0.0)
    Close,
}

impl AnimationTarget {
    /// Get the target value for animation.
    pub fn value(self) -> Option<f32> {
        match self {
            AnimationTarget::None => None,
            AnimationTarget::Open => Some(1.0),
            AnimationTarget::Close => Some(0.0),
        }
    }
}

pub struct SidebarController {
    /// Whether the sidebar is logically open
    open: bool,
    /// Animation progress (0.0 = collapsed rail, 1.0 = fully open)
    animation: f32,
    /// Collapse on narrow viewports
    auto_collapse: bool,
}

impl SidebarController {
    pub fn new(settings: &SidebarSettings) -> Self {
        let open = settings.is_open;
        Self {
            open,
            animation: if open { 1.0 } else { 0.0 },
            auto_collapse: settings.auto_collapse,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_auto_collapse(&self) -> bool {
        self.auto_collapse
    }

    /// Set animation progress (called during animation updates).
    pub fn set_animation(&mut self, value: f32) {
        self.animation = value.clamp(0.0, 1.0);
    }

    /// Current rendered width in pixels.
    pub fn current_width(&self) -> f32 {
        COLLAPSED_WIDTH + (SIDEBAR_WIDTH - COLLAPSED_WIDTH) * self.animation
    }

    /// Toggle sidebar visibility and mirror it into `settings`.
    pub fn toggle(&mut self, settings: &mut SidebarSettings) -> AnimationTarget {
        self.set_open(!self.open, settings)
    }

    pub fn set_auto_collapse(&mut self, enabled: bool, settings: &mut SidebarSettings) {
        self.auto_collapse = enabled;
        settings.auto_collapse = enabled;
    }

    /// Viewport width changed. Collapses an open sidebar below the breakpoint.
    pub fn viewport_resized(&mut self, width: f32, settings: &mut SidebarSettings) -> AnimationTarget {
        if self.auto_collapse && self.open && width < AUTO_COLLAPSE_BREAKPOINT {
            log::debug!("Viewport {}px is below {}px, collapsing sidebar", width, AUTO_COLLAPSE_BREAKPOINT);
            return self.set_open(false, settings);
        }
        AnimationTarget::None
    }

    fn set_open(&mut self, open: bool, settings: &mut SidebarSettings) -> AnimationTarget {
        if self.open == open {
            return AnimationTarget::None;
        }
        self.open = open;
        settings.is_open = open;
        if open { AnimationTarget::Open } else { AnimationTarget::Close }
    }

    /// Calculate eased animation progress.
    ///
    /// Uses ease-out cubic for smooth deceleration.
    pub fn ease_progress(current: f32, target: f32, step: usize, total_steps: usize) -> f32 {
        let t = step as f32 / total_steps as f32;
        let eased = 1.0 - (1.0 - t).powi(3);
        current + (target - current) * eased
    }

    /// Animation step count based on duration and frame time.
    pub fn animation_steps() -> usize {
        (ANIMATION_DURATION_MS / FRAME_TIME_MS) as usize
    }

    /// Progress values to play, one per frame, ending exactly at the target.
    pub fn animation_frames(&self, target: AnimationTarget) -> Vec<f32> {
        let Some(to) = target.value() else {
            return Vec::new();
        };
        let steps = Self::animation_steps();
        (1..=steps)
            .map(|step| Self::ease_progress(self.animation, to, step, steps))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed() -> SidebarSettings {
        SidebarSettings { is_open: false, auto_collapse: true }
    }

    #[test]
    fn toggle_flips_and_persists_into_settings() {
        let mut settings = closed();
        let mut ctrl = SidebarController::new(&settings);
        assert!(!ctrl.is_open());

        assert_eq!(ctrl.toggle(&mut settings), AnimationTarget::Open);
        assert!(ctrl.is_open());
        assert!(settings.is_open);

        assert_eq!(ctrl.toggle(&mut settings), AnimationTarget::Close);
        assert!(!settings.is_open);
    }

    #[test]
    fn narrow_viewport_collapses_open_sidebar() {
        let mut settings = SidebarSettings::default();
        let mut ctrl = SidebarController::new(&settings);

        assert_eq!(ctrl.viewport_resized(1280.0, &mut settings), AnimationTarget::None);
        assert_eq!(ctrl.viewport_resized(900.0, &mut settings), AnimationTarget::Close);
        assert!(!ctrl.is_open());
        assert!(!settings.is_open);
        assert_eq!(ctrl.viewport_resized(800.0, &mut settings), AnimationTarget::None);
    }

    #[test]
    fn auto_collapse_can_be_disabled() {
        let mut settings = SidebarSettings::default();
        let mut ctrl = SidebarController::new(&settings);
        ctrl.set_auto_collapse(false, &mut settings);
        assert_eq!(ctrl.viewport_resized(600.0, &mut settings), AnimationTarget::None);
        assert!(ctrl.is_open());
        assert!(!settings.auto_collapse);
    }

    #[test]
    fn frames_end_at_target() {
        let settings = SidebarSettings::default();
        let ctrl = SidebarController::new(&settings);
        let frames = ctrl.animation_frames(AnimationTarget::Close);
        assert_eq!(frames.len(), SidebarController::animation_steps());
        assert!(frames.windows(2).all(|w| w[1] <= w[0]));
        assert!(frames.last().unwrap().abs() < f32::EPSILON);
        assert!(ctrl.animation_frames(AnimationTarget::None).is_empty());
    }

    #[test]
    fn width_interpolates_between_rail_and_full() {
        let mut ctrl = SidebarController::new(&SidebarSettings::default());
        assert_eq!(ctrl.current_width(), SIDEBAR_WIDTH);
        ctrl.set_animation(0.0);
        assert_eq!(ctrl.current_width(), COLLAPSED_WIDTH);
        ctrl.set_animation(4.0);
        assert_eq!(ctrl.current_width(), SIDEBAR_WIDTH);
    }
}
