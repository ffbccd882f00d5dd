//! Transition and animation selection
//!
//! Maps a slide's declared animation, transition and duration to a
//! [`MotionDescriptor`] that a rendering layer can play. Animation kinds are
//! dispatched through a table of keyframe factories; the transition only
//! chooses the easing curve.

use crate::navigation::Direction;
use crate::slide_model::{Animation, Slide, Transition};

/// Cubic-bezier control points of the default easing curve
pub const DEFAULT_BEZIER: [f64; 4] = [0.2, 0.0, 0.2, 1.0];

/// Spring used by the `slide` transition
pub const SLIDE_SPRING: SpringParams = SpringParams {
    stiffness: 100.0,
    damping: 20.0,
};

/// Spring used by the `zoom` transition
pub const ZOOM_SPRING: SpringParams = SpringParams {
    stiffness: 200.0,
    damping: 25.0,
};

/// Visual state of a slide at one end of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f64,
    /// Horizontal offset in percent of the viewport width
    pub x_percent: f64,
    /// Vertical offset in percent of the viewport height
    pub y_percent: f64,
    /// Scale factor
    pub scale: f64,
}

impl Pose {
    /// Fully visible, in place, unscaled
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x_percent: 0.0,
        y_percent: 0.0,
        scale: 1.0,
    };

    /// Invisible but otherwise at rest
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    fn shifted_x(x_percent: f64) -> Self {
        Self {
            x_percent,
            ..Self::HIDDEN
        }
    }

    fn shifted_y(y_percent: f64) -> Self {
        Self {
            y_percent,
            ..Self::HIDDEN
        }
    }

    fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::HIDDEN
        }
    }
}

/// Spring physics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Spring stiffness
    pub stiffness: f64,
    /// Damping coefficient
    pub damping: f64,
}

/// Timing curve of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Cubic-bezier curve over the descriptor's duration
    CubicBezier([f64; 4]),
    /// Physics-based spring
    Spring(SpringParams),
    /// Jump straight to the end state
    Instant,
}

/// The three poses of an animated slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    /// Pose the entering slide starts from
    pub initial: Pose,
    /// Pose every slide rests at
    pub target: Pose,
    /// Pose the leaving slide ends at
    pub exit: Pose,
}

/// Builds the keyframes of one animation kind
pub type KeyframeFactory = fn(Direction) -> Keyframes;

/// Everything a rendering layer needs to animate one slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionDescriptor {
    /// Pose when entering starts
    pub initial: Pose,
    /// Pose at rest
    pub target: Pose,
    /// Pose when exiting ends
    pub exit: Pose,
    /// Duration in seconds (declared milliseconds / 1000)
    pub duration_seconds: f64,
    /// Timing curve
    pub easing: Easing,
}

impl MotionDescriptor {
    /// Spring parameters, when the easing is a spring
    pub fn spring_params(&self) -> Option<SpringParams> {
        match self.easing {
            Easing::Spring(params) => Some(params),
            Easing::CubicBezier(_) | Easing::Instant => None,
        }
    }

    /// Whether playing this descriptor changes nothing on screen
    pub fn is_instant(&self) -> bool {
        self.duration_seconds == 0.0
    }
}

impl Animation {
    /// Keyframe factory for this animation kind
    pub fn keyframes(self) -> KeyframeFactory {
        match self {
            Animation::FadeIn => fade,
            Animation::SlideIn => slide_in,
            Animation::SlideLeft => slide_left,
            Animation::SlideRight => slide_right,
            Animation::SlideUp => slide_up,
            Animation::SlideDown => slide_down,
            Animation::Zoom | Animation::ZoomIn => zoom_in,
            Animation::ZoomOut => zoom_out,
            Animation::None => still,
        }
    }
}

fn fade(_: Direction) -> Keyframes {
    Keyframes {
        initial: Pose::HIDDEN,
        target: Pose::REST,
        exit: Pose::HIDDEN,
    }
}

fn horizontal(enter_from: f64) -> Keyframes {
    Keyframes {
        initial: Pose::shifted_x(enter_from),
        target: Pose::REST,
        exit: Pose::shifted_x(-enter_from),
    }
}

fn vertical(enter_from: f64) -> Keyframes {
    Keyframes {
        initial: Pose::shifted_y(enter_from),
        target: Pose::REST,
        exit: Pose::shifted_y(-enter_from),
    }
}

fn slide_in(direction: Direction) -> Keyframes {
    match direction {
        Direction::Forward => horizontal(100.0),
        Direction::Backward => horizontal(-100.0),
    }
}

fn slide_left(_: Direction) -> Keyframes {
    horizontal(100.0)
}

fn slide_right(_: Direction) -> Keyframes {
    horizontal(-100.0)
}

fn slide_up(_: Direction) -> Keyframes {
    vertical(100.0)
}

fn slide_down(_: Direction) -> Keyframes {
    vertical(-100.0)
}

fn zoom_in(_: Direction) -> Keyframes {
    Keyframes {
        initial: Pose::scaled(0.8),
        target: Pose::REST,
        exit: Pose::scaled(1.2),
    }
}

fn zoom_out(_: Direction) -> Keyframes {
    Keyframes {
        initial: Pose::scaled(1.2),
        target: Pose::REST,
        exit: Pose::scaled(0.8),
    }
}

fn still(_: Direction) -> Keyframes {
    Keyframes {
        initial: Pose::REST,
        target: Pose::REST,
        exit: Pose::REST,
    }
}

/// Choose the motion of a slide
///
/// # Parameters
/// * `animation` - Declared animation kind
/// * `transition` - Declared transition (easing family)
/// * `duration_ms` - Declared duration in milliseconds
/// * `direction` - Direction of the navigation that triggered the motion
///
/// # Returns
/// * `MotionDescriptor` - Poses, duration in seconds and easing
pub fn select_motion(
    animation: Animation,
    transition: Transition,
    duration_ms: u64,
    direction: Direction,
) -> MotionDescriptor {
    let frames = animation.keyframes()(direction);

    #[allow(clippy::cast_precision_loss)]
    let declared_seconds = duration_ms as f64 / 1000.0;

    let (duration_seconds, easing) = if animation == Animation::None {
        (0.0, Easing::Instant)
    } else {
        match transition {
            Transition::None => (0.0, Easing::Instant),
            Transition::Slide => (declared_seconds, Easing::Spring(SLIDE_SPRING)),
            Transition::Zoom => (declared_seconds, Easing::Spring(ZOOM_SPRING)),
            Transition::Fade => (declared_seconds, Easing::CubicBezier(DEFAULT_BEZIER)),
        }
    };

    MotionDescriptor {
        initial: frames.initial,
        target: frames.target,
        exit: frames.exit,
        duration_seconds,
        easing,
    }
}

/// Choose the motion of a slide from its metadata
pub fn select_motion_for(slide: &Slide, direction: Direction) -> MotionDescriptor {
    select_motion(
        slide.metadata.animation,
        slide.metadata.transition,
        slide.metadata.duration_ms,
        direction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_has_no_offset() {
        let motion = select_motion(Animation::FadeIn, Transition::Fade, 1000, Direction::Forward);
        assert_eq!(motion.initial, Pose::HIDDEN);
        assert_eq!(motion.target, Pose::REST);
        assert_eq!(motion.exit, Pose::HIDDEN);
        assert_eq!(motion.duration_seconds, 1.0);
        assert_eq!(motion.easing, Easing::CubicBezier(DEFAULT_BEZIER));
        assert_eq!(motion.spring_params(), None);
    }

    #[test]
    fn test_slide_in_follows_direction() {
        let forward = select_motion(Animation::SlideIn, Transition::Fade, 500, Direction::Forward);
        assert_eq!(forward.initial.x_percent, 100.0);
        assert_eq!(forward.exit.x_percent, -100.0);

        let backward =
            select_motion(Animation::SlideIn, Transition::Fade, 500, Direction::Backward);
        assert_eq!(backward.initial.x_percent, -100.0);
        assert_eq!(backward.exit.x_percent, 100.0);
    }

    #[test]
    fn test_directional_slides_ignore_direction() {
        for direction in [Direction::Forward, Direction::Backward] {
            let left = select_motion(Animation::SlideLeft, Transition::Fade, 500, direction);
            assert_eq!(left.initial.x_percent, 100.0);
            let right = select_motion(Animation::SlideRight, Transition::Fade, 500, direction);
            assert_eq!(right.initial.x_percent, -100.0);
            let up = select_motion(Animation::SlideUp, Transition::Fade, 500, direction);
            assert_eq!(up.initial.y_percent, 100.0);
            assert_eq!(up.exit.y_percent, -100.0);
            let down = select_motion(Animation::SlideDown, Transition::Fade, 500, direction);
            assert_eq!(down.initial.y_percent, -100.0);
        }
    }

    #[test]
    fn test_zoom_scales() {
        for animation in [Animation::Zoom, Animation::ZoomIn] {
            let motion = select_motion(animation, Transition::Fade, 1000, Direction::Forward);
            assert_eq!(motion.initial.scale, 0.8);
            assert_eq!(motion.target.scale, 1.0);
            assert_eq!(motion.exit.scale, 1.2);
        }
        let out = select_motion(Animation::ZoomOut, Transition::Fade, 1000, Direction::Forward);
        assert_eq!(out.initial.scale, 1.2);
        assert_eq!(out.exit.scale, 0.8);
    }

    #[test]
    fn test_none_animation_is_instant() {
        let motion = select_motion(Animation::None, Transition::Slide, 2000, Direction::Forward);
        assert_eq!(motion.initial, Pose::REST);
        assert_eq!(motion.exit, Pose::REST);
        assert!(motion.is_instant());
        assert_eq!(motion.easing, Easing::Instant);
    }

    #[test]
    fn test_none_transition_forces_zero_duration() {
        let motion = select_motion(Animation::SlideUp, Transition::None, 5000, Direction::Forward);
        assert_eq!(motion.duration_seconds, 0.0);
        assert_eq!(motion.easing, Easing::Instant);
    }

    #[test]
    fn test_spring_transitions() {
        let slide = select_motion(Animation::FadeIn, Transition::Slide, 800, Direction::Forward);
        assert_eq!(slide.spring_params(), Some(SLIDE_SPRING));
        assert_eq!(slide.duration_seconds, 0.8);

        let zoom = select_motion(Animation::FadeIn, Transition::Zoom, 800, Direction::Forward);
        assert_eq!(
            zoom.spring_params(),
            Some(SpringParams {
                stiffness: 200.0,
                damping: 25.0
            })
        );
    }

    #[test]
    fn test_milliseconds_converted_to_seconds() {
        let motion = select_motion(Animation::FadeIn, Transition::Fade, 250, Direction::Forward);
        assert_eq!(motion.duration_seconds, 0.25);
    }

    #[test]
    fn test_every_animation_rests_at_full_opacity() {
        for animation in Animation::ALL {
            let motion = select_motion(animation, Transition::Fade, 1000, Direction::Forward);
            assert_eq!(motion.target, Pose::REST, "{:?}", animation);
        }
    }
}
