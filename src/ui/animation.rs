//! Reveal-on-scroll presets.
//!
//! Each preset is a pair of keyframes (hidden, visible) and a transition.
//! Easing and interpolation belong to whatever animates the element; this
//! module only describes the end states and decides when to switch.

use std::str::FromStr;

pub const DEFAULT_DURATION_SECS: f32 = 0.6;
pub const DEFAULT_THRESHOLD: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    #[default]
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
    Flip,
    Rotate,
    Pop,
    SlideUpBig,
}

impl AnimationKind {
    pub fn all() -> &'static [AnimationKind] {
        &[
            Self::Fade,
            Self::SlideUp,
            Self::SlideDown,
            Self::SlideLeft,
            Self::SlideRight,
            Self::Scale,
            Self::Flip,
            Self::Rotate,
            Self::Pop,
            Self::SlideUpBig,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::SlideUp => "slideUp",
            Self::SlideDown => "slideDown",
            Self::SlideLeft => "slideLeft",
            Self::SlideRight => "slideRight",
            Self::Scale => "scale",
            Self::Flip => "flip",
            Self::Rotate => "rotate",
            Self::Pop => "pop",
            Self::SlideUpBig => "slideUpBig",
        }
    }

    /// Unknown names fall back to [`AnimationKind::Fade`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for AnimationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all().iter().copied().find(|k| k.name() == s).ok_or(())
    }
}

/// Transform state at one end of a reveal. Unset fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keyframe {
    pub opacity: f32,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub rotate: Option<f32>,
    pub rotate_y: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Tween { duration_secs: f32, delay_secs: f32 },
    Spring { stiffness: f32, damping: f32, delay_secs: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Keyframe,
    pub visible: Keyframe,
    pub transition: Transition,
}

pub fn variants(kind: AnimationKind, duration_secs: f32, delay_secs: f32) -> Variants {
    let tween = Transition::Tween {
        duration_secs,
        delay_secs,
    };
    let hidden = Keyframe::default();
    let shown = Keyframe {
        opacity: 1.0,
        ..Default::default()
    };

    let (hidden, visible, transition) = match kind {
        AnimationKind::Fade => (hidden, shown, tween),
        AnimationKind::SlideUp => slide_y(50.0, tween),
        AnimationKind::SlideDown => slide_y(-50.0, tween),
        AnimationKind::SlideUpBig => slide_y(100.0, tween),
        AnimationKind::SlideLeft => slide_x(50.0, tween),
        AnimationKind::SlideRight => slide_x(-50.0, tween),
        AnimationKind::Scale => (
            Keyframe { scale: Some(0.8), ..hidden },
            Keyframe { scale: Some(1.0), ..shown },
            tween,
        ),
        AnimationKind::Flip => (
            Keyframe { rotate_y: Some(90.0), ..hidden },
            Keyframe { rotate_y: Some(0.0), ..shown },
            tween,
        ),
        AnimationKind::Rotate => (
            Keyframe { rotate: Some(20.0), ..hidden },
            Keyframe { rotate: Some(0.0), ..shown },
            tween,
        ),
        AnimationKind::Pop => (
            Keyframe { scale: Some(0.5), ..hidden },
            Keyframe { scale: Some(1.0), ..shown },
            Transition::Spring {
                stiffness: 300.0,
                damping: 10.0,
                delay_secs,
            },
        ),
    };

    Variants {
        hidden,
        visible,
        transition,
    }
}

fn slide_y(from: f32, transition: Transition) -> (Keyframe, Keyframe, Transition) {
    (
        Keyframe { y: Some(from), ..Default::default() },
        Keyframe { opacity: 1.0, y: Some(0.0), ..Default::default() },
        transition,
    )
}

fn slide_x(from: f32, transition: Transition) -> (Keyframe, Keyframe, Transition) {
    (
        Keyframe { x: Some(from), ..Default::default() },
        Keyframe { opacity: 1.0, x: Some(0.0), ..Default::default() },
        transition,
    )
}

/// In-view trigger for one animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    threshold: f32,
    once: bool,
    visible: bool,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, true)
    }
}

impl RevealState {
    pub fn new(threshold: f32, once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            once,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the fraction of the element inside the viewport. Returns the
    /// resulting visibility.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        let in_view = visible_ratio >= self.threshold && visible_ratio > 0.0;
        if self.once {
            self.visible |= in_view;
        } else {
            self.visible = in_view;
        }
        self.visible
    }
}
